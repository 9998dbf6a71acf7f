// Copyright 2025 Crrow
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{io, path::PathBuf, string::FromUtf8Error};

use snafu::Snafu;

/// Result type for queue operations.
pub type Result<T> = std::result::Result<T, QueueError>;

/// Queue operation errors.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum QueueError {
    /// The backing directory could not be listed (or created).
    #[snafu(display("Cannot access queue directory {}", path.display()))]
    DirectoryAccess {
        path:   PathBuf,
        source: io::Error,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },

    /// No entries are currently pending. This is an expected outcome of
    /// `dequeue`, not a failure.
    #[snafu(display("Queue is empty"))]
    Empty,

    /// Writing a new entry file failed. The id was consumed anyway.
    #[snafu(display("Failed to write entry {}", path.display()))]
    Write {
        path:   PathBuf,
        source: io::Error,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },

    /// The id counter is at `u64::MAX`; no further entry can be named.
    #[snafu(display("Entry ids exhausted after {current}"))]
    IdExhausted { current: u64 },

    /// The head entry file could not be read; the entry stays pending.
    #[snafu(display("Failed to read entry {}", path.display()))]
    Read {
        path:   PathBuf,
        source: io::Error,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },

    /// The head entry was read but its file could not be removed; the entry
    /// stays pending.
    #[snafu(display("Failed to delete entry {}", path.display()))]
    Delete {
        path:   PathBuf,
        source: io::Error,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },

    /// The head entry is not valid UTF-8; it stays pending and can still be
    /// taken with `dequeue`.
    #[snafu(display("Entry {id} is not valid UTF-8"))]
    Decode {
        id:     u64,
        source: FromUtf8Error,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },
}

impl QueueError {
    /// Returns `true` if this is the "queue is empty" signal.
    #[must_use]
    pub const fn is_empty(&self) -> bool { matches!(self, Self::Empty) }
}

#[cfg(test)]
mod tests {
    use snafu::ResultExt;

    use super::*;

    fn missing() -> io::Error { io::Error::from(io::ErrorKind::NotFound) }

    #[test]
    fn test_empty_is_distinguished() {
        assert!(QueueError::Empty.is_empty());

        let err = Err::<(), _>(missing())
            .context(ReadSnafu { path: "/q/1" })
            .unwrap_err();
        assert!(!err.is_empty());
    }

    #[test]
    fn test_display_includes_path() {
        let err = Err::<(), _>(missing())
            .context(DirectoryAccessSnafu {
                path: "/no/such/dir",
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "Cannot access queue directory /no/such/dir");

        let err = Err::<(), _>(missing())
            .context(DeleteSnafu { path: "/q/7" })
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to delete entry /q/7");
    }

    #[test]
    fn test_id_exhausted_display() {
        let err = IdExhaustedSnafu { current: u64::MAX }.build();
        assert_eq!(
            err.to_string(),
            "Entry ids exhausted after 18446744073709551615"
        );
    }

    #[test]
    fn test_decode_display() {
        let source = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = Err::<(), _>(source)
            .context(DecodeSnafu { id: 3_u64 })
            .unwrap_err();
        assert_eq!(err.to_string(), "Entry 3 is not valid UTF-8");
    }
}
