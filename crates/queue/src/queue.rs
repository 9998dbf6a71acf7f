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

//! The directory-backed FIFO queue.
//!
//! A [`Queue`] keeps two pieces of state behind one mutex:
//! - the pending entries, oldest first
//! - the id counter, which only ever moves forward
//!
//! Every enqueue and dequeue holds the lock for its whole duration, file I/O
//! included, so operations on one instance are fully serialized.
//!
//! ## Usage
//!
//! ```ignore
//! let queue = Queue::open("/path/to/queue")?;
//! queue.enqueue("my entry")?;
//!
//! // Later, possibly in another process.
//! let queue = Queue::open("/path/to/queue")?;
//! let entry = queue.dequeue_string()?;
//! ```

use std::{
    collections::VecDeque,
    path::{Path, PathBuf},
};

use bytes::Bytes;
use parking_lot::Mutex;
use snafu::{OptionExt, ResultExt};
use tracing::{debug, warn};

use crate::{
    QueueBuilder, QueueConfig, Result,
    error::{
        DecodeSnafu, DeleteSnafu, EmptySnafu, IdExhaustedSnafu, ReadSnafu, WriteSnafu,
    },
    file::{read_entry, remove_entry, write_entry},
    path::EntryFile,
    recovery::{RecoveryInfo, recover},
};

/// A persistent FIFO queue storing one file per entry.
///
/// Safe to share between threads (e.g. behind an `Arc`). Only one `Queue`
/// may use a given directory at a time; this is not checked.
#[derive(Debug)]
pub struct Queue {
    config: QueueConfig,
    state:  Mutex<State>,
}

#[derive(Debug)]
struct State {
    /// Entries not yet dequeued, ascending by id.
    pending: VecDeque<EntryFile>,
    /// Last id handed out or recovered.
    current: u64,
}

impl Queue {
    /// Open the queue backed by `dir`, which must already exist.
    ///
    /// Existing entries are recovered from the directory listing.
    pub fn open<P: Into<PathBuf>>(dir: P) -> Result<Self> { QueueBuilder::new(dir).build() }

    pub(crate) fn with_config(config: QueueConfig) -> Result<Self> {
        let RecoveryInfo { entries, current } = recover(&config)?;

        Ok(Self {
            config,
            state: Mutex::new(State {
                pending: entries,
                current,
            }),
        })
    }

    /// Persist `payload` as a new entry at the tail of the queue.
    ///
    /// Text can be passed directly; it is stored as UTF-8.
    ///
    /// The id is consumed before the write. If the write fails the id is not
    /// reused, leaving a gap in the numbering. Once the counter reaches
    /// `u64::MAX` every enqueue fails with `IdExhausted` and nothing changes.
    pub fn enqueue(&self, payload: impl AsRef<[u8]>) -> Result<()> {
        let data = payload.as_ref();
        let mut state = self.state.lock();

        let id = state
            .current
            .checked_add(1)
            .context(IdExhaustedSnafu {
                current: state.current,
            })?;
        state.current = id;
        let name = self.config.id_format.format(id);
        let path = self.config.dir.join(&name);

        write_entry(&path, data, self.config.file_mode)
            .inspect_err(|error| warn!(id, path = ?path, %error, "Failed to write entry"))
            .context(WriteSnafu { path: &path })?;

        state.pending.push_back(EntryFile { id, name });
        debug!(id, len = data.len(), "Enqueued entry");
        Ok(())
    }

    /// Remove and return the oldest entry.
    ///
    /// Returns [`QueueError::Empty`](crate::QueueError::Empty) when nothing is
    /// pending. On a read or delete failure the entry stays at the head.
    pub fn dequeue(&self) -> Result<Bytes> { self.dequeue_with(|_, data| Ok(Bytes::from(data))) }

    /// Remove and return the oldest entry decoded as UTF-8.
    ///
    /// An entry that is not valid UTF-8 is left in place, so it can still be
    /// taken with [`dequeue`](Self::dequeue).
    pub fn dequeue_string(&self) -> Result<String> {
        self.dequeue_with(|id, data| String::from_utf8(data).context(DecodeSnafu { id }))
    }

    /// Read the head entry, convert it, then delete it. Any failure leaves the
    /// head pending.
    fn dequeue_with<T>(&self, convert: impl FnOnce(u64, Vec<u8>) -> Result<T>) -> Result<T> {
        let mut state = self.state.lock();

        let head = state.pending.front().context(EmptySnafu)?;
        let id = head.id;
        let path = self.config.dir.join(&head.name);

        let data = read_entry(&path).context(ReadSnafu { path: &path })?;
        let len = data.len();
        let value = convert(id, data)?;
        remove_entry(&path).context(DeleteSnafu { path: &path })?;

        state.pending.pop_front();
        debug!(id, len, "Dequeued entry");
        Ok(value)
    }

    /// Number of pending entries.
    #[must_use]
    pub fn len(&self) -> usize { self.state.lock().pending.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.state.lock().pending.is_empty() }

    /// Snapshot of the pending ids, oldest first.
    #[must_use]
    pub fn pending_ids(&self) -> Vec<u64> {
        self.state.lock().pending.iter().map(|e| e.id).collect()
    }

    /// The last id assigned by this instance, or the largest recovered id if
    /// nothing has been enqueued yet.
    #[must_use]
    pub fn current_id(&self) -> u64 { self.state.lock().current }

    /// The backing directory.
    #[must_use]
    pub fn dir(&self) -> &Path { &self.config.dir }

    #[must_use]
    pub const fn config(&self) -> &QueueConfig { &self.config }
}
