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

use std::path::PathBuf;

use smart_default::SmartDefault;

/// Permission bits applied to new entry files: owner read/write only.
pub const DEFAULT_FILE_MODE: u32 = 0o600;

/// Digits in `u64::MAX`; wider zero padding is clamped to this.
pub const MAX_ID_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, SmartDefault)]
pub struct QueueConfig {
    /// Backing directory holding one file per entry.
    #[default(_code = "PathBuf::from(\"./queue_data\")")]
    pub dir:               PathBuf,
    /// How new entry ids are rendered as file names.
    pub id_format:         IdFormat,
    /// Unix permission bits for new entry files. Ignored elsewhere.
    #[default(_code = "DEFAULT_FILE_MODE")]
    pub file_mode:         u32,
    /// Create `dir` (and its parents) before recovery instead of failing.
    pub create_if_missing: bool,
}

/// File naming scheme for entries written by this queue.
///
/// Recovery always parses names as integers and orders them numerically, so
/// the format only affects how new files look in a directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdFormat {
    /// Plain decimal, e.g. `42`.
    #[default]
    Decimal,
    /// Decimal left-padded with zeros to at least `width` digits, e.g.
    /// `0000000042`. Widths above [`MAX_ID_WIDTH`] are clamped.
    ZeroPadded(usize),
}

impl IdFormat {
    #[must_use]
    pub fn format(self, id: u64) -> String {
        match self {
            Self::Decimal => id.to_string(),
            Self::ZeroPadded(width) => {
                let width = width.min(MAX_ID_WIDTH);
                format!("{id:0width$}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QueueConfig::default();
        assert_eq!(config.dir, PathBuf::from("./queue_data"));
        assert_eq!(config.id_format, IdFormat::Decimal);
        assert_eq!(config.file_mode, 0o600);
        assert!(!config.create_if_missing);
    }

    #[test]
    fn test_id_format() {
        assert_eq!(IdFormat::Decimal.format(42), "42");
        assert_eq!(IdFormat::ZeroPadded(10).format(42), "0000000042");
        assert_eq!(IdFormat::ZeroPadded(2).format(12345), "12345");
        assert_eq!(IdFormat::ZeroPadded(0).format(7), "7");
    }

    #[test]
    fn test_id_format_width_is_clamped() {
        assert_eq!(
            IdFormat::ZeroPadded(usize::MAX).format(42),
            "00000000000000000042"
        );
        assert_eq!(IdFormat::ZeroPadded(4096).format(42).len(), MAX_ID_WIDTH);
        assert_eq!(
            IdFormat::ZeroPadded(usize::MAX).format(u64::MAX),
            u64::MAX.to_string()
        );
    }
}
