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

//! Startup recovery.
//!
//! The directory listing is the only source of truth: there is no manifest.
//! Recovery lists the backing directory, keeps every name that parses as an
//! integer, and orders them by id. The largest id becomes the counter the
//! next enqueue increments from.

use std::collections::VecDeque;

use snafu::ResultExt;
use tracing::info;

use crate::{
    QueueConfig, Result,
    error::DirectoryAccessSnafu,
    path::{EntryFile, scan_entry_files},
};

/// Queue state rebuilt from the backing directory.
#[derive(Debug, Default)]
pub struct RecoveryInfo {
    /// Pending entries in ascending id order.
    pub entries: VecDeque<EntryFile>,
    /// Largest recovered id, or 0 for an empty directory.
    pub current: u64,
}

/// Rebuild queue state from `config.dir`.
///
/// Fails only if the directory cannot be listed (or, with
/// `create_if_missing`, created).
pub fn recover(config: &QueueConfig) -> Result<RecoveryInfo> {
    let dir = &config.dir;

    if config.create_if_missing {
        std::fs::create_dir_all(dir).context(DirectoryAccessSnafu { path: dir })?;
    }

    let entries: VecDeque<EntryFile> = scan_entry_files(dir)
        .context(DirectoryAccessSnafu { path: dir })?
        .into();
    let current = entries.back().map_or(0, |entry| entry.id);

    info!(
        path = ?dir,
        pending = entries.len(),
        current,
        "Queue recovery complete"
    );

    Ok(RecoveryInfo { entries, current })
}
