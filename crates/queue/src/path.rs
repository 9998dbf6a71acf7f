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

use std::{io, path::Path};

use tracing::debug;

/// An entry file found in, or written to, the backing directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct EntryFile {
    /// Numeric id parsed from (or rendered into) the file name.
    pub id:   u64,
    /// Exact file name on disk.
    pub name: String,
}

/// Parses a file name as an entry id. Anything that is not a base-10
/// non-negative integer yields `None`.
pub fn parse_entry_id(name: &str) -> Option<u64> { name.parse().ok() }

/// Lists the immediate contents of `dir` and returns every entry whose name
/// parses as an id, sorted by id. Other names are skipped.
pub fn scan_entry_files<P: AsRef<Path>>(dir: P) -> io::Result<Vec<EntryFile>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir.as_ref())? {
        let name = entry?.file_name();
        let Some(name) = name.to_str() else {
            debug!(name = ?name, "Skipping non UTF-8 file name");
            continue;
        };

        match parse_entry_id(name) {
            Some(id) => files.push(EntryFile {
                id,
                name: name.to_owned(),
            }),
            None => debug!(name, "Skipping non-entry file"),
        }
    }

    files.sort();
    Ok(files)
}
