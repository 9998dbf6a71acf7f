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

//! Entry file primitives.
//!
//! An entry file holds the raw payload and nothing else: no header, no length
//! prefix, no checksum. Writes go straight through `std::fs` without fsync or
//! rename, so durability is whatever the filesystem gives.

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::Path,
};

/// Write `data` to `path`, creating or truncating the file.
///
/// On Unix the file is created with permission bits `mode`.
pub fn write_entry(path: &Path, data: &[u8], mode: u32) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    let mut file = options.open(path)?;
    file.write_all(data)
}

/// Read the whole entry file at `path`.
pub fn read_entry(path: &Path) -> io::Result<Vec<u8>> { fs::read(path) }

/// Remove the entry file at `path`.
pub fn remove_entry(path: &Path) -> io::Result<()> { fs::remove_file(path) }
