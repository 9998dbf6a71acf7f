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

use crate::{IdFormat, Queue, QueueConfig, Result};

pub struct QueueBuilder {
    config: QueueConfig,
}

impl QueueBuilder {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            config: QueueConfig {
                dir: dir.into(),
                ..Default::default()
            },
        }
    }

    #[must_use]
    pub const fn id_format(mut self, format: IdFormat) -> Self {
        self.config.id_format = format;
        self
    }

    #[must_use]
    pub const fn file_mode(mut self, mode: u32) -> Self {
        self.config.file_mode = mode;
        self
    }

    #[must_use]
    pub const fn create_if_missing(mut self, create: bool) -> Self {
        self.config.create_if_missing = create;
        self
    }

    /// Open the queue, recovering any entries already in the directory.
    pub fn build(self) -> Result<Queue> { Queue::with_config(self.config) }
}
