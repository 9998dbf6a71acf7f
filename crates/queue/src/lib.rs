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

//! A persistent FIFO queue backed by a directory.
//!
//! Every entry is a file in the backing directory, named by its numeric id
//! and holding the raw payload. Opening a [`Queue`] on a directory recovers
//! whatever a previous instance left behind, in order, from the directory
//! listing alone.
//!
//! ```ignore
//! let q1 = dirqueue::Queue::open("/tmp/myqueue")?;
//! q1.enqueue("my entry")?;
//! drop(q1);
//!
//! let q2 = dirqueue::Queue::open("/tmp/myqueue")?;
//! assert_eq!(q2.dequeue_string()?, "my entry");
//! ```
//!
//! Files whose names are not integers are ignored, so the directory may hold
//! other files. Only one `Queue` may use a directory at a time.

pub mod builder;
pub mod config;
pub mod error;
mod file;
mod path;
mod queue;
mod recovery;

pub use builder::QueueBuilder;
pub use config::{DEFAULT_FILE_MODE, IdFormat, MAX_ID_WIDTH, QueueConfig};
pub use error::{QueueError, Result};
pub use queue::Queue;
