// Copyright 2026 Octave Online LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! This package contains a lightweight CLI tool for inspecting and modifying the resource limits of a running process (CPU time, file size, memory, open files, and so on) via the Linux `prlimit64(2)` facility.
//!
//! The tool understands a fixed catalog of 16 limit kinds, each bound to a display label, a unit, and a single-letter option:
//!
//! - `prlimit <pid> -a` lists the current soft and hard value of every known limit.
//! - `prlimit <pid> -<flag> <value>` sets both the soft and the hard limit bound to `<flag>`.
//! - `prlimit -h` prints usage help, including the full list of option letters.

mod catalog;
mod driver;
mod error;
mod rlimit;

pub use catalog::Limit;
pub use driver::render_listing;
pub use driver::run;
pub use error::Error;
pub use rlimit::get_limit;
pub use rlimit::set_limit;
pub use rlimit::LimitValue;
