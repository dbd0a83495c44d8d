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

use crate::driver::usage_text;
use std::io;
use thiserror::Error;

/// Everything that can terminate an invocation with a non-zero status.
///
/// Per-row query failures in list mode are not represented here: they degrade
/// to "unknown" in the output and leave the exit status at 0.
#[derive(Error, Debug)]
pub enum Error {
	/// Missing or malformed arguments; the usage text is the whole diagnostic.
	#[error("missing or malformed arguments")]
	Usage,

	/// The pid argument did not parse to a positive integer, or the liveness
	/// probe failed for an unprivileged caller.
	#[error("invalid PID {0}")]
	InvalidPid(String),

	/// The option letter is not bound to any catalog entry.
	#[error("unknown option {0}")]
	UnknownOption(String),

	/// The kernel rejected the set call, e.g. raising a hard limit without privilege.
	#[error("rlimit: {0}")]
	SetFailed(#[source] io::Error),
}

impl Error {
	/// Stable, distinct exit status for each failure class.
	pub fn exit_code(&self) -> i32 {
		match self {
			Error::Usage => 1,
			Error::InvalidPid(_) => 2,
			Error::UnknownOption(_) => 3,
			Error::SetFailed(_) => 4,
		}
	}

	/// Writes the diagnostic to stderr, with usage text where the CLI calls for it.
	pub fn report(&self) {
		if !matches!(self, Error::Usage) {
			eprintln!("{self}");
		}
		if matches!(self, Error::Usage | Error::UnknownOption(_)) {
			eprintln!("{}", usage_text());
		}
	}
}
