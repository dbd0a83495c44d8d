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

use std::io;
use std::ptr;

/// The kernel's "no limit" sentinel.
pub const UNLIMITED: u64 = libc::RLIM64_INFINITY;

/// The soft and hard value of one resource limit.
///
/// The kernel enforces `soft <= hard`; this type does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitValue {
	pub soft: u64,
	pub hard: u64,
}

/// Queries the current soft and hard limit of `resource` on the target process.
pub fn get_limit(pid: u32, resource: libc::__rlimit_resource_t) -> io::Result<LimitValue> {
	let mut old = libc::rlimit64 { rlim_cur: 0, rlim_max: 0 };
	// prlimit64 only writes through the old-limit pointer we hand it.
	let ret = unsafe { libc::prlimit64(pid as libc::pid_t, resource, ptr::null(), &mut old) };
	if ret != 0 {
		return Err(io::Error::last_os_error());
	}
	Ok(LimitValue {
		soft: old.rlim_cur,
		hard: old.rlim_max,
	})
}

/// Sets the soft and hard limit of `resource` on the target process in one call.
pub fn set_limit(pid: u32, resource: libc::__rlimit_resource_t, value: LimitValue) -> io::Result<()> {
	let new = libc::rlimit64 {
		rlim_cur: value.soft,
		rlim_max: value.hard,
	};
	// prlimit64 only reads through the new-limit pointer we hand it.
	let ret = unsafe { libc::prlimit64(pid as libc::pid_t, resource, &new, ptr::null_mut()) };
	if ret != 0 {
		return Err(io::Error::last_os_error());
	}
	Ok(())
}

/// Liveness probe: signal 0 tests existence and permission without delivering anything.
pub fn process_exists(pid: u32) -> bool {
	unsafe { libc::kill(pid as libc::pid_t, 0) == 0 }
}

pub fn effective_uid() -> libc::uid_t {
	unsafe { libc::geteuid() }
}
