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

/// A descriptor for one kind of resource limit known to this tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limit {
	/// Human-readable label shown in the listing, such as "Max cpu time".
	pub description: &'static str,

	/// Display unit, such as "seconds" or "bytes".
	pub unit: &'static str,

	/// The `RLIMIT_*` enumerator identifying this limit to the kernel.
	pub resource: libc::__rlimit_resource_t,

	/// Single-letter CLI option selecting this limit.
	pub flag: char,
}

// Catalog order is the display order of `prlimit <pid> -a`.
static CATALOG: [Limit; 16] = [
	Limit { description: "Max cpu time", unit: "seconds", resource: libc::RLIMIT_CPU, flag: 't' },
	Limit { description: "Max file size", unit: "bytes", resource: libc::RLIMIT_FSIZE, flag: 'f' },
	Limit { description: "Max data size", unit: "bytes", resource: libc::RLIMIT_DATA, flag: 'd' },
	Limit { description: "Max stack size", unit: "bytes", resource: libc::RLIMIT_STACK, flag: 's' },
	Limit { description: "Max core file size", unit: "bytes", resource: libc::RLIMIT_CORE, flag: 'c' },
	Limit { description: "Max resident set", unit: "bytes", resource: libc::RLIMIT_RSS, flag: 'm' },
	Limit { description: "Max processes", unit: "processes", resource: libc::RLIMIT_NPROC, flag: 'u' },
	Limit { description: "Max open files", unit: "files", resource: libc::RLIMIT_NOFILE, flag: 'n' },
	Limit { description: "Max locked memory", unit: "bytes", resource: libc::RLIMIT_MEMLOCK, flag: 'l' },
	Limit { description: "Max address space", unit: "bytes", resource: libc::RLIMIT_AS, flag: 'v' },
	Limit { description: "Max file locks", unit: "locks", resource: libc::RLIMIT_LOCKS, flag: 'x' },
	Limit { description: "Max pending signals", unit: "signals", resource: libc::RLIMIT_SIGPENDING, flag: 'i' },
	Limit { description: "Max msgqueue size", unit: "bytes", resource: libc::RLIMIT_MSGQUEUE, flag: 'q' },
	Limit { description: "Max nice priority", unit: "priority", resource: libc::RLIMIT_NICE, flag: 'e' },
	Limit { description: "Max realtime priority", unit: "priority", resource: libc::RLIMIT_RTPRIO, flag: 'r' },
	Limit { description: "Max realtime timeout", unit: "useconds", resource: libc::RLIMIT_RTTIME, flag: 'y' },
];

impl Limit {
	/// Returns every known limit in display order.
	pub fn all() -> &'static [Limit] {
		&CATALOG
	}

	/// Finds the limit bound to a single-letter CLI option.
	///
	/// # Examples
	///
	/// ```
	/// use prlimit::Limit;
	///
	/// let limit = Limit::from_flag('t').unwrap();
	/// assert_eq!(limit.description, "Max cpu time");
	/// assert_eq!(limit.unit, "seconds");
	/// assert!(Limit::from_flag('z').is_none());
	/// ```
	pub fn from_flag(flag: char) -> Option<&'static Limit> {
		CATALOG.iter().find(|limit| limit.flag == flag)
	}
}
