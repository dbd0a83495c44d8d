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

use crate::catalog::Limit;
use crate::error::Error;
use crate::rlimit;
use crate::rlimit::LimitValue;
use crate::rlimit::UNLIMITED;

/// One-line usage summary, with the option letters derived from the catalog
/// so the text never goes stale.
pub fn usage_text() -> String {
	let flags: String = Limit::all().iter().map(|limit| limit.flag).collect();
	format!("usage: prlimit [pid] [-ah{flags}] [limit]")
}

/// Runs one invocation against the three positional CLI tokens.
///
/// Exactly one exit path is taken: usage error, invalid pid, list all,
/// unknown option, or set one (success or failure).
pub fn run(pid: Option<&str>, option: Option<&str>, value: Option<&str>) -> Result<(), Error> {
	let Some(pid) = pid else {
		return Err(Error::Usage);
	};
	if pid == "-h" {
		return Err(Error::Usage);
	}
	let pid = resolve_pid(pid)?;
	let Some(option) = option else {
		return Err(Error::Usage);
	};
	if option == "-a" {
		print!("{}", render_listing(pid));
		return Ok(());
	}
	let mut letters = option.chars();
	let (Some('-'), Some(flag), None) = (letters.next(), letters.next(), letters.next()) else {
		return Err(Error::Usage);
	};
	let Some(value) = value else {
		return Err(Error::Usage);
	};
	let Some(limit) = Limit::from_flag(flag) else {
		return Err(Error::UnknownOption(option.to_string()));
	};
	let value: u64 = value.parse().map_err(|_| Error::Usage)?;
	let new = LimitValue {
		soft: value,
		hard: value,
	};
	rlimit::set_limit(pid, limit.resource, new).map_err(Error::SetFailed)
}

fn resolve_pid(arg: &str) -> Result<u32, Error> {
	let pid: u32 = arg.parse().unwrap_or(0);
	// A privileged caller skips the liveness probe and only fails later,
	// at the prlimit64 call, if the pid is dead.
	if pid == 0 || (rlimit::effective_uid() != 0 && !rlimit::process_exists(pid)) {
		return Err(Error::InvalidPid(arg.to_string()));
	}
	Ok(pid)
}

/// Renders the full `-a` listing: a header row, then one fixed-width row per
/// catalog entry. A limit the kernel cannot report shows "unknown" in both
/// value columns rather than aborting the listing.
pub fn render_listing(pid: u32) -> String {
	let mut out = String::new();
	out.push_str(&format!(
		"{:<26}{:<21}{:<21}{:<15}Option\n",
		"Limit", "Soft Limit", "Hard Limit", "Units"
	));
	for limit in Limit::all() {
		let (soft, hard) = match rlimit::get_limit(pid, limit.resource) {
			Ok(value) => (format_limit(value.soft), format_limit(value.hard)),
			Err(_) => ("unknown".to_string(), "unknown".to_string()),
		};
		out.push_str(&render_row(limit, &soft, &hard));
		out.push('\n');
	}
	out
}

/// Renders a limit value as a decimal integer, or "unlimited" for the sentinel.
pub fn format_limit(value: u64) -> String {
	if value == UNLIMITED {
		"unlimited".to_string()
	} else {
		value.to_string()
	}
}

// Column widths 26/21/21/15 with truncation, then the option letter.
fn render_row(limit: &Limit, soft: &str, hard: &str) -> String {
	format!(
		"{:<26.26}{:<21.21}{:<21.21}{:<15.15}-{}",
		limit.description, soft, hard, limit.unit, limit.flag
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::process;

	#[test]
	fn test_usage_text() {
		insta::assert_snapshot!(usage_text(), @"usage: prlimit [pid] [-ahtfdscmunlvxiqery] [limit]");
	}

	#[test]
	fn test_usage_lists_every_flag() {
		let flags: String = Limit::all().iter().map(|limit| limit.flag).collect();
		assert!(usage_text().contains(&format!("[-ah{flags}]")));
	}

	#[test]
	fn test_format_limit() {
		assert_eq!(format_limit(0), "0");
		assert_eq!(format_limit(30), "30");
		assert_eq!(format_limit(UNLIMITED), "unlimited");
	}

	#[test]
	fn test_row_layout() {
		let limit = Limit::from_flag('t').unwrap();
		let row = render_row(limit, "30", "unlimited");
		insta::assert_snapshot!(row, @"Max cpu time              30                   unlimited            seconds        -t");
		assert_eq!(row.len(), 85);
		assert_eq!(&row[0..26], "Max cpu time              ");
		assert_eq!(&row[26..47], "30                   ");
		assert_eq!(&row[47..68], "unlimited            ");
		assert_eq!(&row[68..83], "seconds        ");
		assert_eq!(&row[83..], "-t");
	}

	#[test]
	fn test_row_truncates_overflowing_columns() {
		let limit = Limit {
			description: "a label that is much longer than twenty-six columns",
			unit: "bytes",
			resource: libc::RLIMIT_CPU,
			flag: 't',
		};
		let row = render_row(&limit, "123456789012345678901234567890", "0");
		assert_eq!(row.len(), 85);
		assert_eq!(&row[0..26], "a label that is much longe");
		assert_eq!(&row[26..47], "123456789012345678901");
	}

	#[test]
	fn test_header_layout() {
		let listing = render_listing(process::id());
		let header = listing.lines().next().unwrap();
		insta::assert_snapshot!(header, @"Limit                     Soft Limit           Hard Limit           Units          Option");
		assert_eq!(header.len(), 89);
	}

	#[test]
	fn test_listing_covers_catalog_in_order() {
		let listing = render_listing(process::id());
		let lines: Vec<&str> = listing.lines().collect();
		assert_eq!(lines.len(), 1 + Limit::all().len());
		for (line, limit) in lines[1..].iter().zip(Limit::all()) {
			assert_eq!(line.len(), 85);
			assert!(line.starts_with(limit.description));
			assert!(line.ends_with(&format!("-{}", limit.flag)));
		}
	}

	#[test]
	fn test_missing_arguments_are_usage_errors() {
		assert!(matches!(run(None, None, None), Err(Error::Usage)));
		assert!(matches!(run(Some("-h"), None, None), Err(Error::Usage)));
		let pid = process::id().to_string();
		assert!(matches!(run(Some(&pid), None, None), Err(Error::Usage)));
		assert!(matches!(run(Some(&pid), Some("-t"), None), Err(Error::Usage)));
	}

	#[test]
	fn test_malformed_options_are_usage_errors() {
		let pid = process::id().to_string();
		assert!(matches!(run(Some(&pid), Some("-tt"), Some("30")), Err(Error::Usage)));
		assert!(matches!(run(Some(&pid), Some("t"), Some("30")), Err(Error::Usage)));
		assert!(matches!(run(Some(&pid), Some("-t"), Some("thirty")), Err(Error::Usage)));
	}

	#[test]
	fn test_invalid_pids() {
		assert!(matches!(run(Some("0"), Some("-a"), None), Err(Error::InvalidPid(_))));
		assert!(matches!(run(Some("abc"), Some("-a"), None), Err(Error::InvalidPid(_))));
		assert!(matches!(run(Some("-5"), Some("-a"), None), Err(Error::InvalidPid(_))));
	}

	#[test]
	fn test_unknown_option() {
		let pid = process::id().to_string();
		let err = run(Some(&pid), Some("-z"), Some("10")).unwrap_err();
		assert!(matches!(err, Error::UnknownOption(ref token) if token == "-z"));
	}
}
