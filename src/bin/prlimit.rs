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

use clap::error::ErrorKind;
use clap::Parser;
use prlimit::Error;
use std::process;

// Clap's auto help is disabled: "-h" must land in the pid slot and produce
// this tool's own usage text, option letters included.
#[derive(Parser, Debug)]
#[command(version, disable_help_flag = true, about = "Gets and sets resource limits on running processes")]
struct Cli {
	/// Process ID of the target process, or "-h" to print usage help.
	#[arg(allow_hyphen_values(true))]
	pid: Option<String>,

	/// "-a" to list every known limit, or "-<flag>" to select the limit to set.
	#[arg(allow_hyphen_values(true))]
	option: Option<String>,

	/// New value for both the soft and the hard limit.
	#[arg(allow_hyphen_values(true))]
	value: Option<String>,
}

fn main() {
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(err) if err.kind() == ErrorKind::DisplayVersion => err.exit(),
		Err(_) => fail(Error::Usage),
	};
	if let Err(err) = prlimit::run(cli.pid.as_deref(), cli.option.as_deref(), cli.value.as_deref()) {
		fail(err);
	}
}

fn fail(err: Error) -> ! {
	err.report();
	process::exit(err.exit_code())
}

#[test]
fn test_cli() {
	fn cli(input: &str) -> Result<Cli, clap::Error> {
		Cli::try_parse_from(shlex::split(input).unwrap())
	}
	let args = cli("prlimit").unwrap();
	assert_eq!(args.pid, None);
	assert_eq!(args.option, None);
	assert_eq!(args.value, None);

	let args = cli("prlimit -h").unwrap();
	assert_eq!(args.pid.as_deref(), Some("-h"));

	let args = cli("prlimit 123 -a").unwrap();
	assert_eq!(args.pid.as_deref(), Some("123"));
	assert_eq!(args.option.as_deref(), Some("-a"));
	assert_eq!(args.value, None);

	let args = cli("prlimit 123 -t 30").unwrap();
	assert_eq!(args.pid.as_deref(), Some("123"));
	assert_eq!(args.option.as_deref(), Some("-t"));
	assert_eq!(args.value.as_deref(), Some("30"));

	let args = cli("prlimit 123 -z 10").unwrap();
	assert_eq!(args.option.as_deref(), Some("-z"));

	assert!(cli("prlimit 123 -t 30 extra").is_err());
}
