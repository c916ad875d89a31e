use cjs_exports::cli::{Args, Command};
use cjs_exports::{logging, NAME, VERSION};
use std::process;

fn main() {
    let args = Args::parse_args();

    if let Err(err) = logging::init(args.verbose, args.quiet, args.log_json) {
        eprintln!("{}: {}", err.severity(), err.user_message());
        process::exit(2);
    }
    tracing::debug!("{} v{}", NAME, VERSION);

    let exit_code = Command::from_args(args).run();
    process::exit(exit_code);
}
