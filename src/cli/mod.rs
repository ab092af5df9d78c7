// CLI module
// Command-line arguments, prompting for missing values and session flow

mod args;
mod prompt;
mod session;

pub use args::CliArgs;
pub use prompt::Prompter;
pub use session::{run_session, run_with_service};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints the message and exits
/// the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
