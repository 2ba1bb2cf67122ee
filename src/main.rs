// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments and hand them to the run flow.
// - Runtime failures print one line on stderr and exit with code 1;
//   usage errors (exit code 2) and -h/-v are handled by clap.

use clap::Parser;
use lovli_cli::app::{run, Cli};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
