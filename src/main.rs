use clap::Parser;
use synthmarket::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
