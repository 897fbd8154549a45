//! hostinfo CLI — host platform reporting and self-checks.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "hostinfo",
    version,
    about = "Host platform reporter with a built-in self-check battery"
)]
struct Cli {
    /// Platform report format (text, json)
    #[arg(long)]
    format: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in self-check battery
    Test {
        /// Report format (human, json)
        #[arg(long)]
        report: Option<String>,
    },
    // Any other first argument falls through to the platform report.
    #[command(external_subcommand)]
    Other(Vec<String>),
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Test { report }) => commands::test::run(report.as_deref()),
        Some(Commands::Other(_)) | None => commands::report::run(cli.format.as_deref()),
    }
}
