use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use diff_unmove::{HeaderMode, MoveFilter};
use std::io;

#[derive(Parser)]
#[command(name = "diff-unmove")]
#[command(about = "Remove moved-line pairs from a unified diff read on stdin")]
struct Cli {
    /// Suppress ---/+++ header lines instead of re-emitting them
    #[arg(long)]
    no_headers: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut command = Cli::command();
        let name = command.get_name().to_string();
        clap_complete::generate(shell, &mut command, name, &mut io::stdout());
        return Ok(());
    }

    let headers = if cli.no_headers {
        HeaderMode::Strip
    } else {
        HeaderMode::Keep
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    MoveFilter::new(headers).run(stdin.lock(), stdout.lock())?;

    Ok(())
}
