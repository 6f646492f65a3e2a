use clap::{Parser, Subcommand};

use leveled_logger_rs::commands::check::Check;
use leveled_logger_rs::commands::filter::Filter;
use leveled_logger_rs::commands::Command;
use leveled_logger_rs::error::Result;
use leveled_logger_rs::verbosity::Verbosity;

#[derive(Parser)]
#[command(name = "llog")]
#[command(author, version, about = "Gate console output by verbosity", long_about = None)]
pub struct Cli {
    /// Verbosity level. Bare flag means debug; accepts error, warn, info
    /// or debug (case-insensitive) as `--verbose=LEVEL`.
    #[arg(
        short,
        long,
        global = true,
        value_name = "LEVEL",
        num_args = 0..=1,
        require_equals = true
    )]
    pub verbose: Option<Option<String>>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read lines from stdin and forward those at or above the threshold
    Filter,

    /// Print the severity threshold the verbosity flags resolve to
    Check,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let verbosity = Verbosity::from_flag(cli.verbose);

    let command: Box<dyn Command> = match cli.command {
        Commands::Filter => Box::new(Filter::new(verbosity)),
        Commands::Check => Box::new(Check::new(verbosity)),
    };

    command.execute()
}
