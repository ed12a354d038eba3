mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::report::{GenerateArgs, HistoryArgs, ShowArgs};
use commands::score::ScoreArgs;

/// VSME ESG scoring for small and medium enterprises
#[derive(Parser)]
#[command(
    name = "vsme",
    version,
    about = "VSME ESG scoring for small and medium enterprises",
    long_about = "Scores a company's environmental, social and governance metrics on a \
                  0-10 scale, produces prioritised improvement actions, and keeps a \
                  history of generated VSME reports per profile."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log level when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, env = "VSME_LOG", default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a metrics submission without storing anything
    Score(ScoreArgs),
    /// Score a submission, store it, and render the text report
    Generate(GenerateArgs),
    /// List stored reports for a profile, newest first
    History(HistoryArgs),
    /// Show one stored report
    Show(ShowArgs),
    /// Print VSME datapoint coverage
    Coverage,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| cli.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let result: Result<commands::CommandOutput, Box<dyn std::error::Error>> = match cli.command {
        Commands::Score(args) => commands::score::run_score(args),
        Commands::Generate(args) => commands::report::run_generate(args),
        Commands::History(args) => commands::report::run_history(args),
        Commands::Show(args) => commands::report::run_show(args),
        Commands::Coverage => commands::score::run_coverage(),
        Commands::Version => {
            println!("vsme {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(commands::CommandOutput::Value(value)) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Ok(commands::CommandOutput::Text(text)) => {
            print!("{}", text);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
