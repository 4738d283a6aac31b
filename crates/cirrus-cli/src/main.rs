use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "cirrus",
    about = "Cirrus — declarative AWS stack synthesizer",
    version,
    propagate_version = true,
)]
struct Cli {
    /// Path to cirrus.toml (default: ./cirrus.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize the descriptor graph for the external deployment engine.
    ///
    /// Writes pretty-printed JSON to --output, or to stdout when no
    /// output path is given.
    Synth {
        /// File to write the descriptor graph to
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the resources and outputs the stack would synthesize
    Resources,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cirrus=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Synth { output } => {
            commands::synth::synth(cli.config.as_deref(), output.as_deref())
        }
        Commands::Resources => commands::resources::resources(cli.config.as_deref()),
    }
}
