use std::time::Duration;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use showcase_cli::{commands, PlayOptions};
use showcase_core::WorkflowId;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the scripted demo in the terminal
    Play {
        #[arg(short, long, help = "Workflow id to play (see `workflows`)")]
        workflow: Option<WorkflowId>,
        #[arg(long, env = "SHOWCASE_SPEED", default_value_t = 1.0)]
        speed: f64,
        #[arg(long, help = "Write a JSON transcript of the run")]
        transcript: Option<Utf8PathBuf>,
        #[arg(long, value_name = "MS", help = "Restart the demo this many ms after mount")]
        restart_at: Option<u64>,
        #[arg(short, long)]
        quiet: bool,
    },
    /// List the workflow catalog
    Workflows,
    /// Print when each scripted milestone happens
    Schedule {
        #[arg(short, long)]
        workflow: Option<WorkflowId>,
        #[arg(long, env = "SHOWCASE_SPEED", default_value_t = 1.0)]
        speed: f64,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber).context("default subscriber")?;

    match cli.command {
        Commands::Play {
            workflow,
            speed,
            transcript,
            restart_at,
            quiet,
        } => {
            let opts = PlayOptions {
                workflow,
                speed,
                transcript,
                restart_at: restart_at.map(Duration::from_millis),
                quiet,
            };
            commands::cmd_play(opts).await?;
        }
        Commands::Workflows => commands::cmd_workflows()?,
        Commands::Schedule { workflow, speed } => commands::cmd_schedule(workflow, speed)?,
    }

    Ok(())
}
