mod cmd_hook;
mod cmd_status;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "precip",
    version,
    about = "Precipitation reminders for AI-assisted discussions"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the session-stop hook: read the host payload from stdin, emit a
    /// verdict on stdout
    Hook,
    /// Show tracked discussions and their staleness
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let repo_root = std::env::current_dir()?;

    match cli.cmd {
        Command::Hook => cmd_hook::execute(),
        Command::Status { json } => cmd_status::execute(&repo_root, json),
    }
}

/// Logs go to stderr so hook stdout stays protocol-clean. Filter via
/// `PRECIP_LOG` (default: warn).
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter =
        EnvFilter::try_from_env("PRECIP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
