use anyhow::Result;
use broker_console::{ConsoleOptions, InteractiveConsole};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "broker-console",
    version,
    about = "Interactive terminal console for browsing and acting on message-broker queues",
    long_about = None
)]
struct Cli {
    /// Broker monitor endpoint URL (e.g. http://localhost:8080/matsbrokermonitor)
    #[arg(short, long, env = "BROKER_CONSOLE_URL")]
    url: String,

    /// Jump straight to browsing this queue instead of the broker overview
    #[arg(short, long)]
    queue: Option<String>,

    /// Request timeout in seconds for action and snapshot calls
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Enable verbose logging (written to the log file, stderr is the TUI)
    #[arg(short, long)]
    verbose: bool,

    /// Log file path (default: no log output)
    #[arg(long)]
    log_file: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.log_file.as_deref())?;

    let options = ConsoleOptions {
        url: cli.url,
        queue_id: cli.queue,
        verbose: cli.verbose,
    };

    let mut console = InteractiveConsole::new(options, cli.timeout);
    console.run()
}

/// The terminal is owned by the TUI, so logs go to a file (or nowhere).
fn init_tracing(verbose: bool, log_file: Option<&str>) -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let Some(path) = log_file else {
        return Ok(());
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .init();

    Ok(())
}
