mod cli;
mod replay;

use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use landing_bridge::BridgeSession;
use landing_common::LandingError;
use landing_config::LandingConfig;
use landing_widgets::HttpTransport;
use tokio::io::{AsyncBufRead, BufReader};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "landing=info";

fn init_logging(directive: &str) {
    // Logs go to stderr; stdout carries the replies.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| DEFAULT_LOG_DIRECTIVE.parse().unwrap()),
            ),
        )
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Loaded before logging so the file can choose the level; the outcome is
    // logged once the subscriber is up.
    let loaded = landing_config::load_or_default(args.config.as_deref());
    let directive = args
        .log_level
        .clone()
        .or_else(|| loaded.as_ref().ok().map(|c| c.logging.level.clone()))
        .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string());
    init_logging(&directive);

    tracing::info!("landing v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("config load failed: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(path) = &args.config {
        tracing::info!("using config {}", path.display());
    }

    if args.print_config {
        println!("{}", landing_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(args, config)) {
        Ok(()) => {
            tracing::info!("shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: cli::Args, config: LandingConfig) -> Result<(), LandingError> {
    let transport = HttpTransport::new(Duration::from_secs(config.form.timeout_secs))?;
    let mut session =
        BridgeSession::new(config, transport).with_simulated_observer(!args.host_observer);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Some(path) = &args.snapshot {
        let snapshot = replay::read_snapshot(path)?;
        replay::mount(&mut session, snapshot, &mut out).await?;
    }

    let input: Box<dyn AsyncBufRead + Unpin> = match &args.session {
        Some(path) => Box::new(BufReader::new(tokio::fs::File::open(path).await?)),
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };
    let stats = replay::run(&mut session, input, &mut out).await?;
    out.flush()?;

    tracing::info!(
        handled = stats.handled,
        rejected = stats.rejected,
        settled = stats.settled,
        "session replayed"
    );
    Ok(())
}
