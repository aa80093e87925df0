use bankease::cli::CliDriver;
use bankease::config::AppConfig;
use bankease::navigator::Navigator;
use bankease::orchestrator::Orchestrator;
use bankease::store;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // Dropping the guard flushes buffered log lines, so hold it until exit.
    let _log_guard = init_tracing(&config);

    eprintln!("🏦 BankEase v{}", env!("CARGO_PKG_VERSION"));

    // ── Flag store ──────────────────────────────────────────────────────
    if config.ephemeral {
        eprintln!("   State: in-memory (not persisted)");
    } else {
        eprintln!("   State: {}", config.state_path.display());
    }
    let store = store::open(&config).await?;
    eprintln!("   Type 'help' for commands, 'quit' to exit.\n");

    // ── Navigator ───────────────────────────────────────────────────────
    let orchestrator = Orchestrator::new(store, &config.start_path);
    let (navigator, handle, frames) = Navigator::new(orchestrator);
    let nav_task = tokio::spawn(navigator.run());

    let driver = CliDriver::new(handle.clone(), frames).with_json(config.json_output);

    tokio::select! {
        result = driver.run() => result?,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nShutting down...");
            // The navigator may have stopped on its own already.
            let _ = handle.shutdown();
        }
    }

    nav_task.await??;
    Ok(())
}

fn init_tracing(config: &AppConfig) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "bankease.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}
