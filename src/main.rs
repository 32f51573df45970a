use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;

use livefuzz::api::{self, AppState};
use livefuzz::cli::{Cli, Command};
use livefuzz::config::LivefuzzConfig;
use livefuzz::job::{CancellationToken, new_run_id, run_job};
use livefuzz::logging::init_logging;
use livefuzz::shutdown;
use livefuzz::ui::RunProgress;
use livefuzz::workload::{HttpWorkload, Workload};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = LivefuzzConfig::load(cli.config.as_deref()).context("failed to load config")?;
    config.apply_overrides(cli.overrides());
    config.validate()?;

    let workload = HttpWorkload::new(config.worker_url.clone(), config.kind)?;

    match cli.command {
        Command::Server { .. } => run_server(&config, workload).await,
        Command::Spam | Command::Blobs => run_foreground(&config, workload).await,
        Command::Create { count } => {
            workload
                .create(count)
                .await
                .context("failed to create accounts")?;
            tracing::info!(count, "accounts created");
            Ok(())
        }
        Command::Unstuck => {
            workload.setup().await.context("failed to unstuck accounts")?;
            tracing::info!("accounts unstuck");
            Ok(())
        }
        Command::Airdrop => {
            let amount = config.funding().airdrop_amount();
            workload.fund(amount).await.context("failed to airdrop")?;
            tracing::info!(amount_wei = %amount, "airdrop sent");
            Ok(())
        }
    }
}

async fn run_server(config: &LivefuzzConfig, workload: HttpWorkload) -> Result<()> {
    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    let state = Arc::new(AppState::new(workload, config.job_config()));

    api::serve(listener, state, shutdown::ctrl_c()).await?;
    Ok(())
}

/// Run the job loop in this process until Ctrl-C or a failure.
async fn run_foreground(config: &LivefuzzConfig, workload: HttpWorkload) -> Result<()> {
    let token = CancellationToken::new();
    let job = config.job_config();
    let progress = RunProgress::start(&format!(
        "Sending {} spam every {}s",
        workload.kind(),
        config.slot_time_secs
    ));

    let run = run_job(&workload, &job, &token, new_run_id());
    tokio::pin!(run);

    let finished = tokio::select! {
        result = &mut run => Some(result),
        _ = shutdown::ctrl_c() => None,
    };
    let result = match finished {
        Some(result) => result,
        None => {
            token.close();
            progress.stopping();
            run.await
        }
    };

    progress.complete(&result);
    let report = result?;
    progress.print_report(&report);
    Ok(())
}
