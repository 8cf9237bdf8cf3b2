use std::process;

use colored::*;
use tracing::error;

use board_placer::config::{command, Inputs};
use board_placer::logging::{init_logging, install_panic_hook};
use board_placer::{
    BoardItemPlacer, GitHubClient, GithubOutputFile, LogOutputs, OutputSink, PlacementOutcome,
    PlacerError, PlacerResult, TriggerContext,
};

async fn run() -> PlacerResult<PlacementOutcome> {
    let matches = command().get_matches();
    let inputs = Inputs::from_matches(&matches)?;

    let event_path = inputs.event_path.clone().ok_or_else(|| {
        PlacerError::ConfigError("no event payload: set --event-path or GITHUB_EVENT_PATH".to_string())
    })?;
    let trigger = TriggerContext::from_event_file(&event_path)?;

    let mut outputs: Box<dyn OutputSink> = match &inputs.output_path {
        Some(path) => Box::new(GithubOutputFile::new(path)),
        None => Box::new(LogOutputs),
    };

    let client = GitHubClient::new(&inputs.api_url, &inputs.github_token)?;
    let mut placer = BoardItemPlacer::new(&client, outputs.as_mut());
    placer.run(&inputs, &trigger).await
}

#[tokio::main]
async fn main() {
    init_logging();
    install_panic_hook();

    match run().await {
        Ok(PlacementOutcome::Skipped { reason }) => {
            println!("{} {}", "Skipped:".yellow().bold(), reason);
        }
        Ok(PlacementOutcome::Placed(report)) => {
            println!(
                "{} {} ({})",
                "Placed item".green().bold(),
                report.item_id().bright_blue(),
                report.placement.kind()
            );
        }
        Err(e) => {
            error!(error = %e, "run failed");
            // Workflow command so the runner marks the step as failed with this message
            println!("::error::{}", e);
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}
