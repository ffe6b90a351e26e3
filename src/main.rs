//! Runs one bridge that reads JSON-line events from stdin.
//!
//! Backend requests and presentation commands are logged; favicon requests
//! are answered with no icon.

use std::path::PathBuf;

use anyhow::Context;
use keyboard_accessory_lib::bootstrap::{
    init_tracing_subscriber, load_config_from, pump_events, start_bridge, BridgeOutputs,
};
use ka_infra::{BackendRequest, ManualFillingCommand};
use tokio::io::BufReader;
use tracing::{error, info};

const DEFAULT_NATIVE_HANDLE: u64 = 1;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config_from(config_path.as_deref())?;
    init_tracing_subscriber(&config.logging).context("Failed to initialize tracing")?;

    let (runtime, outputs) = start_bridge(DEFAULT_NATIVE_HANDLE, &config)?;
    let BridgeOutputs {
        mut backend_requests,
        presentation_commands: mut commands,
    } = outputs;

    let backend_task = tokio::spawn(async move {
        while let Some(request) = backend_requests.recv().await {
            info!(request = ?request, "Backend request");
            if let BackendRequest::Favicon { callback, .. } = request {
                callback(None);
            }
        }
    });

    let presentation_task = tokio::spawn(async move {
        while let Some(command) = commands.recv().await {
            match &command {
                ManualFillingCommand::ItemsPublished(items) => {
                    info!(count = items.len(), "Items published")
                }
                ManualFillingCommand::ActionsPublished(actions) => {
                    info!(count = actions.len(), "Actions published")
                }
                other => info!(command = other.name(), "Presentation command"),
            }
        }
    });

    let stdin = BufReader::new(tokio::io::stdin());
    match pump_events(stdin, runtime.events()).await {
        Ok(stats) => info!(?stats, "Input finished"),
        Err(err) => error!(error = %err, "Failed to read events"),
    }

    runtime.shutdown().await?;
    backend_task.await?;
    presentation_task.await?;
    Ok(())
}
