//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::SearchBackend;
use crossbeam_channel::{Receiver, Sender};
use shared::error::FailureReason;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{SearchOutcome, UiEvent};

/// Starts the worker thread. It owns a tokio runtime and runs every queued
/// search as its own task, so requests proceed concurrently and settle in
/// whatever order the backend answers. The thread exits once every command
/// sender is dropped.
pub fn launch(
    backend: Arc<dyn SearchBackend>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "failed to build runtime: {err}"
                )));
                return;
            }
        };

        tracing::info!("search backend worker ready");
        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Search {
                        generation,
                        question,
                    } => {
                        let backend = Arc::clone(&backend);
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            let outcome = run_search(backend.as_ref(), generation, &question).await;
                            deliver(ui_tx, UiEvent::SearchSettled { generation, outcome }, generation)
                                .await;
                        });
                    }
                }
            }
            tracing::info!("command queue closed; search backend worker stopping");
        });
    })
}

async fn run_search(backend: &dyn SearchBackend, generation: u64, question: &str) -> SearchOutcome {
    match backend.search(question).await {
        Ok(results) => Ok(results),
        Err(err) => {
            tracing::error!(generation, question, error = %err, "search failed");
            Err(FailureReason::from(&err))
        }
    }
}

/// Hands an event to the UI, waiting for room when the queue is full. The UI
/// drains the queue every frame, so a settlement is never dropped and the
/// widget cannot stay loading.
async fn deliver(ui_tx: Sender<UiEvent>, event: UiEvent, generation: u64) {
    match tokio::task::spawn_blocking(move || ui_tx.send(event)).await {
        Ok(Ok(())) => {}
        Ok(Err(_)) => tracing::warn!(generation, "ui closed before search outcome was delivered"),
        Err(err) => tracing::error!(generation, "search outcome delivery failed: {err}"),
    }
}

#[cfg(test)]
#[path = "../tests/bridge_tests.rs"]
mod tests;
