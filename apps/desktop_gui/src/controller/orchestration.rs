//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};
use shared::error::FailureReason;
use thiserror::Error;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::reducer::{SearchTicket, SearchTrigger, SearchWidgetState};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("backend command queue is full")]
    QueueFull,
    #[error("backend command processor disconnected")]
    Disconnected,
}

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), DispatchError> {
    let cmd_name = match &cmd {
        BackendCommand::Search { .. } => "search",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err(DispatchError::QueueFull),
        Err(TrySendError::Disconnected(_)) => Err(DispatchError::Disconnected),
    }
}

/// Runs the submit operation: starts a search in `state` and queues the
/// request. A request that cannot be queued settles immediately as failed so
/// the widget never stays stuck in loading.
pub fn submit_search(
    state: &mut SearchWidgetState,
    trigger: SearchTrigger,
    cmd_tx: &Sender<BackendCommand>,
) -> Option<u64> {
    let SearchTicket {
        generation,
        question,
    } = state.begin_search(trigger)?;

    if let Err(err) = dispatch_backend_command(
        cmd_tx,
        BackendCommand::Search {
            generation,
            question,
        },
    ) {
        tracing::error!(generation, error = %err, "failed to queue search");
        state.settle(generation, Err(FailureReason::Queue));
    }
    Some(generation)
}
