//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext};

/// Queues `cmd` for the backend worker. A full or closed queue comes back as
/// a [`UiError`] so the caller can settle whatever state was waiting on it.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), UiError> {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err(UiError::from_message(
            UiErrorContext::CommandQueue,
            "UI command queue is full; please retry",
        )),
        Err(TrySendError::Disconnected(_)) => Err(UiError::from_message(
            UiErrorContext::CommandQueue,
            "Backend command processor disconnected (possible startup/runtime failure)",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::UiErrorContext;
    use crossbeam_channel::bounded;
    use shared::domain::FactTrigger;

    fn fetch(n: u64) -> BackendCommand {
        BackendCommand::FetchFact {
            trigger: FactTrigger(n),
        }
    }

    #[test]
    fn queues_command_when_there_is_room() {
        let (tx, rx) = bounded(1);
        dispatch_backend_command(&tx, fetch(1)).expect("queued");
        assert_eq!(rx.try_recv().expect("command"), fetch(1));
    }

    #[test]
    fn full_queue_is_reported() {
        let (tx, _rx) = bounded(1);
        dispatch_backend_command(&tx, fetch(1)).expect("first fits");
        let err = dispatch_backend_command(&tx, fetch(2)).expect_err("second overflows");
        assert_eq!(err.context(), UiErrorContext::CommandQueue);
        assert!(err.message().contains("full"));
    }

    #[test]
    fn disconnected_queue_is_reported() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let err = dispatch_backend_command(&tx, fetch(1)).expect_err("no receiver");
        assert!(err.message().contains("disconnected"));
    }
}
