//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd` without blocking the frame. Returns whether it was queued;
/// on failure `status` carries the reason shown to the user.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "backend command queue full");
            *status = "Fila de comandos cheia; tente novamente".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(command = cmd_name, "backend command processor disconnected");
            *status =
                "Serviço indisponível: o processador de comandos foi desconectado".to_string();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;
    use shared::protocol::TextFilter;

    use super::*;

    #[test]
    fn queues_command_when_there_is_room() {
        let (tx, rx) = bounded(1);
        let mut status = String::new();
        assert!(dispatch_backend_command(
            &tx,
            BackendCommand::SearchTexts(TextFilter::query("avot")),
            &mut status
        ));
        assert!(status.is_empty());
        assert!(matches!(rx.try_recv(), Ok(BackendCommand::SearchTexts(_))));
    }

    #[test]
    fn full_queue_reports_retry() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();
        dispatch_backend_command(
            &tx,
            BackendCommand::SearchTexts(TextFilter::default()),
            &mut status,
        );
        let queued = dispatch_backend_command(
            &tx,
            BackendCommand::SearchTexts(TextFilter::default()),
            &mut status,
        );
        assert!(!queued);
        assert!(status.contains("tente novamente"));
    }

    #[test]
    fn disconnected_backend_is_reported() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut status = String::new();
        let queued = dispatch_backend_command(
            &tx,
            BackendCommand::SearchTexts(TextFilter::default()),
            &mut status,
        );
        assert!(!queued);
        assert!(status.contains("desconectado"));
    }
}
