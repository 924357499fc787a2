//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use crossbeam_channel::{Receiver, Sender};
use fact_client::FactSource;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Spawns the backend worker thread. Each `FetchFact` becomes its own tokio
/// task; nothing is cancelled when a newer trigger arrives.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    source: Arc<dyn FactSource>,
    repaint: impl Fn() + Send + Sync + 'static,
) -> thread::JoinHandle<()> {
    let repaint: Arc<dyn Fn() + Send + Sync> = Arc::new(repaint);
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                report_startup_failure(
                    cmd_rx,
                    &ui_tx,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                );
                repaint();
                return;
            }
        };

        notify(&ui_tx, UiEvent::Info("Backend worker ready".to_string()));
        repaint();

        runtime.block_on(async move {
            let mut in_flight = tokio::task::JoinSet::new();
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::FetchFact { trigger } => {
                        let source = source.clone();
                        let ui_tx = ui_tx.clone();
                        let repaint = repaint.clone();
                        in_flight.spawn(async move {
                            let outcome = source.fetch_fact().await;
                            let event = match outcome {
                                Ok(fact) => {
                                    tracing::debug!(trigger = trigger.0, fact = %fact, "fact arrived");
                                    UiEvent::FactLoaded { trigger, fact }
                                }
                                Err(error) => {
                                    tracing::debug!(trigger = trigger.0, "fact fetch failed: {error}");
                                    UiEvent::FactFailed { trigger, error }
                                }
                            };
                            notify(&ui_tx, event);
                            repaint();
                        });
                    }
                }
                while in_flight.try_join_next().is_some() {}
            }
            tracing::debug!("ui command queue closed; backend worker exiting");
        });
    })
}

/// The command queue is closed before the UI hears about the failure; a
/// refresh issued after that point gets a disconnected error back.
fn report_startup_failure(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: &Sender<UiEvent>,
    message: String,
) {
    drop(cmd_rx);
    notify(
        ui_tx,
        UiEvent::Error(UiError::from_message(UiErrorContext::BackendStartup, message)),
    );
}

fn notify(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    if let Err(err) = ui_tx.try_send(event) {
        tracing::warn!("dropping backend event: {err}");
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
