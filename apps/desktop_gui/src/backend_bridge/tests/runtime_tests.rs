use super::*;
use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use async_trait::async_trait;
use crossbeam_channel::bounded;
use shared::{
    domain::{Fact, FactTrigger},
    error::FetchError,
};

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

struct ScriptedSource {
    calls: AtomicUsize,
    outcomes: Vec<Result<Fact, FetchError>>,
    delay_first: Duration,
}

#[async_trait]
impl FactSource for ScriptedSource {
    async fn fetch_fact(&self) -> Result<Fact, FetchError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if n == 0 && !self.delay_first.is_zero() {
            tokio::time::sleep(self.delay_first).await;
        }
        self.outcomes[n % self.outcomes.len()].clone()
    }
}

fn start(source: ScriptedSource) -> (Sender<BackendCommand>, Receiver<UiEvent>) {
    let (cmd_tx, cmd_rx) = bounded(16);
    let (ui_tx, ui_rx) = bounded(16);
    launch(cmd_rx, ui_tx, Arc::new(source), || {});
    match ui_rx.recv_timeout(RECV_TIMEOUT).expect("ready event") {
        UiEvent::Info(message) => assert_eq!(message, "Backend worker ready"),
        other => panic!("unexpected first event: {other:?}"),
    }
    (cmd_tx, ui_rx)
}

#[test]
fn fetch_command_produces_loaded_event_for_same_trigger() {
    let (cmd_tx, ui_rx) = start(ScriptedSource {
        calls: AtomicUsize::new(0),
        outcomes: vec![Ok(Fact::new("Cats sleep 70% of their lives."))],
        delay_first: Duration::ZERO,
    });

    cmd_tx
        .send(BackendCommand::FetchFact {
            trigger: FactTrigger(3),
        })
        .expect("send");

    match ui_rx.recv_timeout(RECV_TIMEOUT).expect("outcome") {
        UiEvent::FactLoaded { trigger, fact } => {
            assert_eq!(trigger, FactTrigger(3));
            assert_eq!(fact.text(), "Cats sleep 70% of their lives.");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn fetch_failure_is_forwarded_with_its_trigger() {
    let (cmd_tx, ui_rx) = start(ScriptedSource {
        calls: AtomicUsize::new(0),
        outcomes: vec![Err(FetchError::Status(500))],
        delay_first: Duration::ZERO,
    });

    cmd_tx
        .send(BackendCommand::FetchFact {
            trigger: FactTrigger(1),
        })
        .expect("send");

    match ui_rx.recv_timeout(RECV_TIMEOUT).expect("outcome") {
        UiEvent::FactFailed { trigger, error } => {
            assert_eq!(trigger, FactTrigger(1));
            assert_eq!(error, FetchError::Status(500));
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn slow_request_does_not_block_a_newer_one() {
    let (cmd_tx, ui_rx) = start(ScriptedSource {
        calls: AtomicUsize::new(0),
        outcomes: vec![Ok(Fact::new("slow")), Ok(Fact::new("fast"))],
        delay_first: Duration::from_millis(300),
    });

    cmd_tx
        .send(BackendCommand::FetchFact {
            trigger: FactTrigger(1),
        })
        .expect("send first");
    std::thread::sleep(Duration::from_millis(50));
    cmd_tx
        .send(BackendCommand::FetchFact {
            trigger: FactTrigger(2),
        })
        .expect("send second");

    let mut order = Vec::new();
    for _ in 0..2 {
        match ui_rx.recv_timeout(RECV_TIMEOUT).expect("outcome") {
            UiEvent::FactLoaded { trigger, .. } => order.push(trigger),
            other => panic!("unexpected event: {other:?}"),
        }
    }
    assert_eq!(order, vec![FactTrigger(2), FactTrigger(1)]);
}

#[test]
fn worker_exits_when_command_queue_closes() {
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(1);
    let (ui_tx, _ui_rx) = bounded(4);
    let handle = launch(
        cmd_rx,
        ui_tx,
        Arc::new(ScriptedSource {
            calls: AtomicUsize::new(0),
            outcomes: vec![Ok(Fact::new("unused"))],
            delay_first: Duration::ZERO,
        }),
        || {},
    );
    drop(cmd_tx);
    handle.join().expect("worker thread exits cleanly");
}

#[test]
fn startup_failure_closes_the_queue_before_reporting() {
    use crate::controller::events::UiErrorCategory;
    use crate::controller::orchestration::dispatch_backend_command;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(4);
    let (ui_tx, ui_rx) = bounded(4);

    report_startup_failure(
        cmd_rx,
        &ui_tx,
        "backend worker startup failure: failed to build runtime: EAGAIN".to_string(),
    );

    match ui_rx.try_recv() {
        Ok(UiEvent::Error(err)) => assert_eq!(err.category(), UiErrorCategory::Startup),
        other => panic!("unexpected event: {other:?}"),
    }
    let err = dispatch_backend_command(
        &cmd_tx,
        BackendCommand::FetchFact {
            trigger: FactTrigger(1),
        },
    )
    .expect_err("queue is closed");
    assert!(err.message().contains("disconnected"));
}
