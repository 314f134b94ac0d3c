use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use artifact_core::{Effect, FetchOutcome, Msg};
use artifact_engine::{EngineEvent, EngineHandle};
use viewer_logging::{viewer_info, viewer_warn};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Executes core effects on the engine and feeds completions back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, msg_tx: mpsc::Sender<Msg>) -> Self {
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchArtifact { generation, path } => {
                    viewer_info!("FetchArtifact generation={} path={}", generation, path);
                    self.engine.fetch(generation, path);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            let Some(event) = engine.recv_timeout(POLL_INTERVAL) else {
                continue;
            };
            if msg_tx.send(to_msg(event)).is_err() {
                break;
            }
        });
    }
}

fn to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchCompleted {
            generation,
            path,
            result,
        } => {
            let outcome = match result {
                Ok(response) => FetchOutcome::Response {
                    status: response.status,
                    body: response.body,
                },
                Err(err) => {
                    viewer_warn!("Transport failure for {} ({}): {}", path, err.kind, err);
                    FetchOutcome::TransportFailed {
                        message: err.message,
                    }
                }
            };
            Msg::FetchCompleted {
                generation,
                outcome,
            }
        }
    }
}
