use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use viewer_logging::viewer_debug;

use crate::{EngineEvent, Fetcher, Generation};

enum EngineCommand {
    Fetch { generation: Generation, path: String },
}

/// Runs reads on a background tokio runtime and reports completions.
///
/// Every completion is reported, including ones for superseded generations;
/// deciding which to apply is the caller's job.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn fetch(&self, generation: Generation, path: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch {
            generation,
            path: path.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { generation, path } => {
            let result = fetcher.read(&path).await;
            viewer_debug!(
                "Fetch finished generation={} path={} ok={}",
                generation,
                path,
                result.is_ok()
            );
            let _ = event_tx.send(EngineEvent::FetchCompleted {
                generation,
                path,
                result,
            });
        }
    }
}
