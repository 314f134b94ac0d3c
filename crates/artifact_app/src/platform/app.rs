use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use artifact_core::{update, Msg, PanelState};
use artifact_engine::{DirFetcher, EngineHandle, FetchSettings, Fetcher, ReqwestFetcher};
use viewer_logging::{viewer_info, viewer_warn};

use super::effects::EffectRunner;
use super::ui::input::{parse_command, Command};
use super::{logging, registry_file, ui};
use crate::cli::CliArgs;

const TICK_INTERVAL: Duration = Duration::from_millis(75);

pub fn run_app(args: CliArgs) -> anyhow::Result<()> {
    logging::initialize(args.log, args.verbose);

    let registry = registry_file::load_registry(args.registry.as_deref())?;
    let settings = FetchSettings::default();
    let fetcher: Arc<dyn Fetcher> = match &args.base_url {
        Some(base_url) => {
            viewer_info!("Serving artifacts from {}", base_url);
            Arc::new(ReqwestFetcher::new(base_url, settings)?)
        }
        None => {
            viewer_info!("Serving artifacts from directory {:?}", args.root);
            Arc::new(DirFetcher::new(&args.root, settings.max_bytes))
        }
    };
    let engine = EngineHandle::new(fetcher).context("failed to start fetch runtime")?;

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(engine, msg_tx.clone());
    let quit = Arc::new(AtomicBool::new(false));
    spawn_input_reader(registry.clone(), msg_tx, quit.clone());

    let mut panel = Panel {
        state: PanelState::new(registry),
        runner,
    };
    panel.present();
    panel.dispatch(Msg::PanelOpened);

    while !quit.load(Ordering::Relaxed) {
        match msg_rx.recv_timeout(TICK_INTERVAL) {
            Ok(msg) => panel.dispatch(msg),
            Err(mpsc::RecvTimeoutError::Timeout) => panel.dispatch(Msg::Tick),
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    viewer_info!("Viewer closed");
    Ok(())
}

struct Panel {
    state: PanelState,
    runner: EffectRunner,
}

impl Panel {
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);
        if was_dirty {
            self.present();
        }
    }

    fn present(&self) {
        let text = ui::render::render(&self.state.view());
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "\n{text}");
        let _ = write!(stdout, "> ");
        let _ = stdout.flush();
    }
}

fn spawn_input_reader(
    registry: artifact_core::Registry,
    msg_tx: mpsc::Sender<Msg>,
    quit: Arc<AtomicBool>,
) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    viewer_warn!("Failed to read input: {}", err);
                    break;
                }
            };
            let msg = match parse_command(&line, &registry) {
                Some(Command::Select(id)) => Msg::ArtifactSelected(id),
                Some(Command::Reload) => Msg::ReloadRequested,
                Some(Command::Quit) => break,
                None => continue,
            };
            if msg_tx.send(msg).is_err() {
                return;
            }
        }
        quit.store(true, Ordering::Relaxed);
    });
}
