use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::Instrument;
use uuid::Uuid;

use crate::config::RevealConfig;
use crate::controller::error::PackError;
use crate::controller::event::{ControllerCommand, ControllerEvent};
use crate::controller::handle::ControllerHandle;
use crate::controller::scroll::ScrollMonitor;
use crate::controller::sequencer::{RevealSequencer, RevealStep};
use crate::mvi::Reducer;
use crate::pack::{LifecycleIntent, LifecycleReducer, LifecycleState, PackSession};
use crate::service::PackService;

type FetchOutcome = Result<PackSession, PackError>;

/// Work waiting on the controller's single timer.
enum TimerTask {
    /// Install a fetched session once the settle delay has passed.
    Install(PackSession),
    /// Run the next reveal step.
    RevealStep,
}

struct Timer {
    at: Instant,
    task: TimerTask,
}

/// Single-writer owner of the active session and the lifecycle state.
pub struct PackController {
    service: Arc<dyn PackService>,
    reveal: RevealConfig,
    default_pack: String,
    lifecycle: LifecycleState,
    session: PackSession,
    sequencer: Option<RevealSequencer>,
    scroll: ScrollMonitor,
    timer: Option<Timer>,
    commands: mpsc::UnboundedReceiver<ControllerCommand>,
    fetch_tx: mpsc::UnboundedSender<FetchOutcome>,
    fetch_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    events: mpsc::UnboundedSender<ControllerEvent>,
}

/// Spawn a controller on the current tokio runtime.
pub fn spawn(
    service: Arc<dyn PackService>,
    reveal: RevealConfig,
    default_pack: impl Into<String>,
) -> (
    ControllerHandle,
    mpsc::UnboundedReceiver<ControllerEvent>,
    JoinHandle<()>,
) {
    let (controller, handle, events) = PackController::new(service, reveal, default_pack);
    let task = tokio::spawn(controller.run());
    (handle, events, task)
}

impl PackController {
    pub fn new(
        service: Arc<dyn PackService>,
        reveal: RevealConfig,
        default_pack: impl Into<String>,
    ) -> (Self, ControllerHandle, mpsc::UnboundedReceiver<ControllerEvent>) {
        let (command_tx, commands) = mpsc::unbounded_channel();
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();
        let (events, event_rx) = mpsc::unbounded_channel();
        let scroll = ScrollMonitor::new();

        let controller = Self {
            service,
            reveal,
            default_pack: default_pack.into(),
            lifecycle: LifecycleState::default(),
            session: PackSession::default(),
            sequencer: None,
            scroll: scroll.clone(),
            timer: None,
            commands,
            fetch_tx,
            fetch_rx,
            events,
        };

        (controller, ControllerHandle::new(command_tx, scroll), event_rx)
    }

    /// Process commands, fetch results and timer expiries until shutdown.
    pub async fn run(mut self) {
        loop {
            let deadline = self.timer.as_ref().map(|timer| timer.at);

            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(ControllerCommand::RequestPack { pack }) => self.on_request(pack),
                    Some(ControllerCommand::Shutdown) | None => break,
                },
                Some(outcome) = self.fetch_rx.recv() => self.on_fetched(outcome),
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    self.on_timer();
                }
            }
        }

        tracing::debug!(state = ?self.lifecycle, "Pack controller stopped");
    }

    fn on_request(&mut self, pack: Option<String>) {
        if !self.lifecycle.accepts_request() {
            tracing::warn!(state = ?self.lifecycle, "Pack request rejected, controller busy");
            self.emit(ControllerEvent::RequestRejected {
                state: self.lifecycle,
            });
            return;
        }

        let pack = pack.unwrap_or_else(|| self.default_pack.clone());
        self.scroll.reset();
        self.dispatch(LifecycleIntent::RequestAccepted);

        let request_id = Uuid::new_v4();
        tracing::info!(%request_id, pack = %pack, "Requesting new pack");

        let service = Arc::clone(&self.service);
        let fetch_tx = self.fetch_tx.clone();
        let span = tracing::info_span!("pack_request", %request_id);
        tokio::spawn(
            async move {
                let outcome = fetch_pack(service.as_ref(), &pack).await;
                let _ = fetch_tx.send(outcome);
            }
            .instrument(span),
        );
    }

    fn on_fetched(&mut self, outcome: FetchOutcome) {
        match outcome {
            Ok(session) => {
                tracing::info!(
                    pack_id = ?session.pack_id().map(|id| id.as_str()),
                    cards = session.len(),
                    "Pack opened, settling before reveal"
                );
                self.schedule(self.reveal.settle_delay(), TimerTask::Install(session));
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    kind = err.service_error().error_type(),
                    "Pack request failed"
                );
                self.dispatch(LifecycleIntent::FetchFailed);
                self.emit(ControllerEvent::RequestFailed(err));
            }
        }
    }

    fn on_timer(&mut self) {
        let Some(timer) = self.timer.take() else {
            return;
        };

        match timer.task {
            TimerTask::Install(session) => self.install(session),
            TimerTask::RevealStep => self.reveal_next(),
        }
    }

    fn install(&mut self, session: PackSession) {
        self.session = session;
        let sequencer = RevealSequencer::new(self.reveal.step_delay());
        let first_step = sequencer.step_delay();
        self.sequencer = Some(sequencer);

        self.emit(ControllerEvent::SessionInstalled(self.session.clone()));
        self.dispatch(LifecycleIntent::SessionInstalled);
        self.schedule(first_step, TimerTask::RevealStep);
    }

    fn reveal_next(&mut self) {
        let Some(sequencer) = self.sequencer.as_mut() else {
            return;
        };

        match sequencer.step(&mut self.session, &self.scroll) {
            RevealStep::Revealed {
                index,
                scroll_into_view,
            } => {
                tracing::debug!(index, scroll_into_view, "Card revealed");
                let complete = sequencer.is_complete(&self.session);
                let delay = sequencer.step_delay();

                self.emit(ControllerEvent::CardRevealed { index });
                if scroll_into_view {
                    self.emit(ControllerEvent::ScrollIntoView { index });
                }

                if complete {
                    self.finish_reveal();
                } else {
                    self.schedule(delay, TimerTask::RevealStep);
                }
            }
            RevealStep::Complete => self.finish_reveal(),
        }
    }

    fn finish_reveal(&mut self) {
        self.sequencer = None;
        tracing::info!(cards = self.session.len(), "Reveal complete");
        self.dispatch(LifecycleIntent::RevealComplete);
    }

    fn schedule(&mut self, delay: std::time::Duration, task: TimerTask) {
        self.timer = Some(Timer {
            at: Instant::now() + delay,
            task,
        });
    }

    /// Dispatch an intent to the lifecycle reducer.
    fn dispatch(&mut self, intent: LifecycleIntent) {
        let next = LifecycleReducer::reduce(self.lifecycle, intent);
        if next == self.lifecycle {
            return;
        }

        tracing::debug!(from = ?self.lifecycle, to = ?next, ?intent, "Lifecycle transition");
        self.lifecycle = next;
        self.emit(ControllerEvent::Lifecycle(next));
    }

    fn emit(&self, event: ControllerEvent) {
        if self.events.send(event).is_err() {
            tracing::trace!("Controller event dropped (receiver gone)");
        }
    }
}

/// Create then open a pack. The two calls are strictly sequential.
async fn fetch_pack(service: &dyn PackService, pack: &str) -> FetchOutcome {
    let pack_id = service
        .create_pack(pack)
        .await
        .map_err(|source| PackError::CreationFailed {
            pack: pack.to_string(),
            source,
        })?;

    let records = service
        .open_pack(&pack_id)
        .await
        .map_err(|source| PackError::OpenFailed {
            pack_id: pack_id.clone(),
            source,
        })?;

    Ok(PackSession::new(pack_id, records))
}
