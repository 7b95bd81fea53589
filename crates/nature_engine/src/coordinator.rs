use std::sync::Arc;

use nature_core::{
    add_to_favorites, search_completed, update, NatureOutcome, NatureViewEffect,
    NatureViewEvent, NatureViewState, Outcome, Plant,
};
use nature_logging::{nature_debug, nature_info, nature_warn};
use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tokio_util::sync::CancellationToken;

use crate::{CoordinatorSettings, EngineError, PlantRepository};

enum Command {
    Event(NatureViewEvent),
    Snapshot(oneshot::Sender<NatureViewState>),
}

struct SearchCompleted {
    search_id: u64,
    name: String,
    plant: Option<Plant>,
}

/// The one search allowed to be outstanding.
struct InFlightSearch {
    id: u64,
    cancel: CancellationToken,
}

/// Presentation-state coordinator for the nature screen.
///
/// Events are queued to a single loop task that exclusively owns the view
/// state and the in-flight search. State is published on a current-value
/// channel, effects on a broadcast channel without replay.
///
/// Dropping the coordinator tears it down.
pub struct NatureCoordinator {
    cmd_tx: mpsc::UnboundedSender<Command>,
    state_rx: watch::Receiver<NatureViewState>,
    // Never read; only used to hand out fresh receivers.
    effects_rx: broadcast::Receiver<NatureViewEffect>,
    shutdown: CancellationToken,
}

impl NatureCoordinator {
    /// Spawns the coordinator loop on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a tokio runtime.
    pub fn new(repository: Arc<dyn PlantRepository>, settings: CoordinatorSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (done_tx, done_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(NatureViewState::new());
        let (effects_tx, effects_rx) = broadcast::channel(settings.effect_capacity.max(1));
        let shutdown = CancellationToken::new();

        let event_loop = CoordinatorLoop {
            repository,
            settings,
            state: NatureViewState::new(),
            state_tx,
            effects_tx,
            done_tx,
            shutdown: shutdown.clone(),
            in_flight: None,
            next_search_id: 0,
        };
        tokio::spawn(event_loop.run(cmd_rx, done_rx));

        Self {
            cmd_tx,
            state_rx,
            effects_rx,
            shutdown,
        }
    }

    /// Queues `event`; failures after teardown are logged and dropped.
    pub fn handle(&self, event: NatureViewEvent) {
        if let Err(err) = self.try_handle(event) {
            nature_warn!("event ignored: {}", err);
        }
    }

    pub fn try_handle(&self, event: NatureViewEvent) -> Result<(), EngineError> {
        if self.shutdown.is_cancelled() {
            return Err(EngineError::Closed);
        }
        self.cmd_tx
            .send(Command::Event(event))
            .map_err(|_| EngineError::Closed)
    }

    /// Current-value stream: the receiver starts at the latest snapshot.
    pub fn view_state(&self) -> watch::Receiver<NatureViewState> {
        self.state_rx.clone()
    }

    pub fn current_state(&self) -> NatureViewState {
        self.state_rx.borrow().clone()
    }

    /// Effects emitted from now on; earlier ones are not replayed.
    pub fn view_effects(&self) -> broadcast::Receiver<NatureViewEffect> {
        self.effects_rx.resubscribe()
    }

    /// State after every event handled before this call has been reduced.
    ///
    /// Returns `None` once the coordinator is torn down.
    pub async fn snapshot(&self) -> Option<NatureViewState> {
        let (reply_tx, reply_rx) = oneshot::channel();
        if self.shutdown.is_cancelled() || self.cmd_tx.send(Command::Snapshot(reply_tx)).is_err()
        {
            return None;
        }
        reply_rx.await.ok()
    }

    /// Cancels the outstanding search and closes both output channels.
    ///
    /// Safe to call any number of times.
    pub fn teardown(&self) {
        if !self.shutdown.is_cancelled() {
            nature_info!("tearing down nature coordinator");
        }
        self.shutdown.cancel();
    }

    pub fn is_torn_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }
}

impl Drop for NatureCoordinator {
    fn drop(&mut self) {
        self.teardown();
    }
}

struct CoordinatorLoop {
    repository: Arc<dyn PlantRepository>,
    settings: CoordinatorSettings,
    state: NatureViewState,
    state_tx: watch::Sender<NatureViewState>,
    effects_tx: broadcast::Sender<NatureViewEffect>,
    done_tx: mpsc::UnboundedSender<SearchCompleted>,
    shutdown: CancellationToken,
    in_flight: Option<InFlightSearch>,
    next_search_id: u64,
}

impl CoordinatorLoop {
    async fn run(
        mut self,
        mut cmd_rx: mpsc::UnboundedReceiver<Command>,
        mut done_rx: mpsc::UnboundedReceiver<SearchCompleted>,
    ) {
        let shutdown = self.shutdown.clone();
        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                command = cmd_rx.recv() => match command {
                    Some(command) => self.handle_command(command),
                    None => break,
                },
                Some(done) = done_rx.recv() => self.finish_search(done),
            }
        }
        self.cancel_in_flight();

        // Commands accepted before teardown are still reduced, in order.
        // Search completions are not: the searches are cancelled.
        cmd_rx.close();
        let mut drained = 0usize;
        while let Ok(command) = cmd_rx.try_recv() {
            self.handle_command(command);
            drained += 1;
        }
        nature_info!("nature coordinator stopped, {} queued commands drained", drained);
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Event(event) => {
                nature_debug!("event {:?}", event);
                match event {
                    NatureViewEvent::AddPlantToFavorites => {
                        if let Some(outcome) = add_to_favorites(&self.state) {
                            self.apply(outcome);
                        }
                    }
                    NatureViewEvent::SearchPlant(name) => {
                        self.apply(Outcome::Loading);
                        self.start_search(name);
                    }
                }
            }
            Command::Snapshot(reply) => {
                let _ = reply.send(self.state.clone());
            }
        }
    }

    fn start_search(&mut self, name: String) {
        self.cancel_in_flight();
        if self.shutdown.is_cancelled() {
            nature_debug!("search for {:?} not started, coordinator is stopping", name);
            return;
        }

        self.next_search_id = self.next_search_id.wrapping_add(1);
        let search_id = self.next_search_id;
        let cancel = self.shutdown.child_token();
        self.in_flight = Some(InFlightSearch {
            id: search_id,
            cancel: cancel.clone(),
        });

        let repository = Arc::clone(&self.repository);
        let done_tx = self.done_tx.clone();
        tokio::spawn(async move {
            let plant = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    nature_debug!("search {} for {:?} cancelled", search_id, name);
                    return;
                }
                plant = repository.search_for_plant(&name) => plant,
            };
            if cancel.is_cancelled() {
                return;
            }
            let _ = done_tx.send(SearchCompleted {
                search_id,
                name,
                plant,
            });
        });
    }

    fn finish_search(&mut self, done: SearchCompleted) {
        let is_live = matches!(
            &self.in_flight,
            Some(search) if search.id == done.search_id && !search.cancel.is_cancelled()
        );
        if !is_live {
            nature_debug!("discarding result of superseded search {}", done.search_id);
            return;
        }

        self.in_flight = None;
        let outcomes = search_completed(
            done.plant,
            &done.name,
            self.settings.toast_on_empty_search,
        );
        for outcome in outcomes {
            self.apply(outcome);
        }
    }

    fn cancel_in_flight(&mut self) {
        if let Some(search) = self.in_flight.take() {
            nature_debug!("cancelling search {}", search.id);
            search.cancel.cancel();
        }
    }

    fn apply(&mut self, outcome: NatureOutcome) {
        let state = std::mem::take(&mut self.state);
        let (next, effect) = update(state, outcome);
        self.state = next;
        self.publish_state();

        if let Some(effect) = effect {
            if self.effects_tx.send(effect).is_err() {
                nature_debug!("effect dropped, nobody is listening");
            }
        }
    }

    fn publish_state(&self) {
        let next = self.state.clone();
        if self.settings.suppress_redundant_states {
            self.state_tx.send_if_modified(|current| {
                if *current == next {
                    false
                } else {
                    *current = next;
                    true
                }
            });
        } else {
            self.state_tx.send_replace(next);
        }
    }
}
