#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use nature_core::{NatureViewState, Plant};
use nature_engine::{NatureCoordinator, PlantRepository};
use tokio::sync::{mpsc, oneshot};

pub const WAIT: Duration = Duration::from_secs(5);

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(nature_logging::initialize_for_tests);
}

pub fn rose() -> Plant {
    Plant::new(1, "Rose", 40, "u")
}

pub fn tulip() -> Plant {
    Plant::new(2, "Tulip", 25, "https://img.example.com/tulip.png")
}

/// Repository whose searches only finish when the test releases them.
pub struct GatedRepository {
    gates: Mutex<HashMap<String, oneshot::Receiver<Option<Plant>>>>,
    started: mpsc::UnboundedSender<String>,
}

impl GatedRepository {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<String>) {
        let (started, started_rx) = mpsc::unbounded_channel();
        let repo = Self {
            gates: Mutex::new(HashMap::new()),
            started,
        };
        (Arc::new(repo), started_rx)
    }

    /// Registers a pending search for `name`; send on the returned gate to finish it.
    pub fn gate(&self, name: &str) -> oneshot::Sender<Option<Plant>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(name.to_string(), rx);
        tx
    }
}

#[async_trait::async_trait]
impl PlantRepository for GatedRepository {
    async fn search_for_plant(&self, name: &str) -> Option<Plant> {
        let gate = self.gates.lock().unwrap().remove(name);
        let _ = self.started.send(name.to_string());
        match gate {
            Some(gate) => gate.await.ok().flatten(),
            None => None,
        }
    }
}

pub async fn wait_started(started: &mut mpsc::UnboundedReceiver<String>) -> String {
    tokio::time::timeout(WAIT, started.recv())
        .await
        .expect("search did not reach the repository")
        .expect("repository dropped")
}

pub async fn wait_for_state(
    coordinator: &NatureCoordinator,
    predicate: impl FnMut(&NatureViewState) -> bool,
) -> NatureViewState {
    let mut rx = coordinator.view_state();
    let state = tokio::time::timeout(WAIT, rx.wait_for(predicate))
        .await
        .expect("state did not settle")
        .expect("coordinator stopped");
    let snapshot = (*state).clone();
    snapshot
}

pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}
