use std::sync::{Arc, Mutex, PoisonError};

use comments_core::{update, CommentsUiState, Effect, Msg};
use comments_logging::{comments_debug, comments_info};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::repository::CommentsRepository;

/// Publishing side of the state channel. `None` once the controller is gone.
type Publisher = Arc<Mutex<Option<watch::Sender<CommentsUiState>>>>;

/// Owns the comments screen state and runs the one fetch that fills it.
///
/// Construction enters the loading state and schedules the fetch on the
/// given runtime. Dropping the controller abandons an in-flight fetch; its
/// result is never published.
pub struct CommentsController {
    state_rx: watch::Receiver<CommentsUiState>,
    publisher: Publisher,
    cancel: CancellationToken,
}

impl CommentsController {
    pub fn new(repository: Arc<dyn CommentsRepository>, runtime: &Handle) -> Self {
        let (state, effects) = update(CommentsUiState::new(), Msg::FetchStarted);
        let (state_tx, state_rx) = watch::channel(state);
        let publisher: Publisher = Arc::new(Mutex::new(Some(state_tx)));
        let cancel = CancellationToken::new();
        comments_info!("comments controller started; loading");

        for effect in effects {
            match effect {
                Effect::FetchComments => {
                    runtime.spawn(run_fetch(
                        repository.clone(),
                        publisher.clone(),
                        cancel.clone(),
                    ));
                }
            }
        }

        Self {
            state_rx,
            publisher,
            cancel,
        }
    }

    /// Current snapshot. Never blocks on the fetch.
    pub fn state(&self) -> CommentsUiState {
        self.state_rx.borrow().clone()
    }

    /// Stream of snapshots for a presentation layer.
    pub fn subscribe(&self) -> watch::Receiver<CommentsUiState> {
        self.state_rx.clone()
    }
}

impl Drop for CommentsController {
    fn drop(&mut self) {
        self.cancel.cancel();
        let mut publisher = self.publisher.lock().unwrap_or_else(PoisonError::into_inner);
        publisher.take();
        comments_debug!("comments controller dropped");
    }
}

async fn run_fetch(
    repository: Arc<dyn CommentsRepository>,
    publisher: Publisher,
    cancel: CancellationToken,
) {
    let result = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            comments_debug!("comments fetch abandoned");
            return;
        }
        result = repository.get_comments() => result,
    };

    let publisher = publisher.lock().unwrap_or_else(PoisonError::into_inner);
    let Some(state_tx) = publisher.as_ref() else {
        comments_debug!("dropping comments result after teardown");
        return;
    };

    state_tx.send_modify(|state| {
        let (next, _effects) = update(std::mem::take(state), Msg::FetchResolved(result));
        comments_info!(
            "comments state -> {:?} ({} comments)",
            next.phase(),
            next.comments.len()
        );
        *state = next;
    });
}
