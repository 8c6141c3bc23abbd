use crate::{CommentsUiState, Effect, Msg, NetworkResult};

/// Pure update function: applies a message to state and returns any effects.
///
/// Only `FetchStarted` clears `comments`; a resolution touches just the
/// fields it reports, so a prior `error` survives a later success.
pub fn update(mut state: CommentsUiState, msg: Msg) -> (CommentsUiState, Vec<Effect>) {
    let effects = match msg {
        Msg::FetchStarted => {
            state.is_loading = true;
            state.comments = Vec::new();
            vec![Effect::FetchComments]
        }
        Msg::FetchResolved(NetworkResult::Success(comments)) => {
            state.comments = comments;
            state.is_loading = false;
            Vec::new()
        }
        Msg::FetchResolved(NetworkResult::Error(message)) => {
            state.is_loading = false;
            state.error = Some(message);
            Vec::new()
        }
    };

    (state, effects)
}
