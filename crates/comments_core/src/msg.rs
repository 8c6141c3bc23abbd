use crate::{Comment, NetworkResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Controller initialization; the only trigger for a fetch.
    FetchStarted,
    /// Outcome of the fetch requested by `Effect::FetchComments`.
    FetchResolved(NetworkResult<Vec<Comment>>),
}
