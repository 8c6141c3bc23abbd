#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Run one fetch of the comment list and report back with `Msg::FetchResolved`.
    FetchComments,
}
