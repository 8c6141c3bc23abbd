//! Comments core: data model, pure state machine and view-model helpers.
mod effect;
mod model;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use model::{Comment, NetworkResult, FALLBACK_ERROR_MESSAGE};
pub use msg::Msg;
pub use state::{CommentsUiState, Phase};
pub use update::update;
pub use view_model::{CommentRowView, CommentsViewModel, ERROR_BANNER_TEXT, SCREEN_TITLE};
