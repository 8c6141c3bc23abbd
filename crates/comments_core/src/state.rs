use crate::view_model::{CommentRowView, CommentsViewModel, ERROR_BANNER_TEXT, SCREEN_TITLE};
use crate::Comment;

/// Snapshot of everything the comments screen renders from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentsUiState {
    pub comments: Vec<Comment>,
    pub error: Option<String>,
    pub is_loading: bool,
}

/// Coarse classification of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl CommentsUiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failed
        } else if !self.comments.is_empty() {
            Phase::Loaded
        } else {
            Phase::Idle
        }
    }

    pub fn view(&self) -> CommentsViewModel {
        CommentsViewModel {
            title: SCREEN_TITLE,
            show_list: !self.comments.is_empty(),
            show_loading: self.is_loading,
            show_error: self.error.is_some(),
            rows: self.comments.iter().map(CommentRowView::from).collect(),
            error_banner: self.error.as_ref().map(|_| ERROR_BANNER_TEXT),
        }
    }
}
