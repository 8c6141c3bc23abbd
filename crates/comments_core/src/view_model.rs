use crate::Comment;

pub const SCREEN_TITLE: &str = "Comments";

/// Shown instead of the raw failure message.
pub const ERROR_BANNER_TEXT: &str = "There Was An Error! Try Again...";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentsViewModel {
    pub title: &'static str,
    pub show_list: bool,
    pub show_loading: bool,
    pub show_error: bool,
    pub rows: Vec<CommentRowView>,
    pub error_banner: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRowView {
    pub id: i64,
    pub initial: char,
    pub name: String,
    pub email: String,
    pub body: String,
}

impl From<&Comment> for CommentRowView {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            initial: comment.avatar_initial().unwrap_or('?'),
            name: comment.name.clone(),
            email: comment.email.clone(),
            body: comment.body.clone(),
        }
    }
}
