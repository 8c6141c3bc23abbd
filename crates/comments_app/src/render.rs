use comments_core::{CommentRowView, CommentsViewModel};

const LOADING_TEXT: &str = "Loading comments...";

/// Render the screen as plain text lines: title, then each visible region.
pub fn render(view: &CommentsViewModel) -> Vec<String> {
    let mut lines = vec![view.title.to_string(), "=".repeat(view.title.len())];

    if view.show_list {
        for row in &view.rows {
            lines.extend(format_row(row));
        }
    }

    if view.show_loading {
        lines.push(LOADING_TEXT.to_string());
    }

    if view.show_error {
        if let Some(banner) = view.error_banner {
            lines.push(format!("(!) {banner}"));
        }
    }

    lines
}

fn format_row(row: &CommentRowView) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!("[{}] {} <{}>", row.initial, row.name, row.email),
    ];
    lines.extend(row.body.lines().map(|line| format!("    {line}")));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use comments_core::{Comment, CommentsUiState};
    use pretty_assertions::assert_eq;

    #[test]
    fn loading_screen() {
        let state = CommentsUiState {
            is_loading: true,
            ..CommentsUiState::default()
        };

        assert_eq!(
            render(&state.view()),
            vec!["Comments", "========", "Loading comments..."]
        );
    }

    #[test]
    fn loaded_screen_lists_rows_with_indented_bodies() {
        let state = CommentsUiState {
            comments: vec![Comment {
                body: "quia molestiae\nreprehenderit".to_string(),
                email: "eliseo@gardner.biz".to_string(),
                id: 1,
                name: "id labore ex et quam laborum".to_string(),
                post_id: 1,
            }],
            error: None,
            is_loading: false,
        };

        assert_eq!(
            render(&state.view()),
            vec![
                "Comments",
                "========",
                "",
                "[E] id labore ex et quam laborum <eliseo@gardner.biz>",
                "    quia molestiae",
                "    reprehenderit",
            ]
        );
    }

    #[test]
    fn failed_screen_shows_banner_not_raw_message() {
        let state = CommentsUiState {
            comments: Vec::new(),
            error: Some("error sending request for url".to_string()),
            is_loading: false,
        };

        let lines = render(&state.view());

        assert_eq!(
            lines.last().map(String::as_str),
            Some("(!) There Was An Error! Try Again...")
        );
        assert!(!lines.iter().any(|line| line.contains("sending request")));
    }
}
