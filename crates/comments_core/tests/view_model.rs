use comments_core::{
    Comment, CommentsUiState, CommentsViewModel, ERROR_BANNER_TEXT, SCREEN_TITLE,
};

fn comment(id: i64, email: &str) -> Comment {
    Comment {
        body: "laudantium enim quasi".to_string(),
        email: email.to_string(),
        id,
        name: format!("name {id}"),
        post_id: 1,
    }
}

#[test]
fn default_state_shows_nothing() {
    let view = CommentsUiState::new().view();

    assert_eq!(
        view,
        CommentsViewModel {
            title: SCREEN_TITLE,
            ..CommentsViewModel::default()
        }
    );
}

#[test]
fn loading_state_shows_only_indicator() {
    let state = CommentsUiState {
        is_loading: true,
        ..CommentsUiState::default()
    };
    let view = state.view();

    assert!(view.show_loading);
    assert!(!view.show_list);
    assert!(!view.show_error);
    assert_eq!(view.error_banner, None);
}

#[test]
fn loaded_state_builds_rows_in_order() {
    let state = CommentsUiState {
        comments: vec![comment(2, "jayne@kuhic.sh"), comment(1, "")],
        error: None,
        is_loading: false,
    };
    let view = state.view();

    assert!(view.show_list);
    assert!(!view.show_loading);
    let ids: Vec<i64> = view.rows.iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(view.rows[0].initial, 'J');
    assert_eq!(view.rows[1].initial, '?');
    assert_eq!(view.rows[0].body, "laudantium enim quasi");
}

#[test]
fn failed_state_shows_fixed_banner() {
    let state = CommentsUiState {
        comments: Vec::new(),
        error: Some("error sending request".to_string()),
        is_loading: false,
    };
    let view = state.view();

    assert!(view.show_error);
    assert!(!view.show_list);
    assert_eq!(view.error_banner, Some(ERROR_BANNER_TEXT));
}
