use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use comments_core::{Comment, NetworkResult, FALLBACK_ERROR_MESSAGE};
use comments_logging::{comments_debug, comments_warn};
use tokio::runtime::Handle;
use tokio::task::{JoinError, JoinHandle};

use crate::fetch::CommentsApi;

/// Source of the comment list, normalized into a `NetworkResult`.
///
/// Implementations never fail outright: every failure path ends in
/// `NetworkResult::Error`.
#[async_trait::async_trait]
pub trait CommentsRepository: Send + Sync {
    async fn get_comments(&self) -> NetworkResult<Vec<Comment>>;
}

/// Repository backed by a [`CommentsApi`], running the call on a shared
/// background runtime.
pub struct RemoteCommentsRepository {
    api: Arc<dyn CommentsApi>,
    runtime: Handle,
}

impl RemoteCommentsRepository {
    pub fn new(api: Arc<dyn CommentsApi>, runtime: Handle) -> Self {
        Self { api, runtime }
    }
}

#[async_trait::async_trait]
impl CommentsRepository for RemoteCommentsRepository {
    async fn get_comments(&self) -> NetworkResult<Vec<Comment>> {
        let api = self.api.clone();
        let handle = self.runtime.spawn(async move { api.get_comments().await });
        let joined = AbortOnDrop(handle).await;

        match joined {
            Ok(Ok(response)) if response.is_successful() => {
                let comments = response.body.unwrap_or_default();
                comments_debug!("fetched {} comments", comments.len());
                NetworkResult::Success(comments)
            }
            Ok(Ok(response)) => NetworkResult::Error(response.reason),
            Ok(Err(err)) => {
                comments_warn!("comments fetch failed: {}", err);
                NetworkResult::Error(message_or_fallback(err.to_string()))
            }
            Err(join_err) => {
                comments_warn!("comments fetch task did not complete: {}", join_err);
                NetworkResult::Error(message_or_fallback(join_err.to_string()))
            }
        }
    }
}

/// Aborts the background call when the awaiting side goes away.
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Future for AbortOnDrop<T> {
    type Output = Result<T, JoinError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.0).poll(cx)
    }
}

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

fn message_or_fallback(message: String) -> String {
    if message.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}
