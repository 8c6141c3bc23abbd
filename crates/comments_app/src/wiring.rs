use std::sync::Arc;

use comments_engine::{
    ClientSettings, CommentsController, RemoteCommentsRepository, ReqwestCommentsApi,
    TransportError,
};
use tokio::runtime::Runtime;

/// The process-wide instances, built once at startup and passed down.
pub struct AppContext {
    pub controller: CommentsController,
}

impl AppContext {
    pub fn new(runtime: &Runtime, settings: ClientSettings) -> Result<Self, TransportError> {
        let api = Arc::new(ReqwestCommentsApi::new(settings)?);
        let repository = Arc::new(RemoteCommentsRepository::new(api, runtime.handle().clone()));
        let controller = CommentsController::new(repository, runtime.handle());
        Ok(Self { controller })
    }
}
