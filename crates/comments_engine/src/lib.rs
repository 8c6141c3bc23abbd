//! Comments engine: transport client, repository and the view state controller.
mod controller;
mod decode;
mod fetch;
mod repository;
mod types;

pub use controller::CommentsController;
pub use decode::{decode_comments, DecodeError};
pub use fetch::{ClientSettings, CommentsApi, ReqwestCommentsApi, DEFAULT_BASE_URL};
pub use repository::{CommentsRepository, RemoteCommentsRepository};
pub use types::{ApiResponse, TransportError};
