//! HTTP/JSON surface of the task service.

pub mod error;
pub mod mapper;
pub mod models;
mod server;
mod tasks;

pub use error::ErrorBody;
pub use mapper::TaskMapper;
pub use models::{CreateTaskPayload, TaskPayload};
pub use server::{AppState, ServerHandle, build_router, start_server};
