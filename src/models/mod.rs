pub mod form;
pub mod server;

pub use form::ServerFormData;
pub use server::{DeleteServerResponse, ServerInfo, ServerSummary, SessionInfo, UpdateServerRequest};
