pub mod use_server_status;

pub use use_server_status::{use_server_status, UseServerStatusHandle};
