pub mod app;
pub mod confirm_modal;
pub mod notification;
pub mod server_details;
pub mod server_list;

pub use app::App;
pub use confirm_modal::ConfirmModal;
pub use notification::NotificationContainer;
pub use server_details::ServerDetailsPage;
pub use server_list::ServersPage;
