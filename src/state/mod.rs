// Máquinas de estado puras (testeables fuera del navegador)

pub mod confirm;
pub mod poll_guard;

pub use confirm::ConfirmFlow;
pub use poll_guard::PollGuard;
