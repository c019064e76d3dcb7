pub mod panel;
pub mod watch;
