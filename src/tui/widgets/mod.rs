//! Reusable widgets for the TUI

pub mod input;
pub mod notification;
pub mod stat;

pub use input::TextInput;
pub use notification::{Notification, NotificationType};
pub use stat::Stat;
