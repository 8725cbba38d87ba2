pub mod formatter;
pub mod telegram;

pub use formatter::{format_volume, render};
pub use telegram::{DispatchError, TelegramNotifier};
