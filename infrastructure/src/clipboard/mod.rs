//! Clipboard adapters

mod system;

pub use system::SystemClipboard;
