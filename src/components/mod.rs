//! UI Components
//!
//! Overlays rendered by the client on top of the server-rendered page.

mod confirm_dialog;
mod share_dialog;
mod toast_stack;

pub use confirm_dialog::ConfirmDialog;
pub use share_dialog::ShareDialog;
pub use toast_stack::ToastStack;
