pub mod common;
pub mod confirm_dialog;
pub mod empty_state;
pub mod forms;
pub mod image;
pub mod layout;
pub mod modal;
pub mod notice;
pub mod panel;
