pub mod file;
pub mod text;
pub mod time;
pub mod validation;

pub use file::{object_url, read_optional_upload, read_upload, revoke_object_url, selected_file};
pub use text::truncate_preview;
pub use time::format_timestamp;
