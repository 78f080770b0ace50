pub mod notice;
pub mod panel;
pub mod subtree;

pub use notice::{Notice, NoticeState};
pub use panel::{
    dismiss_callback, notice_signal, reject, spawn_load, spawn_submit, KeyedSequence, PanelState,
    RequestToken,
};
pub use subtree::{spawn_subtree_load, SubtreeCache};
