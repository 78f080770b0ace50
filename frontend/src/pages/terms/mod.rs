pub mod drafts;
pub mod panel;
pub mod repository;
pub mod tree;
pub mod view_model;

pub use panel::TermsPage;
