//! About Us, Founder and Our Story share one title/content/image panel.

pub mod panel;
pub mod repository;
pub mod view_model;

pub use panel::{AboutUsPage, FounderPage, OurStoryPage};
