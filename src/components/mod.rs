//! The components module contains all shared components for the site.

mod app;
mod browser;
mod contact;
mod demo_card;
mod header;
mod icons;
mod seo;
mod shelf;
mod views;

pub use app::*;
pub use contact::*;
pub use demo_card::*;
pub use header::*;
pub use icons::*;
pub use shelf::*;
// Views are accessed via views::ViewName
