//! Storefront virtual shop section
//!
//! A static Leptos view: one heading and one paragraph inside a responsive
//! section container. Content lives in [`shared::CONFIG`].

pub mod app;
pub mod components;
pub mod pages;

pub use app::App;
pub use components::VirtualShopSection;

#[cfg(feature = "ssr")]
pub use components::render_section_html;
