mod virtual_shop;

pub use virtual_shop::VirtualShopSection;

#[cfg(feature = "ssr")]
pub use virtual_shop::render_section_html;
