mod shop;

pub use shop::ShopPage;
