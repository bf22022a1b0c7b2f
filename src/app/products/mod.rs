pub mod handler;
pub mod model;

pub use model::{Product, ProductError, DEFAULT_PRICE, DEFAULT_TITLE, EXTRA_CHARGE};
