pub mod product;

pub use product::{Product, SalePrice};
