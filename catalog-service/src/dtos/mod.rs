pub mod products;

pub use products::PriceRangeParams;
