pub mod health;
pub mod products;

pub use health::health_check;
pub use products::{
    get_product_by_title, list_products, list_products_by_category, list_products_by_price,
};
