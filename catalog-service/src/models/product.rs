use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// A catalog document. Only the fields the service filters on are modeled;
/// everything else round-trips untouched through `extra`, so the stored
/// schema is never validated or narrowed by this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<SalePrice>,
    #[serde(flatten)]
    pub extra: Document,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalePrice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usd_amount: Option<f64>,
    #[serde(flatten)]
    pub extra: Document,
}
