use serde::Deserialize;

/// Query parameters for the price range endpoint. Both bounds arrive as raw
/// strings: a non-numeric value must behave exactly like an absent one
/// (falling back to the default) rather than rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PriceRangeParams {
    pub min: Option<String>,
    pub max: Option<String>,
}

impl PriceRangeParams {
    pub fn min_price(&self) -> f64 {
        parse_or(self.min.as_deref(), 0.0)
    }

    pub fn max_price(&self) -> f64 {
        parse_or(self.max.as_deref(), f64::MAX)
    }
}

fn parse_or(raw: Option<&str>, fallback: f64) -> f64 {
    raw.and_then(|s| s.parse::<f64>().ok()).unwrap_or(fallback)
}
