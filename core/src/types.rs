//! Product DTO shared by the client, the views, and the tests.
//!
//! # Design
//! The type mirrors the mock-server's schema but is defined independently;
//! the integration tests catch schema drift between the two crates.

use serde::{de, Deserialize, Deserializer, Serialize};

/// Server-assigned product identifier.
pub type ProductId = i64;

/// A product as exchanged with the API.
///
/// `id` is `None` until the server assigns one and is left out of the JSON
/// payload in that case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub desc: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
}

impl Product {
    /// A product that has not been created server-side yet.
    pub fn new(desc: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            desc: desc.into(),
            price,
        }
    }

    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    /// Price as shown to the user: always two decimal places.
    pub fn price_text(&self) -> String {
        format_price(self.price)
    }
}

pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

/// Accept the price either as a JSON number or as a numeric string, which is
/// how decimal columns usually come back from REST frameworks.
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(n) => Ok(n),
        RawPrice::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid price `{s}`"))),
    }
}
