//! Store catalog and FAQ content that anchors the assistant's system prompt.

use serde::{Deserialize, Serialize};

/// Product and FAQ content rendered into the system instruction turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Store name used in the assistant persona line.
    pub brand: String,
    #[serde(default)]
    pub products: Vec<Product>,
    /// FAQ entries, rendered in declaration order.
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Display price, already formatted with currency.
    pub price: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub topic: String,
    pub answer: String,
}
