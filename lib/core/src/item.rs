use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog key of a sellable item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    #[inline]
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId(id)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ProductId)
    }
}

/// A row of the catalog snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub product_id: ProductId,
    pub product_name: String,
    #[serde(default, alias = "category")]
    pub sub_category: Option<String>,
    /// Catalog-average rating
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Precomputed token sequence fed to the similarity oracle
    #[serde(default, deserialize_with = "tokens_or_text")]
    pub content_processed: Vec<String>,
}

impl Item {
    pub fn new(product_id: impl Into<ProductId>, product_name: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            sub_category: None,
            rating: None,
            price: None,
            description: String::new(),
            link: String::new(),
            image: None,
            content_processed: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = Some(sub_category.into());
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn with_content<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content_processed = tokens.into_iter().map(Into::into).collect();
        self
    }
}

// JSON snapshots store content_processed either as a token list or as one
// space-joined string; binary encodings always carry the plain list written by
// `Serialize`
fn tokens_or_text<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    if !deserializer.is_human_readable() {
        return Vec::<String>::deserialize(deserializer);
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Content {
        Tokens(Vec<String>),
        Text(String),
    }

    Ok(match Option::<Content>::deserialize(deserializer)? {
        Some(Content::Tokens(tokens)) => tokens,
        Some(Content::Text(text)) => text.split_whitespace().map(str::to_string).collect(),
        None => Vec::new(),
    })
}

/// A ranked item joined with its display fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub product_id: ProductId,
    pub product_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub description: String,
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Similarity score or predicted rating, depending on the query mode
    pub score: f32,
}

impl Record {
    pub fn from_item(item: &Item, score: f32) -> Self {
        Self {
            product_id: item.product_id,
            product_name: item.product_name.clone(),
            sub_category: item.sub_category.clone(),
            rating: item.rating,
            price: item.price,
            description: item.description.clone(),
            link: item.link.clone(),
            image: item.image.clone(),
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_deserialize_with_category_alias() {
        let item: Item = serde_json::from_str(
            r#"{"product_id": 7, "product_name": "Áo thun", "category": "Thời Trang Nam", "rating": 4.5}"#,
        )
        .unwrap();
        assert_eq!(item.product_id, ProductId(7));
        assert_eq!(item.sub_category.as_deref(), Some("Thời Trang Nam"));
        assert_eq!(item.rating, Some(4.5));
        assert!(item.content_processed.is_empty());
    }

    #[test]
    fn test_content_processed_accepts_text() {
        let item: Item = serde_json::from_str(
            r#"{"product_id": 1, "product_name": "x", "content_processed": "áo  thun nam"}"#,
        )
        .unwrap();
        assert_eq!(item.content_processed, vec!["áo", "thun", "nam"]);

        let item: Item = serde_json::from_str(
            r#"{"product_id": 1, "product_name": "x", "content_processed": ["áo", "thun"]}"#,
        )
        .unwrap();
        assert_eq!(item.content_processed, vec!["áo", "thun"]);
    }

    #[test]
    fn test_product_id_parse() {
        assert_eq!(" 42 ".parse::<ProductId>().unwrap(), ProductId(42));
        assert!("abc".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_record_skips_missing_fields() {
        let item = Item::new(3u64, "Giày");
        let json = serde_json::to_value(Record::from_item(&item, 0.5)).unwrap();
        assert!(json.get("rating").is_none());
        assert_eq!(json["product_id"], 3);
    }
}
