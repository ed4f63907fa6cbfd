use serde::{Deserialize, Serialize};
use shoprank_core::{Error, ProductId, Result};

/// A recommendation request as it arrives from a caller
///
/// Exactly one of `product_id`, `query` and `user_id` must be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub product_id: Option<ProductId>,
    #[serde(default)]
    pub query: Option<String>,
    /// Raw user input; validated against the rating model
    #[serde(default, deserialize_with = "user_id_text")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub nums: Option<usize>,
}

/// A request with exactly one query mode selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Item(ProductId),
    Text(String),
    User(String),
}

impl RecommendRequest {
    pub fn query(&self) -> Result<Query> {
        match (&self.product_id, &self.query, &self.user_id) {
            (Some(id), None, None) => Ok(Query::Item(*id)),
            (None, Some(text), None) => Ok(Query::Text(text.clone())),
            (None, None, Some(user)) => Ok(Query::User(user.clone())),
            (None, None, None) => Err(Error::InvalidQuery(
                "one of product_id, query or user_id is required".to_string(),
            )),
            _ => Err(Error::InvalidQuery(
                "only one of product_id, query or user_id may be given".to_string(),
            )),
        }
    }
}

// Accept user ids sent either as JSON numbers or strings
fn user_id_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Number(n) => n.to_string(),
        Raw::Text(s) => s,
    }))
}
