use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde_json::Value;

use crate::catalog::Product;
use crate::catalog::ProductId;
use crate::preferences::Preferences;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub product: Product,
    #[serde(default, deserialize_with = "text_or_null")]
    pub explanation: String,
    #[serde(
        default,
        deserialize_with = "loose_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub confidence_score: Option<f64>,
}

fn text_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The score comes straight from a language model: numbers and numeric
/// strings are kept, anything else reads as absent.
fn loose_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let score = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(score.filter(|s| s.is_finite()))
}

/// Body of `POST /recommendations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub preferences: Preferences,
    pub browsing_history: Vec<ProductId>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub count: usize,
}

impl RecommendationResponse {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Loading flag and the last resolved recommendation set.
///
/// There is no cancellation: every resolution overwrites `items`, whichever
/// request it belongs to. `request_id` only labels diagnostics.
#[derive(Debug, Clone)]
pub struct RecommendationSession {
    pub is_loading: bool,
    pub items: Vec<Recommendation>,
    next_request_id: u64,
}

impl Default for RecommendationSession {
    fn default() -> Self {
        Self {
            is_loading: false,
            items: Vec::new(),
            next_request_id: 1,
        }
    }
}

impl RecommendationSession {
    /// Marks a request in flight, drops stale items, and returns its id.
    pub fn begin(&mut self) -> u64 {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.is_loading = true;
        self.items.clear();
        request_id
    }

    pub fn resolve(&mut self, recommendations: Vec<Recommendation>) {
        self.is_loading = false;
        self.items = recommendations;
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn last_request_id(&self) -> u64 {
        self.next_request_id - 1
    }
}
