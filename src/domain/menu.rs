use serde::{Deserialize, Serialize, Serializer};

/// One normalized menu entry.
///
/// Field order here is the key order in the written JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    pub sku: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_price"
    )]
    pub price: Option<f64>,
    pub pill: String,
    pub description: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
}

/// The document written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuFeed {
    pub updated_at: String,
    pub items: Vec<MenuItem>,
}

// Largest integer an f64 holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Write whole-number prices as integers (`4` rather than `4.0`).
fn serialize_price<S>(price: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match price {
        Some(p) if p.fract() == 0.0 && p.abs() <= MAX_SAFE_INTEGER => {
            serializer.serialize_i64(*p as i64)
        }
        Some(p) => serializer.serialize_f64(*p),
        None => serializer.serialize_none(),
    }
}
