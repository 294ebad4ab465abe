use serde::{Deserialize, Serialize};

/// A single tenant option, see [`CategoryOptions`](crate::model::CategoryOptions) for a whole category.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TenantOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}
