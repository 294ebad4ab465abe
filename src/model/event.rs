use crate::model::SourceReference;
use crate::record::CustomFragments;
use c8y_macros::ExtensibleRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

// API: https://cumulocity.com/api/core/#tag/Events
#[derive(Debug, Clone, PartialEq, Default, Serialize, ExtensibleRecord)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    self_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    creation_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<SourceReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    r#type: Option<String>,
    #[serde(flatten)]
    custom_fragments: CustomFragments,
}
