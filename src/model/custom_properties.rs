use crate::record::CustomFragments;
use c8y_macros::ExtensibleRecord;
use serde::Serialize;

/// Custom properties of a user or tenant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, ExtensibleRecord)]
#[serde(rename_all = "camelCase")]
pub struct CustomProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(flatten)]
    custom_fragments: CustomFragments,
}
