use crate::record::CustomFragments;
use c8y_macros::ExtensibleRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// API: https://cumulocity.com/api/core/#tag/Operations
#[derive(Debug, Clone, PartialEq, Default, Serialize, ExtensibleRecord)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    self_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bulk_operation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    creation_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    device_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<OperationStatus>,
    #[serde(rename = "c8y_Metadata", skip_serializing_if = "Option::is_none")]
    c8y_metadata: Option<Value>,
    #[serde(flatten)]
    custom_fragments: CustomFragments,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    Pending,
    Executing,
    Successful,
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{DecodeError, ExtensibleRecord, FragmentRegistry};
    use crate::{Codec, DecodePolicy};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Restart {}

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct SoftwareUpdate {
        name: String,
        version: String,
        action: String,
    }

    fn registry() -> FragmentRegistry {
        let mut registry = FragmentRegistry::new();
        registry
            .register::<Operation, Restart>("c8y_Restart")
            .register::<Operation, Vec<SoftwareUpdate>>("c8y_SoftwareUpdate");
        registry
    }

    #[test]
    fn metadata_uses_its_wire_name() -> serde_json::Result<()> {
        assert!(Operation::is_declared("c8y_Metadata"));
        assert!(!Operation::is_declared("c8yMetadata"));

        let mut operation = Operation::default();
        operation.set_c8y_metadata(json!({ "origin": "bulk" }));

        assert_eq!(serde_json::to_value(&operation)?, json!({ "c8y_Metadata": { "origin": "bulk" } }));
        Ok(())
    }

    #[test]
    fn deserialize_an_operation_with_command_fragments() -> Result<(), DecodeError> {
        let codec = Codec::new(registry(), DecodePolicy::Strict);

        let decoded = codec.decode::<Operation>(include_str!("../../tests/resources/operation.json"))?;

        let operation = decoded.record();
        assert_eq!(operation.status(), Some(&OperationStatus::Pending));
        assert_eq!(operation.device_id().map(String::as_str), Some("5200"));
        assert_eq!(operation.custom_fragments().get::<Restart>("c8y_Restart"), Some(&Restart {}));
        assert_eq!(
            operation.custom_fragments().get::<Vec<SoftwareUpdate>>("c8y_SoftwareUpdate").map(Vec::len),
            Some(1)
        );
        Ok(())
    }

    #[rstest]
    #[case("PENDING", OperationStatus::Pending)]
    #[case("EXECUTING", OperationStatus::Executing)]
    #[case("SUCCESSFUL", OperationStatus::Successful)]
    #[case("FAILED", OperationStatus::Failed)]
    fn deserialize_status(#[case] wire: &str, #[case] expected: OperationStatus) -> serde_json::Result<()> {
        let operation = serde_json::from_value::<Operation>(json!({ "status": wire }))?;
        assert_eq!(operation.status(), Some(&expected));
        Ok(())
    }

    #[test]
    fn lowercase_status_is_rejected_by_a_strict_codec() {
        let codec = Codec::new(registry(), DecodePolicy::Strict);

        let result = codec.decode::<Operation>(r#"{"status": "pending"}"#);

        assert!(matches!(result, Err(DecodeError::InvalidDeclaredField { property, .. }) if property == "status"));
    }
}
