use crate::model::{Marker, ObjectChildren};
use crate::record::CustomFragments;
use c8y_macros::ExtensibleRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

// API: https://cumulocity.com/api/core/#tag/Managed-objects
#[derive(Debug, Clone, PartialEq, Default, Serialize, ExtensibleRecord)]
#[serde(rename_all = "camelCase")]
pub struct ManagedObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    self_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    creation_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_updated: Option<DateTime<Utc>>,
    #[serde(rename = "c8y_IsDevice", skip_serializing_if = "Option::is_none")]
    c8y_is_device: Option<Marker>,
    #[serde(rename = "c8y_IsDeviceGroup", skip_serializing_if = "Option::is_none")]
    c8y_is_device_group: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    child_additions: Option<ObjectChildren>,
    #[serde(skip_serializing_if = "Option::is_none")]
    child_assets: Option<ObjectChildren>,
    #[serde(skip_serializing_if = "Option::is_none")]
    child_devices: Option<ObjectChildren>,
    #[serde(skip_serializing_if = "Option::is_none")]
    addition_parents: Option<ObjectChildren>,
    #[serde(skip_serializing_if = "Option::is_none")]
    asset_parents: Option<ObjectChildren>,
    #[serde(skip_serializing_if = "Option::is_none")]
    device_parents: Option<ObjectChildren>,
    #[serde(flatten)]
    custom_fragments: CustomFragments,
}

impl ManagedObject {
    pub fn is_device(&self) -> bool {
        self.c8y_is_device.is_some()
    }

    pub fn is_device_group(&self) -> bool {
        self.c8y_is_device_group.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SourceReference;
    use c8y_macros::register_fragment;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use serde_json::json;
    use test_log::test;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[register_fragment(ManagedObject, "c8y_Hardware")]
    struct Hardware {
        model: String,
        serial_number: String,
        revision: Option<String>,
    }

    #[test]
    fn deserialize_a_device() -> serde_json::Result<()> {
        let device = serde_json::from_str::<ManagedObject>(include_str!("../../tests/resources/managed_object.json"))?;

        assert!(device.is_device());
        assert!(!device.is_device_group());
        assert_eq!(device.name().map(String::as_str), Some("Pump 7"));
        assert_eq!(
            device
                .child_devices()
                .and_then(|children| children.references.as_ref())
                .map(|references| references.iter().filter_map(|r| r.managed_object.as_ref()).collect::<Vec<_>>()),
            Some(vec![&SourceReference {
                id: Some("301".to_string()),
                self_link: Some("https://t123.cumulocity.com/inventory/managedObjects/301".to_string()),
                name: Some("Sensor".to_string()),
            }])
        );
        assert_eq!(
            device.custom_fragments().get::<Hardware>("c8y_Hardware"),
            Some(&Hardware {
                model: "PX-7".to_string(),
                serial_number: "0042".to_string(),
                revision: None,
            })
        );
        // c8y_SupportedOperations is not registered
        assert_eq!(device.custom_fragments().len(), 1);

        Ok(())
    }

    #[test]
    fn marker_fragments_serialize_as_empty_objects() -> serde_json::Result<()> {
        let mut group = ManagedObject::default();
        group.set_name("Plant A").set_c8y_is_device_group(Marker {});

        assert_eq!(serde_json::to_value(&group)?, json!({ "name": "Plant A", "c8y_IsDeviceGroup": {} }));
        Ok(())
    }
}
