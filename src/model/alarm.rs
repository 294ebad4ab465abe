use crate::model::SourceReference;
use crate::record::CustomFragments;
use c8y_macros::ExtensibleRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// API: https://cumulocity.com/api/core/#tag/Alarms
#[derive(Debug, Clone, PartialEq, Default, Serialize, ExtensibleRecord)]
#[serde(rename_all = "camelCase")]
pub struct Alarm {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    self_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    creation_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_occurrence_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    severity: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<SourceReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<AlarmStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    r#type: Option<String>,
    #[serde(flatten)]
    custom_fragments: CustomFragments,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Critical,
    Major,
    Minor,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlarmStatus {
    Active,
    Acknowledged,
    Cleared,
}

#[cfg(test)]
mod tests {
    use super::*;
    use c8y_macros::register_fragment;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use test_log::test;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[register_fragment(Alarm, "alarm_test_Fragment")]
    struct MyType {
        a: u32,
    }

    #[test]
    fn deserialize_a_full_alarm() -> serde_json::Result<()> {
        let json = include_str!("../../tests/resources/alarm.json");

        let alarm = serde_json::from_str::<Alarm>(json)?;

        assert_eq!(alarm.id().map(String::as_str), Some("10"));
        assert_eq!(alarm.self_link().map(String::as_str), Some("https://t123.cumulocity.com/alarm/alarms/10"));
        assert_eq!(alarm.count(), Some(&3));
        assert_eq!(alarm.severity(), Some(&Severity::Major));
        assert_eq!(alarm.status(), Some(&AlarmStatus::Active));
        assert_eq!(alarm.r#type().map(String::as_str), Some("c8y_UnavailabilityAlarm"));
        assert_eq!(alarm.source().and_then(|source| source.id.as_deref()), Some("251982"));
        assert_eq!(alarm.time(), Some(&Utc.with_ymd_and_hms(2020, 3, 19, 12, 3, 27).unwrap()));
        // c8y_Note is not registered
        assert!(alarm.custom_fragments().is_empty());

        Ok(())
    }

    #[test]
    fn registered_fragments_are_captured_with_their_type() -> serde_json::Result<()> {
        let json = r#"{"severity":"MAJOR","text":"x","alarm_test_Fragment":{"a":1}}"#;

        let alarm = serde_json::from_str::<Alarm>(json)?;

        assert_eq!(alarm.severity(), Some(&Severity::Major));
        assert_eq!(alarm.text().map(String::as_str), Some("x"));
        assert_eq!(alarm.custom_fragments().len(), 1);
        assert_eq!(alarm.custom_fragments().get::<MyType>("alarm_test_Fragment"), Some(&MyType { a: 1 }));

        Ok(())
    }

    #[test]
    fn unregistered_properties_are_lost() -> serde_json::Result<()> {
        let alarm = serde_json::from_str::<Alarm>(r#"{"severity":"MAJOR","text":"x","randomThing":42}"#)?;

        assert!(!alarm.custom_fragments().contains_key("randomThing"));
        assert!(!serde_json::to_string(&alarm)?.contains("randomThing"));

        Ok(())
    }

    #[test]
    fn serialize_is_sparse_and_flattens_fragments() -> serde_json::Result<()> {
        let mut alarm = Alarm::default();
        alarm
            .set_severity(Severity::Critical)
            .set_status(AlarmStatus::Cleared)
            .set_text("Overheating")
            .set_type("acme_Temperature")
            .set_source(SourceReference::with_id("42"));
        alarm.custom_fragments.insert("acme_Reading", json!({ "celsius": 98.5 }));

        let value = serde_json::to_value(&alarm)?;

        assert_eq!(
            value,
            json!({
                "severity": "CRITICAL",
                "source": { "id": "42" },
                "status": "CLEARED",
                "text": "Overheating",
                "type": "acme_Temperature",
                "acme_Reading": { "celsius": 98.5 }
            })
        );

        Ok(())
    }

    #[test]
    fn declared_fields_survive_a_round_trip() -> serde_json::Result<()> {
        let mut alarm = Alarm::default();
        alarm
            .set_id("7")
            .set_count(2u64)
            .set_severity(Severity::Warning)
            .set_creation_time(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
            .set_text("Door open");

        let copy = serde_json::from_str::<Alarm>(&serde_json::to_string(&alarm)?)?;

        assert_eq!(copy, alarm);
        Ok(())
    }

    #[test]
    fn equality_covers_declared_fields_and_fragments() -> serde_json::Result<()> {
        let json = r#"{"severity":"MINOR","text":"x","alarm_test_Fragment":{"a":5}}"#;
        let first = serde_json::from_str::<Alarm>(json)?;
        let second = serde_json::from_str::<Alarm>(json)?;
        assert_eq!(first, second);

        let mut changed_field = second.clone();
        changed_field.set_text("y");
        assert_ne!(first, changed_field);

        let mut changed_fragment = second.clone();
        changed_fragment.custom_fragments.insert("alarm_test_Fragment", MyType { a: 6 });
        assert_ne!(first, changed_fragment);

        let mut untyped_fragment = second;
        untyped_fragment.custom_fragments.insert("alarm_test_Fragment", json!({ "a": 5 }));
        assert_ne!(first, untyped_fragment);

        Ok(())
    }

    #[test]
    fn setters_and_takers_change_declared_fields() {
        let mut alarm = Alarm::default();
        alarm.set_text("x");

        assert_eq!(alarm.take_text(), Some("x".to_string()));
        assert_eq!(alarm.text(), None);
        assert_eq!(serde_json::to_value(&alarm).ok(), Some(Value::Object(Default::default())));
    }
}
