use serde::Serialize;
use tracing::debug;

/// Pretty JSON of the full record, custom fragments included. Falls back to `TypeName@address` when the record
/// cannot be serialized.
pub fn debug_string<T: Serialize>(value: &T, type_name: &str) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(json) => json,
        Err(err) => {
            debug!("Unable to render {} as JSON: {}", type_name, err);
            format!("{}@{:p}", type_name, value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alarm, Severity};
    use crate::record::{ExtensibleRecord, FragmentError};
    use serde::{Deserialize, Serializer};

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Unrenderable;

    impl Serialize for Unrenderable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cannot be rendered"))
        }
    }

    #[test]
    fn renders_declared_fields_and_fragments_together() -> Result<(), FragmentError> {
        let mut alarm = Alarm::default();
        alarm.set_severity(Severity::Minor).set_text("Low battery");
        alarm.insert_fragment("c8y_Battery", serde_json::json!({ "level": 12 }))?;

        let rendered = alarm.to_string();

        assert!(rendered.contains(r#""severity": "MINOR""#), "{}", rendered);
        assert!(rendered.contains(r#""c8y_Battery": {"#), "{}", rendered);
        Ok(())
    }

    #[test]
    fn falls_back_to_the_type_name_when_serialization_fails() -> Result<(), FragmentError> {
        let mut alarm = Alarm::default();
        alarm.insert_fragment("acme_Broken", Unrenderable)?;

        let rendered = alarm.to_string();

        assert!(rendered.starts_with("Alarm@0x"), "{}", rendered);
        Ok(())
    }
}
