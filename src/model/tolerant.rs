use serde::{Deserialize, Serialize};

/// Enumeration value that keeps values outside the known set instead of rejecting them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tolerant<T> {
    Known(T),
    Unknown(String),
}

impl<T> Tolerant<T> {
    pub fn known(&self) -> Option<&T> {
        match self {
            Tolerant::Known(value) => Some(value),
            Tolerant::Unknown(_) => None,
        }
    }
}

impl<T> From<T> for Tolerant<T> {
    fn from(value: T) -> Self {
        Tolerant::Known(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;
    use serde_json::json;

    #[test]
    fn keeps_known_values_typed() -> serde_json::Result<()> {
        let value = serde_json::from_value::<Tolerant<Severity>>(json!("CRITICAL"))?;
        assert_eq!(value, Tolerant::Known(Severity::Critical));
        assert_eq!(value.known(), Some(&Severity::Critical));
        Ok(())
    }

    #[test]
    fn keeps_unknown_values_as_text() -> serde_json::Result<()> {
        let value = serde_json::from_value::<Tolerant<Severity>>(json!("CATASTROPHIC"))?;
        assert_eq!(value, Tolerant::Unknown("CATASTROPHIC".to_string()));
        assert_eq!(serde_json::to_value(&value)?, json!("CATASTROPHIC"));
        Ok(())
    }

    #[test]
    fn still_rejects_non_strings() {
        assert!(serde_json::from_value::<Tolerant<Severity>>(json!(3)).is_err());
    }
}
