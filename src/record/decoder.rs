use crate::record::{DecodeError, ExtensibleRecord, FragmentRegistry, global_registry};
use serde::de::DeserializeSeed;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::marker::PhantomData;
use tracing::{debug, instrument, warn};

/// Outcome of offering a single property to the declared fields of a record.
#[derive(Debug)]
pub enum Assignment {
    Assigned,
    Invalid(serde_json::Error),
    /// No declared field has this wire name, the value is handed back.
    Undeclared(Value),
}

/// A record together with everything that went wrong while building it.
#[derive(Debug)]
pub struct Decoded<R> {
    record: R,
    issues: Vec<DecodeError>,
    dropped: Vec<String>,
}

impl<R> Decoded<R> {
    pub fn record(&self) -> &R {
        &self.record
    }

    pub fn into_record(self) -> R {
        self.record
    }

    /// Properties whose value could not be converted; the record leaves them unset.
    pub fn issues(&self) -> &[DecodeError] {
        &self.issues
    }

    /// Properties that matched neither a declared field nor a registered fragment.
    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// The record, its issues and the names of the dropped properties.
    pub fn into_parts(self) -> (R, Vec<DecodeError>, Vec<String>) {
        (self.record, self.issues, self.dropped)
    }

    pub(crate) fn into_strict(mut self) -> Result<Self, DecodeError> {
        if self.issues.is_empty() { Ok(self) } else { Err(self.issues.remove(0)) }
    }

    pub(crate) fn log(&self, record: &str, warn_on_dropped: bool) {
        for issue in &self.issues {
            warn!(record, "⚠️ Skipped property: {}", issue);
        }

        if !self.dropped.is_empty() {
            if warn_on_dropped {
                warn!(record, "⚠️ Dropped unregistered properties: {}", self.dropped.join(", "));
            } else {
                debug!(record, "Dropped unregistered properties: {}", self.dropped.join(", "));
            }
        }
    }
}

/// Routes every property of `object` to a declared field of `R`, a registered custom fragment, or nowhere.
///
/// Declared fields take precedence over registrations. A value that cannot be converted is reported in the
/// returned issues and does not stop the remaining properties from being processed.
#[instrument(level = "trace", skip_all, fields(record = R::TYPE_NAME))]
pub fn decode_object<R: ExtensibleRecord>(object: Map<String, Value>, registry: &FragmentRegistry) -> Decoded<R> {
    let mut record = R::default();
    let mut issues = Vec::new();
    let mut dropped = Vec::new();

    for (property, value) in object {
        match record.assign_declared(&property, value) {
            Assignment::Assigned => {}
            Assignment::Invalid(source) => issues.push(DecodeError::InvalidDeclaredField {
                record: R::TYPE_NAME,
                property,
                source,
            }),
            Assignment::Undeclared(value) => match registry.lookup::<R>(&property) {
                Some(registration) => match (registration.convert)(value) {
                    Ok(fragment) => {
                        record.fragments_mut().insert_boxed(property, fragment);
                    }
                    Err(source) => issues.push(DecodeError::InvalidFragment {
                        record: R::TYPE_NAME,
                        property,
                        target: registration.target,
                        source,
                    }),
                },
                None => dropped.push(property),
            },
        }
    }

    Decoded { record, issues, dropped }
}

/// Decodes a single record against an explicit registry.
pub struct RecordSeed<'a, R> {
    registry: &'a FragmentRegistry,
    record: PhantomData<R>,
}

impl<'a, R> RecordSeed<'a, R> {
    pub fn new(registry: &'a FragmentRegistry) -> Self {
        RecordSeed {
            registry,
            record: PhantomData,
        }
    }
}

impl<'de, R: ExtensibleRecord> DeserializeSeed<'de> for RecordSeed<'_, R> {
    type Value = Decoded<R>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        Ok(decode_object(object, self.registry))
    }
}

/// Deserializes a record against the process-wide registry, logging and swallowing property level failures.
pub fn deserialize_with_global_registry<'de, R, D>(deserializer: D) -> Result<R, D::Error>
where
    R: ExtensibleRecord,
    D: Deserializer<'de>,
{
    let registry = global_registry();
    let decoded = RecordSeed::<R>::new(&registry).deserialize(deserializer)?;
    decoded.log(R::TYPE_NAME, false);
    Ok(decoded.into_record())
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
