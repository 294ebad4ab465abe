use crate::codec_config::CodecConfig;
use crate::record::{Decoded, DecodeError, ExtensibleRecord, Fragment, FragmentRegistry, decode_object, global_registry, json_type};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

/// How property level failures are handled while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Skip the property and report it in [`Decoded::issues`].
    #[default]
    Lenient,
    /// Fail on the first property that cannot be converted.
    Strict,
}

/// Decodes and encodes records against its own fragment registry.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    registry: FragmentRegistry,
    policy: DecodePolicy,
    warn_on_dropped: bool,
}

impl Codec {
    pub fn new(registry: FragmentRegistry, policy: DecodePolicy) -> Self {
        Codec {
            registry,
            policy,
            warn_on_dropped: false,
        }
    }

    /// Builds a codec from configuration, starting from the global registry when configured to inherit it.
    pub fn from_config(config: &CodecConfig) -> Self {
        let decoding = config.decoding();
        let registry = if decoding.inherit_global_fragments() {
            FragmentRegistry::clone(&global_registry())
        } else {
            FragmentRegistry::new()
        };
        debug!(policy = ?decoding.policy(), inherit = decoding.inherit_global_fragments(), "Created codec from configuration");

        Codec {
            registry,
            policy: decoding.policy(),
            warn_on_dropped: decoding.warn_on_dropped(),
        }
    }

    pub fn policy(&self) -> DecodePolicy {
        self.policy
    }

    pub fn registry(&self) -> &FragmentRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut FragmentRegistry {
        &mut self.registry
    }

    pub fn register<R, T>(&mut self, name: impl Into<String>) -> &mut Self
    where
        R: ExtensibleRecord,
        T: Fragment + DeserializeOwned,
    {
        self.registry.register::<R, T>(name);
        self
    }

    pub fn decode<R: ExtensibleRecord>(&self, json: &str) -> Result<Decoded<R>, DecodeError> {
        let value = serde_json::from_str::<Value>(json)?;
        self.decode_value(value)
    }

    #[instrument(level = "trace", skip_all, fields(record = R::TYPE_NAME))]
    pub fn decode_value<R: ExtensibleRecord>(&self, value: Value) -> Result<Decoded<R>, DecodeError> {
        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(DecodeError::NotAnObject {
                    record: R::TYPE_NAME,
                    found: json_type(&other),
                });
            }
        };

        let decoded = decode_object::<R>(object, &self.registry);
        match self.policy {
            DecodePolicy::Lenient => {
                decoded.log(R::TYPE_NAME, self.warn_on_dropped);
                Ok(decoded)
            }
            DecodePolicy::Strict => decoded.into_strict(),
        }
    }

    pub fn encode<T: Serialize + ?Sized>(&self, record: &T) -> serde_json::Result<String> {
        serde_json::to_string(record)
    }

    pub fn encode_value<T: Serialize + ?Sized>(&self, record: &T) -> serde_json::Result<Value> {
        serde_json::to_value(record)
    }
}
