use crate::codec::DecodePolicy;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct CodecConfig {
    decoding: Decoding,
}

impl CodecConfig {
    /// Loads the configuration from an optional `c8y_model` file in the working directory and `C8Y_MODEL_*`
    /// environment variables, e.g. `C8Y_MODEL_DECODING__POLICY=strict`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::with_name("c8y_model").required(false))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()
    }

    /// Like [`load`](CodecConfig::load), but the file at `path` must exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::from(path.as_ref()))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("decoding.policy", "lenient")?
            .set_default("decoding.inherit_global_fragments", true)?
            .set_default("decoding.warn_on_dropped", false)
    }

    fn environment() -> Environment {
        Environment::with_prefix("C8Y_MODEL")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    pub fn decoding(&self) -> &Decoding {
        &self.decoding
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Decoding {
    policy: DecodePolicy,
    inherit_global_fragments: bool,
    warn_on_dropped: bool,
}

impl Decoding {
    pub fn policy(&self) -> DecodePolicy {
        self.policy
    }

    /// Whether codecs built from this configuration start with the registrations of the global registry.
    pub fn inherit_global_fragments(&self) -> bool {
        self.inherit_global_fragments
    }

    pub fn warn_on_dropped(&self) -> bool {
        self.warn_on_dropped
    }
}

#[cfg(test)]
pub struct CodecConfigBuilder {
    config: CodecConfig,
}

#[cfg(test)]
impl CodecConfigBuilder {
    pub fn new() -> Self {
        CodecConfigBuilder {
            config: CodecConfig {
                decoding: Decoding {
                    policy: DecodePolicy::Lenient,
                    inherit_global_fragments: true,
                    warn_on_dropped: false,
                },
            },
        }
    }

    pub fn policy(mut self, policy: DecodePolicy) -> Self {
        self.config.decoding.policy = policy;
        self
    }

    pub fn inherit_global_fragments(mut self, inherit: bool) -> Self {
        self.config.decoding.inherit_global_fragments = inherit;
        self
    }

    pub fn build(self) -> CodecConfig {
        self.config
    }
}
