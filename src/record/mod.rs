//! Extensible records: a fixed set of declared fields plus an open field holding custom fragments.
//!
//! On the wire declared fields and custom fragments are siblings. While deserializing, every property is routed
//! to the declared field with the same wire name, or else to the custom fragments when its name is registered for
//! the record type in a [`FragmentRegistry`]. Anything else is dropped.

mod debug_repr;
mod decoder;
mod error;
mod fragment;
mod registry;

pub use debug_repr::debug_string;
pub(crate) use decoder::json_type;
pub use decoder::{Assignment, Decoded, RecordSeed, decode_object, deserialize_with_global_registry};
pub use error::{DecodeError, FragmentError};
pub use fragment::{CustomFragments, Fragment};
pub use registry::{FragmentRegistry, global_registry, register_fragment};

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// A record with declared fields and an open field of custom fragments.
///
/// Implemented through `#[derive(ExtensibleRecord)]`, which builds the dispatch table of
/// [`assign_declared`](ExtensibleRecord::assign_declared) from the serde attributes of the struct.
pub trait ExtensibleRecord: Default + Serialize + Send + Sync + 'static {
    const TYPE_NAME: &'static str;

    /// Wire names of the declared fields.
    const DECLARED_FIELDS: &'static [&'static str];

    fn assign_declared(&mut self, property: &str, value: Value) -> Assignment;

    fn fragments(&self) -> &CustomFragments;

    /// Raw access to the open field. Entries named after a declared field would be serialized twice, use
    /// [`insert_fragment`](ExtensibleRecord::insert_fragment) to add fragments safely.
    fn fragments_mut(&mut self) -> &mut CustomFragments;

    fn is_declared(property: &str) -> bool {
        Self::DECLARED_FIELDS.contains(&property)
    }

    fn insert_fragment<T: Fragment>(&mut self, name: &str, fragment: T) -> Result<Option<Box<dyn Fragment>>, FragmentError> {
        if Self::is_declared(name) {
            return Err(FragmentError::DeclaredField {
                record: Self::TYPE_NAME,
                property: name.to_owned(),
            });
        }
        Ok(self.fragments_mut().insert(name, fragment))
    }
}

pub(crate) fn retain_undeclared<R: ExtensibleRecord>(mut fragments: CustomFragments) -> CustomFragments {
    fragments.retain(|name| {
        let declared = R::is_declared(name);
        if declared {
            warn!(record = R::TYPE_NAME, property = name, "⚠️ Discarding custom fragment named after a declared field");
        }
        !declared
    });
    fragments
}
