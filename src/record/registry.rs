use crate::record::{ExtensibleRecord, Fragment};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};
use tracing::{debug, warn};

pub(crate) type FragmentConverter = fn(Value) -> serde_json::Result<Box<dyn Fragment>>;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Registration {
    pub(crate) target: &'static str,
    pub(crate) convert: FragmentConverter,
}

/// Maps custom fragment names of a record type to the type their values are converted to.
///
/// Registering a name twice replaces the earlier registration. A name that is also a declared field of the record
/// is accepted but never consulted, declared fields always win.
#[derive(Debug, Clone, Default)]
pub struct FragmentRegistry {
    records: HashMap<TypeId, HashMap<String, Registration>>,
}

impl FragmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<R, T>(&mut self, name: impl Into<String>) -> &mut Self
    where
        R: ExtensibleRecord,
        T: Fragment + DeserializeOwned,
    {
        let name = name.into();
        if R::is_declared(&name) {
            warn!(record = R::TYPE_NAME, property = %name, "⚠️ Fragment shadows a declared field and will be ignored");
        }

        let registration = Registration {
            target: type_name::<T>(),
            convert: convert::<T>,
        };
        let previous = self.records.entry(TypeId::of::<R>()).or_default().insert(name.clone(), registration);

        match previous {
            Some(previous) => debug!(record = R::TYPE_NAME, property = %name, "Fragment type changed from {} to {}", previous.target, registration.target),
            None => debug!(record = R::TYPE_NAME, property = %name, "Registered fragment as {}", registration.target),
        }
        self
    }

    pub(crate) fn lookup<R: ExtensibleRecord>(&self, name: &str) -> Option<Registration> {
        self.records.get(&TypeId::of::<R>()).and_then(|fragments| fragments.get(name)).copied()
    }
}

fn convert<T: Fragment + DeserializeOwned>(value: Value) -> serde_json::Result<Box<dyn Fragment>> {
    serde_json::from_value::<T>(value).map(|fragment| Box::new(fragment) as Box<dyn Fragment>)
}

// Readers take a snapshot and release the lock before decoding, writers copy and swap.
static GLOBAL_REGISTRY: LazyLock<RwLock<Arc<FragmentRegistry>>> = LazyLock::new(|| RwLock::new(Arc::new(FragmentRegistry::new())));

/// Registers `T` as the type of custom fragment `name` of `R` for the whole process.
///
/// Only deserializations starting after this call see the registration.
pub fn register_fragment<R, T>(name: &str)
where
    R: ExtensibleRecord,
    T: Fragment + DeserializeOwned,
{
    let mut registry = GLOBAL_REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    Arc::make_mut(&mut *registry).register::<R, T>(name);
}

/// The current process-wide registry.
pub fn global_registry() -> Arc<FragmentRegistry> {
    GLOBAL_REGISTRY.read().unwrap_or_else(PoisonError::into_inner).clone()
}
