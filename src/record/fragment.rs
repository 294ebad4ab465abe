use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// A value stored in the open field of an extensible record.
///
/// Implemented for every owned serde type with structural equality, `serde_json::Value` included, so untyped
/// fragments are simply fragments registered as `Value`.
pub trait Fragment: Debug + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn eq_dyn(&self, other: &dyn Fragment) -> bool;
    fn clone_box(&self) -> Box<dyn Fragment>;
    fn to_json(&self) -> serde_json::Result<Value>;
}

impl<T> Fragment for T
where
    T: Debug + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn eq_dyn(&self, other: &dyn Fragment) -> bool {
        other.as_any().downcast_ref::<T>().is_some_and(|other| self == other)
    }

    fn clone_box(&self) -> Box<dyn Fragment> {
        Box::new(self.clone())
    }

    fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

impl PartialEq for dyn Fragment {
    fn eq(&self, other: &Self) -> bool {
        self.eq_dyn(other)
    }
}

impl Clone for Box<dyn Fragment> {
    fn clone(&self) -> Self {
        (**self).clone_box()
    }
}

impl Serialize for dyn Fragment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().map_err(serde::ser::Error::custom)?.serialize(serializer)
    }
}

/// The open field of an extensible record: every property that is not a declared field and has a registered type.
///
/// Serializes as a plain JSON object, records flatten it so its entries end up next to the declared fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct CustomFragments(BTreeMap<String, Box<dyn Fragment>>);

impl CustomFragments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the fragment if it exists and has type `T`.
    pub fn get<T: Fragment>(&self, name: &str) -> Option<&T> {
        self.0.get(name).and_then(|fragment| (**fragment).as_any().downcast_ref::<T>())
    }

    pub fn get_mut<T: Fragment>(&mut self, name: &str) -> Option<&mut T> {
        self.0.get_mut(name).and_then(|fragment| (**fragment).as_any_mut().downcast_mut::<T>())
    }

    pub fn get_dyn(&self, name: &str) -> Option<&dyn Fragment> {
        self.0.get(name).map(|fragment| &**fragment)
    }

    pub fn insert<T: Fragment>(&mut self, name: impl Into<String>, fragment: T) -> Option<Box<dyn Fragment>> {
        self.0.insert(name.into(), Box::new(fragment))
    }

    pub fn insert_boxed(&mut self, name: impl Into<String>, fragment: Box<dyn Fragment>) -> Option<Box<dyn Fragment>> {
        self.0.insert(name.into(), fragment)
    }

    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Fragment>> {
        self.0.remove(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Fragment)> {
        self.0.iter().map(|(name, fragment)| (name.as_str(), &**fragment))
    }

    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.0.retain(|name, _| keep(name));
    }
}
