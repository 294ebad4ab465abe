use crate::record::CustomFragments;
use c8y_macros::ExtensibleRecord;
use serde::Serialize;

/// All tenant options of one category, keyed by option key.
///
/// There are no declared fields: only keys registered for `CategoryOptions` are kept.
// API: https://cumulocity.com/api/core/#tag/Options
#[derive(Debug, Clone, PartialEq, Default, Serialize, ExtensibleRecord)]
pub struct CategoryOptions {
    #[serde(flatten)]
    key_value_pairs: CustomFragments,
}
