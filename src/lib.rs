//! Data model of the Cumulocity IoT REST API.
//!
//! Most resources can be extended with custom fragments: extra top-level properties next to the declared fields,
//! such as `c8y_Position` on an event. Only fragments that are registered for a record type are kept when
//! deserializing, together with the type they are converted to.
//!
//! ```
//! use c8y_model::model::Event;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! #[c8y_model::register_fragment(Event, "c8y_Position")]
//! struct Position {
//!     lat: f64,
//!     lng: f64,
//! }
//!
//! fn main() -> Result<(), serde_json::Error> {
//!     let event: Event = serde_json::from_str(r#"{"type": "c8y_LocationUpdate", "c8y_Position": {"lat": 51.2, "lng": 6.1}, "c8y_Other": 1}"#)?;
//!
//!     assert_eq!(event.custom_fragments().get::<Position>("c8y_Position"), Some(&Position { lat: 51.2, lng: 6.1 }));
//!     assert!(!event.custom_fragments().contains_key("c8y_Other"));
//!     Ok(())
//! }
//! ```
//!
//! [`register_fragment`] registers the type before `main` runs through a `#[ctor::ctor]` function, so crates using
//! it depend on `ctor` as well. Without the attribute, call `Event::register_fragment::<Position>("c8y_Position")`.
//!
//! [`Codec`] decodes against its own registry instead of the global one and reports what it skipped.

pub mod codec;
pub mod codec_config;
pub mod model;
pub mod record;

pub use c8y_macros::register_fragment;
pub use codec::{Codec, DecodePolicy};
pub use codec_config::{CodecConfig, Decoding};
pub use record::{CustomFragments, DecodeError, Decoded, ExtensibleRecord, Fragment, FragmentError, FragmentRegistry};
