//! # apvocab
//! > typed ActivityStreams 2.0 vocabulary and json-ld codec
//!
//! every vocabulary value is a concrete struct holding an [`object::ObjectCore`] (links aside),
//! wrapped in [`Entity`] when its type is only known at runtime. fields which may hold either a
//! bare iri or an embedded object are [`Item`]s, plural ones are [`ItemCollection`]s.
//!
//! ```rust
//! use apvocab::{Base, Entity, ObjectType};
//!
//! let item = apvocab::decode(br#"{"type":"Note","id":"https://example.net/1","name":"hi"}"#).unwrap();
//! assert_eq!(item.base_type(), apvocab::BaseType::Object(ObjectType::Note));
//! assert!(matches!(item.get(), Some(Entity::Object(_))));
//! ```
//!
//! decoding never fails on single fields: invalid iris, unknown types and malformed values are
//! logged and skipped. only invalid json, or a top-level value which is neither an object nor an
//! iri, is an error.

mod macros;
pub(crate) use macros::{strenum, fields};
pub use macros::TypeValueError;

mod field;
pub use field::{Field, FieldErr};

mod iri;
pub use iri::{Iri, IriError};

mod language;
pub use language::{NaturalLanguageValues, NIL_LANG};

mod types;
pub use types::{
	BaseType, Category, LinkType,
	ObjectType, ActorType, CollectionType, DocumentType,
	ActivityType, AcceptType, IgnoreType, IntransitiveActivityType, OfferType, RejectType,
};

mod registry;
pub use registry::Registry;

pub mod object;
pub use object::{
	AsObject, Object, ObjectCore, Source,
	activity::{Activity, ActivityCore, AsActivity, Closed, IntransitiveActivity, Question},
	actor::{Actor, Endpoints, PublicKey},
	collection::{
		Appendable, Collection, Counted, OrderedCollection,
		page::{CollectionPage, OrderedCollectionPage},
	},
	link::Link,
	place::Place,
	profile::Profile,
	relationship::Relationship,
	tombstone::Tombstone,
};

mod item;
pub use item::{Base, Entity, Item, ItemCollection};

mod codec;
pub use codec::{Codec, CodecOptions, DecodeError, EncodeError, decode, encode};

pub mod target;
pub use target::{Addressed, Dedup, DedupOptions, PUBLIC};

pub mod server;
pub use server::{Fetcher, Filter, ResolveError, Storage};

#[cfg(feature = "jsonld")]
mod jsonld;
#[cfg(feature = "jsonld")]
pub use jsonld::LD;

#[cfg(feature = "shortcuts")]
mod shortcuts;
#[cfg(feature = "shortcuts")]
pub use shortcuts::Shortcuts;
