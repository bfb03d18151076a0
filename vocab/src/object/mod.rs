pub mod activity;
pub mod actor;
pub mod collection;
pub mod link;
pub mod place;
pub mod profile;
pub mod relationship;
pub mod tombstone;

use chrono::{DateTime, Utc};

use crate::{Field, FieldErr, Iri, Item, ItemCollection, NaturalLanguageValues, ObjectType};

/// Properties shared by every vocabulary object (everything but links).
///
/// The type is fixed at construction, every other property can be freely assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectCore {
	pub id: Option<Iri>,
	kind: ObjectType,
	/// A simple, human-readable, plain-text name for the object. HTML markup MUST NOT be included
	pub name: NaturalLanguageValues,
	/// The content or textual representation of the Object, by default html
	pub content: NaturalLanguageValues,
	/// A natural language summarization of the object encoded as HTML
	pub summary: NaturalLanguageValues,
	/// Identifies a resource attached or related to an object that potentially requires special handling
	pub attachment: ItemCollection,
	/// Identifies one or more entities to which this object is attributed
	pub attributed_to: ItemCollection,
	/// Identifies one or more entities that represent the total population of entities for which the object can considered to be relevant
	pub audience: ItemCollection,
	/// Identifies the context within which the object exists or an activity was performed
	pub context: Option<Item>,
	pub media_type: Option<String>,
	pub end_time: Option<DateTime<Utc>>,
	/// Identifies the entity (e.g. an application) that generated the object
	pub generator: Option<Item>,
	pub icon: Option<Item>,
	pub image: Option<Item>,
	/// Indicates one or more entities for which this object is considered a response
	pub in_reply_to: ItemCollection,
	pub location: Option<Item>,
	pub preview: Option<Item>,
	pub published: Option<DateTime<Utc>>,
	pub updated: Option<DateTime<Utc>>,
	pub start_time: Option<DateTime<Utc>>,
	/// Identifies a Collection containing objects considered to be responses to this object
	pub replies: Option<Item>,
	pub likes: Option<Item>,
	pub shares: Option<Item>,
	/// One or more "tags" that have been associated with an objects. A tag can be any kind of Object
	pub tag: ItemCollection,
	pub url: Option<Item>,
	/// public primary audience
	pub to: ItemCollection,
	/// private primary audience
	pub bto: ItemCollection,
	/// public secondary audience
	pub cc: ItemCollection,
	/// private secondary audience
	pub bcc: ItemCollection,
	/// xsd:duration, kept verbatim (e.g. "PT5S")
	pub duration: Option<String>,
	/// what the content was generated from, for clients wanting to edit it back
	pub source: Option<Source>,
	pub sensitive: Option<bool>,
	pub quote_url: Option<Item>,
}

impl ObjectCore {
	pub fn new(kind: ObjectType) -> Self {
		ObjectCore {
			id: None,
			kind,
			name: NaturalLanguageValues::new(),
			content: NaturalLanguageValues::new(),
			summary: NaturalLanguageValues::new(),
			attachment: ItemCollection::new(),
			attributed_to: ItemCollection::new(),
			audience: ItemCollection::new(),
			context: None,
			media_type: None,
			end_time: None,
			generator: None,
			icon: None,
			image: None,
			in_reply_to: ItemCollection::new(),
			location: None,
			preview: None,
			published: None,
			updated: None,
			start_time: None,
			replies: None,
			likes: None,
			shares: None,
			tag: ItemCollection::new(),
			url: None,
			to: ItemCollection::new(),
			bto: ItemCollection::new(),
			cc: ItemCollection::new(),
			bcc: ItemCollection::new(),
			duration: None,
			source: None,
			sensitive: None,
			quote_url: None,
		}
	}

	pub fn with_id(kind: ObjectType, id: impl Into<Iri>) -> Self {
		let mut out = Self::new(kind);
		out.id = Some(id.into());
		out
	}

	pub fn kind(&self) -> ObjectType {
		self.kind
	}

	pub fn id(&self) -> Field<&str> {
		self.id.as_ref().map(|x| x.as_str()).ok_or(FieldErr("id"))
	}
}

crate::fields! {
	ObjectCore {
		id: "id" => id,
		name: "name" => nlv,
		content: "content" => nlv,
		summary: "summary" => nlv,
		attachment: "attachment" => items,
		attributed_to: "attributedTo" => items,
		audience: "audience" => items,
		context: "context" => item,
		media_type: "mediaType" => str,
		end_time: "endTime" => time,
		generator: "generator" => item,
		icon: "icon" => item,
		image: "image" => item,
		in_reply_to: "inReplyTo" => items,
		location: "location" => item,
		preview: "preview" => item,
		published: "published" => time,
		updated: "updated" => time,
		start_time: "startTime" => time,
		replies: "replies" => item,
		likes: "likes" => item,
		shares: "shares" => item,
		tag: "tag" => items,
		url: "url" => item,
		to: "to" => items,
		bto: "bto" => items,
		cc: "cc" => items,
		bcc: "bcc" => items,
		duration: "duration" => str,
		source: "source" => source,
		sensitive: "sensitive" => bool,
		quote_url: "quoteUrl" => item,
	}
}

/// Content as originally authored, before being rendered into `content`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Source {
	pub content: NaturalLanguageValues,
	pub media_type: Option<String>,
}

crate::fields! {
	Source {
		content: "content" => nlv,
		media_type: "mediaType" => str,
	}
}

/// Read access to the shared object properties of a concrete vocabulary struct.
pub trait AsObject {
	fn core(&self) -> &ObjectCore;
	fn core_mut(&mut self) -> &mut ObjectCore;

	fn object_type(&self) -> ObjectType {
		self.core().kind()
	}
}

/// Plain object: Article, Document, Event, Note, and every type without properties of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
	pub core: ObjectCore,
}

impl Object {
	pub fn new(kind: ObjectType) -> Self {
		Object { core: ObjectCore::new(kind) }
	}

	pub fn with_id(kind: ObjectType, id: impl Into<Iri>) -> Self {
		Object { core: ObjectCore::with_id(kind, id) }
	}
}

impl AsObject for Object {
	fn core(&self) -> &ObjectCore { &self.core }
	fn core_mut(&mut self) -> &mut ObjectCore { &mut self.core }
}

crate::fields! { Object [core] {} }
