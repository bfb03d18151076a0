mod reader;
mod writer;

pub use reader::Reader;
pub use writer::InsertValue;

use serde_json::{Map, Value};

use crate::{
	ActivityType, BaseType, Category, CollectionType, Entity, IntransitiveActivityType, Iri, IriError, Item,
	Registry, item::each_object,
};

/// Two way mapping between a vocabulary struct and the keys of a json object.
///
/// Implemented through the `fields!` table next to every struct.
pub trait FieldSet {
	fn read_fields(&mut self, r: &Reader);
	fn write_fields(&self, map: &mut Map<String, Value>);
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
	#[error("invalid json: {0}")]
	Syntax(#[from] serde_json::Error),

	#[error("invalid reference: {0}")]
	InvalidIri(#[from] IriError),

	#[error("expected object or iri, got {0}")]
	UnexpectedValue(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
	#[error("failed serializing json: {0}")]
	Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
	/// drop reference strings which are not absolute iris
	pub validate_iris: bool,
	/// embedded objects nested deeper than this are kept as references
	pub max_depth: usize,
}

impl Default for CodecOptions {
	fn default() -> Self {
		CodecOptions { validate_iris: true, max_depth: 32 }
	}
}

/// Decoder and encoder of json-ld documents, backed by a type registry.
///
/// Holds no mutable state: one codec can serve any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Codec<'r> {
	registry: &'r Registry,
	options: CodecOptions,
}

impl Default for Codec<'static> {
	fn default() -> Self {
		Codec::new(Registry::global())
	}
}

impl<'r> Codec<'r> {
	pub fn new(registry: &'r Registry) -> Self {
		Self::with_options(registry, CodecOptions::default())
	}

	pub fn with_options(registry: &'r Registry, options: CodecOptions) -> Self {
		Codec { registry, options }
	}

	pub fn registry(&self) -> &'r Registry {
		self.registry
	}

	pub fn options(&self) -> &CodecOptions {
		&self.options
	}

	/// decode a whole document. Malformed fields inside an object read as absent, but the
	/// document itself must be either an object or a string: a top level string failing iri
	/// validation is [`DecodeError::InvalidIri`], while arrays, numbers, bools and null are
	/// [`DecodeError::UnexpectedValue`]. Invalid json is [`DecodeError::Syntax`].
	pub fn decode(&self, bytes: &[u8]) -> Result<Item, DecodeError> {
		let value : Value = serde_json::from_slice(bytes)?;
		self.decode_value(&value)
	}

	/// decode a document expected to be of given type, used when it carries no `type` at all
	pub fn decode_as(&self, bytes: &[u8], fallback: BaseType) -> Result<Item, DecodeError> {
		let value : Value = serde_json::from_slice(bytes)?;
		self.top_level(&value, Some(fallback))
	}

	pub fn decode_value(&self, value: &Value) -> Result<Item, DecodeError> {
		self.top_level(value, None)
	}

	fn top_level(&self, value: &Value, fallback: Option<BaseType>) -> Result<Item, DecodeError> {
		match value {
			Value::String(x) => Ok(Item::Reference(self.parse_iri(x)?)),
			Value::Object(map) => Ok(Item::Value(Box::new(self.entity(map, 0, fallback)))),
			Value::Array(_) => Err(DecodeError::UnexpectedValue("array")),
			Value::Number(_) => Err(DecodeError::UnexpectedValue("number")),
			Value::Bool(_) => Err(DecodeError::UnexpectedValue("bool")),
			Value::Null => Err(DecodeError::UnexpectedValue("null")),
		}
	}

	pub fn encode(&self, item: &Item) -> Result<Vec<u8>, EncodeError> {
		Ok(serde_json::to_vec(&item.to_json())?)
	}

	pub fn encode_pretty(&self, item: &Item) -> Result<Vec<u8>, EncodeError> {
		Ok(serde_json::to_vec_pretty(&item.to_json())?)
	}

	pub(crate) fn parse_iri(&self, value: &str) -> Result<Iri, IriError> {
		if self.options.validate_iris {
			Iri::parse(value)
		} else if value.is_empty() {
			Err(IriError::Empty)
		} else {
			Ok(Iri::new(value))
		}
	}

	/// single json value in a reference position
	pub(crate) fn item(&self, value: &Value, depth: usize) -> Option<Item> {
		match value {
			Value::String(x) => match self.parse_iri(x) {
				Ok(iri) => Some(Item::Reference(iri)),
				Err(e) => {
					tracing::debug!("dropping reference: {e}");
					None
				},
			},
			Value::Object(map) if depth > self.options.max_depth => {
				match map.get("id").and_then(Value::as_str).map(|x| self.parse_iri(x)) {
					Some(Ok(id)) => {
						tracing::warn!("object nested too deep, keeping only its id {id}");
						Some(Item::Reference(id))
					},
					Some(Err(e)) => {
						tracing::warn!("object nested too deep and its id is unusable, dropping it: {e}");
						None
					},
					None => {
						tracing::warn!("anonymous object nested too deep, dropping it");
						None
					},
				}
			},
			Value::Object(map) => Some(Item::Value(Box::new(self.entity(map, depth, None)))),
			_ => None,
		}
	}

	fn entity(&self, map: &Map<String, Value>, depth: usize, fallback: Option<BaseType>) -> Entity {
		let mut entity = match type_name(self.registry, map) {
			Some(name) => self.registry.construct_or(name, fallback.unwrap_or_else(|| sniff(map))),
			None => Entity::from(fallback.unwrap_or(Category::Object.generic())),
		};
		let reader = Reader::new(self, map, depth);
		each_object!(&mut entity, x => x.read_fields(&reader), l => l.read_fields(&reader));
		entity
	}
}

/// `type` may also be an array: first recognized name wins, first name at all otherwise
fn type_name<'a>(registry: &Registry, map: &'a Map<String, Value>) -> Option<&'a str> {
	match map.get("type")? {
		Value::String(x) if x.is_empty() => None,
		Value::String(x) => Some(x.as_str()),
		Value::Array(arr) => {
			let mut names = arr.iter().filter_map(Value::as_str).filter(|x| !x.is_empty());
			let first = names.clone().next();
			names.find(|x| registry.lookup(x).is_some()).or(first)
		},
		_ => None,
	}
}

/// best guess for a type we don't know, based on which properties are present
fn sniff(map: &Map<String, Value>) -> BaseType {
	let has = |k: &str| map.contains_key(k);
	if has("orderedItems") {
		if has("partOf") { CollectionType::OrderedCollectionPage.into() } else { CollectionType::OrderedCollection.into() }
	} else if has("items") || has("totalItems") {
		if has("partOf") { CollectionType::CollectionPage.into() } else { Category::Collection.generic() }
	} else if has("actor") {
		if has("object") {
			Category::Activity.generic()
		} else {
			ActivityType::IntransitiveActivity(IntransitiveActivityType::IntransitiveActivity).into()
		}
	} else if has("inbox") || has("outbox") {
		Category::Actor.generic()
	} else if has("href") {
		Category::Link.generic()
	} else {
		Category::Object.generic()
	}
}

/// decode with the process-wide registry and default options
pub fn decode(bytes: &[u8]) -> Result<Item, DecodeError> {
	Codec::default().decode(bytes)
}

/// encode with default options
pub fn encode(item: &Item) -> Result<Vec<u8>, EncodeError> {
	Codec::default().encode(item)
}

#[cfg(test)]
mod test {
	use chrono::{TimeZone, Utc};
	use serde_json::json;

	use super::*;
	use crate::{
		ActorType, Base, DocumentType, LinkType, NaturalLanguageValues, NIL_LANG, ObjectType,
		object::{
			AsObject, Object, Source,
			activity::{Activity, AsActivity, Closed, IntransitiveActivity, Question},
			actor::{Actor, Endpoints, PublicKey},
			collection::{Appendable, Collection, Counted, OrderedCollection, page::{CollectionPage, OrderedCollectionPage}},
			link::Link,
			place::Place,
			profile::Profile,
			relationship::Relationship,
			tombstone::Tombstone,
		},
	};

	fn decode_json(value: serde_json::Value) -> Item {
		Codec::default().decode_value(&value).unwrap()
	}

	fn round_trip(item: Item) {
		let codec = Codec::default();
		let bytes = codec.encode(&item).unwrap();
		let back = codec.decode(&bytes).unwrap();
		assert_eq!(back, item, "mismatch after encoding as {}", String::from_utf8_lossy(&bytes));
	}

	fn iri(path: &str) -> Iri {
		Iri::new(format!("https://example.net/{path}"))
	}

	#[test]
	fn plain_note_decodes_with_sentinel_name() {
		let item = decode_json(json!({"type": "Note", "id": "https://ex/1", "name": "hi"}));
		let Some(Entity::Object(note)) = item.get() else { panic!("expected plain object, got {item:?}") };
		assert_eq!(note.object_type(), ObjectType::Note);
		assert_eq!(note.id(), Ok("https://ex/1"));
		assert_eq!(note.core.name.get(NIL_LANG), Some("hi"));
		assert_eq!(note.core.name.len(), 1);
	}

	#[test]
	fn create_holds_reference_actor_and_embedded_object() {
		let item = decode_json(json!({
			"type": "Create",
			"actor": "https://ex/a",
			"object": {"type": "Note", "id": "https://ex/2"}
		}));
		let Some(Entity::Activity(create)) = item.get() else { panic!("expected activity, got {item:?}") };
		assert_eq!(create.activity_type(), ActivityType::Create);
		assert_eq!(create.activity.actor, Some(Item::link("https://ex/a")));
		let object = create.object.as_ref().and_then(Item::get).expect("object should be embedded");
		assert_eq!(object.base_type(), BaseType::Object(ObjectType::Note));
		assert_eq!(object.id(), Ok("https://ex/2"));
	}

	#[test]
	fn bare_string_is_a_reference() {
		let item = decode_json(json!("https://ex/3"));
		assert_eq!(item, Item::link("https://ex/3"));
		assert!(item.is_link());
		assert!(!item.is_object());

		let item = decode_json(json!({"type": "Note", "inReplyTo": "https://ex/3"}));
		let reply = item.get().and_then(Entity::core).unwrap().in_reply_to.first().cloned();
		assert_eq!(reply, Some(Item::link("https://ex/3")));
	}

	#[test]
	fn untyped_ordered_collection_tolerates_partial_items() {
		let bytes = br#"{"totalItems":2,"orderedItems":[{"type":"Note","id":"1"}]}"#;
		let item = Codec::default().decode_as(bytes, CollectionType::OrderedCollection.into()).unwrap();
		let Some(Entity::OrderedCollection(c)) = item.get() else { panic!("expected ordered collection, got {item:?}") };
		assert_eq!(c.total_items, 2);
		assert_eq!(c.ordered_items.len(), 1);
		assert_eq!(c.ordered_items.first().and_then(|x| x.id().ok()), Some("1"));
		assert!(!c.is_complete());
	}

	#[test]
	fn missing_type_means_object() {
		let item = decode_json(json!({"id": "https://ex/4", "content": "plain"}));
		assert_eq!(item.base_type(), BaseType::Object(ObjectType::Object));
	}

	#[test]
	fn unknown_types_keep_ancestor_fields() {
		let item = decode_json(json!({
			"type": "ChatMessageReaction",
			"actor": "https://ex/a",
			"object": "https://ex/n",
			"to": ["https://ex/b"]
		}));
		let Some(Entity::Activity(activity)) = item.get() else { panic!("expected activity, got {item:?}") };
		assert_eq!(activity.activity_type(), ActivityType::Activity);
		assert_eq!(activity.object, Some(Item::link("https://ex/n")));
		assert_eq!(activity.core.to.len(), 1);

		let item = decode_json(json!({"type": "Bot", "inbox": "https://ex/bot/inbox"}));
		assert!(matches!(item.get(), Some(Entity::Actor(_))));

		let item = decode_json(json!({"type": "Emoji", "href": "https://ex/emoji.png"}));
		assert_eq!(item.base_type(), BaseType::Link(LinkType::Link));

		let item = decode_json(json!({"type": "Wiggle", "actor": "https://ex/a"}));
		assert!(matches!(item.get(), Some(Entity::IntransitiveActivity(_))));
	}

	#[test]
	fn type_arrays_pick_first_known_name() {
		let item = decode_json(json!({"type": ["ChatMessage", "Note"], "id": "https://ex/5"}));
		assert_eq!(item.base_type(), BaseType::Object(ObjectType::Note));
	}

	#[test]
	fn malformed_fields_are_dropped() {
		let item = decode_json(json!({
			"type": "Note",
			"id": "https://ex/6",
			"attributedTo": 12,
			"context": "not an iri",
			"published": "yesterday",
			"to": ["https://ex/b", 3, null, "also not an iri", {"type": "Person", "id": "https://ex/c"}],
			"sensitive": "yes"
		}));
		let core = item.get().and_then(Entity::core).unwrap();
		assert!(core.attributed_to.is_empty());
		assert!(core.context.is_none());
		assert!(core.published.is_none());
		assert!(core.sensitive.is_none());
		assert_eq!(core.to.all_ids(), vec!["https://ex/b".to_string(), "https://ex/c".to_string()]);
	}

	#[test]
	fn invalid_iris_pass_when_validation_is_off() {
		let registry = Registry::new();
		let codec = Codec::with_options(&registry, CodecOptions { validate_iris: false, ..Default::default() });
		let item = codec.decode_value(&json!({"type": "Note", "context": "tag:thread"})).unwrap();
		assert_eq!(item.get().and_then(Entity::core).unwrap().context, Some(Item::link("tag:thread")));
		let item = codec.decode_value(&json!({"type": "Note", "context": "thread"})).unwrap();
		assert_eq!(item.get().and_then(Entity::core).unwrap().context, Some(Item::link("thread")));
	}

	#[test]
	fn single_valued_fields_keep_first_of_many() {
		let item = decode_json(json!({
			"type": "Like",
			"actor": [42, "https://ex/a", "https://ex/b"],
			"object": "https://ex/n"
		}));
		let activity = item.get().and_then(Entity::as_activity).unwrap();
		assert_eq!(activity.activity().actor, Some(Item::link("https://ex/a")));
	}

	#[test]
	fn language_maps_are_merged() {
		let item = decode_json(json!({
			"type": "Note",
			"content": "<p>ciao</p>",
			"contentMap": {"it": "<p>ciao</p>", "en": "<p>hello</p>"}
		}));
		let core = item.get().and_then(Entity::core).unwrap();
		assert_eq!(core.content.len(), 3);
		assert_eq!(core.content.get("en"), Some("<p>hello</p>"));
		assert_eq!(core.content.get(NIL_LANG), Some("<p>ciao</p>"));
	}

	#[test]
	fn context_is_ignored() {
		let item = decode_json(json!({
			"@context": ["https://www.w3.org/ns/activitystreams", {"sensitive": "as:sensitive"}],
			"type": "Note",
			"sensitive": true
		}));
		assert_eq!(item.get().and_then(Entity::core).unwrap().sensitive, Some(true));
		let encoded = item.to_json();
		assert!(encoded.get("@context").is_none());
	}

	#[test]
	fn deep_nesting_is_cut_to_references() {
		let registry = Registry::new();
		let codec = Codec::with_options(&registry, CodecOptions { max_depth: 1, ..Default::default() });
		let item = codec.decode_value(&json!({
			"type": "Announce",
			"object": {
				"type": "Create",
				"id": "https://ex/create",
				"object": {"type": "Note", "id": "https://ex/deep"}
			}
		})).unwrap();
		let announce = item.get().and_then(Entity::as_activity).unwrap();
		let create = announce.object().and_then(Item::get).and_then(Entity::as_activity).unwrap();
		assert_eq!(create.object(), Some(&Item::link("https://ex/deep")));
	}

	#[test]
	fn deep_objects_with_invalid_id_are_dropped() {
		let registry = Registry::new();
		let codec = Codec::with_options(&registry, CodecOptions { max_depth: 0, ..Default::default() });
		let item = codec.decode_value(&json!({
			"type": "Note",
			"inReplyTo": [
				{"type": "Note", "id": "not an iri"},
				{"type": "Note", "id": "https://ex/parent"}
			]
		})).unwrap();
		let core = item.get().and_then(Entity::core).unwrap();
		assert_eq!(core.in_reply_to.len(), 1);
		assert_eq!(core.in_reply_to.first(), Some(&Item::link("https://ex/parent")));

		let back = codec.decode(&codec.encode(&item).unwrap()).unwrap();
		assert_eq!(back, item);
	}

	#[test]
	fn top_level_errors() {
		let codec = Codec::default();
		assert!(matches!(codec.decode(b"{\"type\": "), Err(DecodeError::Syntax(_))));
		assert!(matches!(codec.decode(b"[1, 2]"), Err(DecodeError::UnexpectedValue("array"))));
		assert!(matches!(codec.decode(b"\"nope\""), Err(DecodeError::InvalidIri(_))));
	}

	#[test]
	fn single_language_entry_collapses_on_encode() {
		let mut note = Object::new(ObjectType::Note);
		note.core.name = NaturalLanguageValues::single("hi");
		note.core.summary = [("en", "cw"), ("it", "avviso")].into_iter().collect();
		let json = Item::from(note).to_json();
		assert_eq!(json["name"], json!("hi"));
		assert_eq!(json["summary"].as_object().map(|x| x.len()), Some(2));
		assert!(json.get("content").is_none());
	}

	#[test]
	fn collections_always_write_total() {
		let json = Item::from(Collection::with_id("https://ex/empty")).to_json();
		assert_eq!(json, json!({"type": "Collection", "id": "https://ex/empty", "totalItems": 0}));
	}

	fn populated_core(o: &mut impl AsObject) {
		let t = Utc.with_ymd_and_hms(2024, 3, 14, 15, 9, 26).unwrap();
		let core = o.core_mut();
		core.id = Some(iri("objects/1"));
		core.name = NaturalLanguageValues::single("a name");
		core.content = [("en", "<p>hello</p>"), ("it", "<p>ciao</p>")].into_iter().collect();
		core.attributed_to.append(iri("users/alice"));
		core.to.append(Iri::new(crate::target::PUBLIC));
		core.cc.append(iri("users/alice/followers"));
		core.tag.append(Link::to_href(LinkType::Mention, iri("users/bob")));
		core.published = Some(t);
		core.updated = Utc.timestamp_millis_opt(1_710_428_966_500).single();
		core.media_type = Some("text/html".into());
		core.source = Some(Source { content: "hello".into(), media_type: Some("text/markdown".into()) });
		core.sensitive = Some(false);
		core.duration = Some("PT5S".into());
		let mut image = Object::new(ObjectType::Document(DocumentType::Image));
		image.core.url = Some(iri("media/1.png").into());
		core.image = Some(image.into());
	}

	#[test]
	fn objects_round_trip() {
		let mut note = Object::new(ObjectType::Note);
		populated_core(&mut note);
		round_trip(note.into());
	}

	#[test]
	fn links_round_trip() {
		let mut link = Link::to_href(LinkType::Link, iri("media/2.png"));
		link.id = Some(iri("links/2"));
		link.rel = vec!["preview".into(), "thumbnail".into()];
		link.media_type = Some("image/png".into());
		link.hreflang = Some("en".into());
		link.height = Some(480);
		link.width = Some(640);
		link.name = "thumb".into();
		round_trip(link.into());
	}

	#[test]
	fn activities_round_trip() {
		let mut like = Activity::build(ActivityType::Like, iri("users/alice"), iri("objects/1"));
		populated_core(&mut like);
		like.activity.target = Some(iri("collections/liked").into());
		like.activity.instrument = Some(iri("apps/1").into());
		round_trip(like.into());

		let mut travel = IntransitiveActivity::new(IntransitiveActivityType::Travel);
		travel.activity.actor = Some(iri("users/alice").into());
		let mut home = Place::new();
		home.core.id = Some(iri("places/home"));
		travel.activity.origin = Some(home.into());
		round_trip(travel.into());
	}

	#[test]
	fn questions_round_trip() {
		let mut poll = Question::new();
		populated_core(&mut poll);
		let mut option = Object::new(ObjectType::Note);
		option.core.name = "yes".into();
		poll.one_of.append(option);
		poll.closed = Some(Closed::At(Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap()));
		round_trip(poll.clone().into());
		poll.closed = Some(Closed::Flag(true));
		round_trip(poll.clone().into());
		poll.closed = Some(Closed::Item(iri("users/mod").into()));
		round_trip(poll.into());
	}

	#[test]
	fn actors_round_trip() {
		let mut actor = Actor::with_id(ActorType::Service, iri("users/bot"));
		actor.preferred_username = "bot".into();
		actor.inbox = Some(iri("users/bot/inbox").into());
		actor.outbox = Some(iri("users/bot/outbox").into());
		actor.followers = Some(iri("users/bot/followers").into());
		actor.manually_approves_followers = Some(true);
		actor.endpoints = Some(Endpoints { shared_inbox: Some(iri("inbox").into()), ..Default::default() });
		actor.public_key = Some(PublicKey {
			id: Some(iri("users/bot#main-key")),
			owner: Some(iri("users/bot")),
			public_key_pem: "-----BEGIN PUBLIC KEY-----\n-----END PUBLIC KEY-----".into(),
		});
		actor.moved_to = Some(Iri::new("https://example.org/users/bot").into());
		round_trip(actor.into());
	}

	#[test]
	fn collections_and_pages_round_trip() {
		let mut outbox = OrderedCollection::with_id(iri("users/alice/outbox"));
		outbox.first = Some(iri("users/alice/outbox?page=1").into());
		outbox.append(Activity::build(ActivityType::Announce, iri("users/alice"), iri("objects/9")).into());
		round_trip(outbox.clone().into());

		let mut page = OrderedCollectionPage::new(&outbox);
		page.core_mut().id = Some(iri("users/alice/outbox?page=1"));
		page.start_index = Some(0);
		page.next = Some(iri("users/alice/outbox?page=2").into());
		page.append_to(&mut outbox, iri("objects/10").into());
		round_trip(page.into());

		let mut followers = Collection::with_id(iri("users/alice/followers"));
		followers.append(iri("users/bob").into());
		let mut page = CollectionPage::new(&followers);
		page.append_to(&mut followers, iri("users/carl").into());
		round_trip(followers.into());
		round_trip(page.into());
	}

	#[test]
	fn minor_types_round_trip() {
		let mut place = Place::new();
		place.latitude = Some(45.5);
		place.longitude = Some(-73.25);
		place.units = Some("m".into());
		round_trip(place.into());

		let mut profile = Profile::new();
		profile.describes = Some(iri("users/alice").into());
		round_trip(profile.into());

		let mut rel = Relationship::new();
		rel.subject = Some(iri("users/alice").into());
		rel.object = Some(iri("users/bob").into());
		rel.relationship = Some(Iri::new("http://purl.org/vocab/relationship/acquaintanceOf").into());
		round_trip(rel.into());

		let mut gone = Tombstone::new();
		gone.core.id = Some(iri("objects/1"));
		gone.former_type = Some(ObjectType::Note.into());
		gone.deleted = Some(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());
		round_trip(gone.into());
	}
}
