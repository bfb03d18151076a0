use crate::{
	BaseType, CollectionType, Field, FieldErr, Iri, LinkType, ObjectType,
	object::{
		AsObject, Object, ObjectCore,
		activity::{Activity, AsActivity, IntransitiveActivity, Question},
		actor::Actor,
		collection::{Collection, OrderedCollection, page::{CollectionPage, OrderedCollectionPage}},
		link::Link,
		place::Place,
		profile::Profile,
		relationship::Relationship,
		tombstone::Tombstone,
	},
};

/// Identity and type, exposed by every vocabulary value and by bare references.
///
/// `is_link`/`is_object` are derived from the type every time.
pub trait Base {
	fn id(&self) -> Field<&str>;
	fn base_type(&self) -> BaseType;

	fn is_link(&self) -> bool {
		matches!(self.base_type(), BaseType::Link(_))
	}

	fn is_object(&self) -> bool {
		!self.is_link()
	}
}

impl Base for Iri {
	fn id(&self) -> Field<&str> {
		Ok(self.as_str())
	}

	fn base_type(&self) -> BaseType {
		BaseType::Link(LinkType::Link)
	}
}

impl<T: AsObject> Base for T {
	fn id(&self) -> Field<&str> {
		self.core().id()
	}

	fn base_type(&self) -> BaseType {
		BaseType::Object(self.object_type())
	}
}

impl Base for Link {
	/// id if given, href otherwise: mentions are usually anonymous
	fn id(&self) -> Field<&str> {
		match &self.id {
			Some(id) => Ok(id.as_str()),
			None => self.href(),
		}
	}

	fn base_type(&self) -> BaseType {
		BaseType::Link(self.kind())
	}
}

/// Any concrete vocabulary value.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
	Object(Object),
	Link(Link),
	Activity(Activity),
	IntransitiveActivity(IntransitiveActivity),
	Question(Question),
	Actor(Actor),
	Collection(Collection),
	OrderedCollection(OrderedCollection),
	CollectionPage(CollectionPage),
	OrderedCollectionPage(OrderedCollectionPage),
	Place(Place),
	Profile(Profile),
	Relationship(Relationship),
	Tombstone(Tombstone),
}

macro_rules! each_object {
	($self:expr, $x:ident => $body:expr, $link:ident => $link_body:expr) => {
		match $self {
			Entity::Object($x) => $body,
			Entity::Activity($x) => $body,
			Entity::IntransitiveActivity($x) => $body,
			Entity::Question($x) => $body,
			Entity::Actor($x) => $body,
			Entity::Collection($x) => $body,
			Entity::OrderedCollection($x) => $body,
			Entity::CollectionPage($x) => $body,
			Entity::OrderedCollectionPage($x) => $body,
			Entity::Place($x) => $body,
			Entity::Profile($x) => $body,
			Entity::Relationship($x) => $body,
			Entity::Tombstone($x) => $body,
			Entity::Link($link) => $link_body,
		}
	};
}

pub(crate) use each_object;

impl Base for Entity {
	fn id(&self) -> Field<&str> {
		each_object!(self, x => x.id(), l => l.id())
	}

	fn base_type(&self) -> BaseType {
		each_object!(self, x => x.base_type(), l => l.base_type())
	}
}

impl Entity {
	/// shared object properties, links have none
	pub fn core(&self) -> Option<&ObjectCore> {
		each_object!(self, x => Some(x.core()), _l => None)
	}

	pub fn core_mut(&mut self) -> Option<&mut ObjectCore> {
		each_object!(self, x => Some(x.core_mut()), _l => None)
	}

	/// activity view of this value, if it is any kind of activity
	pub fn as_activity(&self) -> Option<&dyn AsActivity> {
		match self {
			Entity::Activity(x) => Some(x),
			Entity::IntransitiveActivity(x) => Some(x),
			Entity::Question(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_activity_mut(&mut self) -> Option<&mut dyn AsActivity> {
		match self {
			Entity::Activity(x) => Some(x),
			Entity::IntransitiveActivity(x) => Some(x),
			Entity::Question(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_actor(&self) -> Option<&Actor> {
		match self {
			Entity::Actor(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_link(&self) -> Option<&Link> {
		match self {
			Entity::Link(x) => Some(x),
			_ => None,
		}
	}

	/// logical total of any collection or page
	pub fn total_items(&self) -> Field<u64> {
		match self {
			Entity::Collection(x) => Ok(x.total_items),
			Entity::OrderedCollection(x) => Ok(x.total_items),
			Entity::CollectionPage(x) => Ok(x.collection.total_items),
			Entity::OrderedCollectionPage(x) => Ok(x.collection.total_items),
			_ => Err(FieldErr("totalItems")),
		}
	}

	/// members of any collection or page
	pub fn members(&self) -> Option<&ItemCollection> {
		match self {
			Entity::Collection(x) => Some(&x.items),
			Entity::OrderedCollection(x) => Some(&x.ordered_items),
			Entity::CollectionPage(x) => Some(&x.collection.items),
			Entity::OrderedCollectionPage(x) => Some(&x.collection.ordered_items),
			_ => None,
		}
	}
}

macro_rules! entity_from {
	($($variant:ident),*) => {
		$(
			impl From<$variant> for Entity {
				fn from(value: $variant) -> Self {
					Entity::$variant(value)
				}
			}

			impl From<$variant> for Item {
				fn from(value: $variant) -> Self {
					Item::Value(Box::new(Entity::$variant(value)))
				}
			}
		)*
	};
}

entity_from! {
	Object, Link, Activity, IntransitiveActivity, Question, Actor, Collection, OrderedCollection,
	CollectionPage, OrderedCollectionPage, Place, Profile, Relationship, Tombstone
}

impl From<BaseType> for Entity {
	/// empty value of the concrete shape matching given type
	fn from(t: BaseType) -> Self {
		match t {
			BaseType::Link(t) => Entity::Link(Link::new(t)),
			BaseType::Object(ObjectType::Activity(crate::ActivityType::IntransitiveActivity(crate::IntransitiveActivityType::Question))) =>
				Entity::Question(Question::new()),
			BaseType::Object(ObjectType::Activity(crate::ActivityType::IntransitiveActivity(t))) =>
				Entity::IntransitiveActivity(IntransitiveActivity::new(t)),
			BaseType::Object(ObjectType::Activity(t)) => Entity::Activity(Activity::new(t)),
			BaseType::Object(ObjectType::Actor(t)) => Entity::Actor(Actor::new(t)),
			BaseType::Object(ObjectType::Collection(CollectionType::Collection)) => Entity::Collection(Collection::new()),
			BaseType::Object(ObjectType::Collection(CollectionType::OrderedCollection)) => Entity::OrderedCollection(OrderedCollection::new()),
			BaseType::Object(ObjectType::Collection(CollectionType::CollectionPage)) => Entity::CollectionPage(CollectionPage::blank()),
			BaseType::Object(ObjectType::Collection(CollectionType::OrderedCollectionPage)) => Entity::OrderedCollectionPage(OrderedCollectionPage::blank()),
			BaseType::Object(ObjectType::Place) => Entity::Place(Place::new()),
			BaseType::Object(ObjectType::Profile) => Entity::Profile(Profile::new()),
			BaseType::Object(ObjectType::Relationship) => Entity::Relationship(Relationship::new()),
			BaseType::Object(ObjectType::Tombstone) => Entity::Tombstone(Tombstone::new()),
			BaseType::Object(t) => Entity::Object(Object::new(t)),
		}
	}
}

/// Value occupying an object or link position: a bare reference, or something embedded.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
	Reference(Iri),
	Value(Box<Entity>),
}

impl Base for Item {
	fn id(&self) -> Field<&str> {
		match self {
			Item::Reference(iri) => iri.id(),
			Item::Value(x) => x.id(),
		}
	}

	fn base_type(&self) -> BaseType {
		match self {
			Item::Reference(iri) => iri.base_type(),
			Item::Value(x) => x.base_type(),
		}
	}
}

impl Item {
	pub fn link(iri: impl Into<Iri>) -> Self {
		Item::Reference(iri.into())
	}

	pub fn is_reference(&self) -> bool {
		matches!(self, Item::Reference(_))
	}

	/// embedded value, None for references
	pub fn get(&self) -> Option<&Entity> {
		match self {
			Item::Reference(_) => None,
			Item::Value(x) => Some(x.as_ref()),
		}
	}

	pub fn get_mut(&mut self) -> Option<&mut Entity> {
		match self {
			Item::Reference(_) => None,
			Item::Value(x) => Some(x.as_mut()),
		}
	}

	pub fn extract(self) -> Option<Entity> {
		match self {
			Item::Reference(_) => None,
			Item::Value(x) => Some(*x),
		}
	}

	/// replace an embedded value with a reference to it, if it has an id
	pub fn into_reference(self) -> Option<Self> {
		match self {
			Item::Reference(_) => Some(self),
			Item::Value(x) => Some(Item::Reference(Iri::new(x.id().ok()?))),
		}
	}
}

impl From<Iri> for Item {
	fn from(value: Iri) -> Self {
		Item::Reference(value)
	}
}

impl From<Entity> for Item {
	fn from(value: Entity) -> Self {
		Item::Value(Box::new(value))
	}
}

/// Ordered sequence of items. Duplicates are allowed: removing them is up to recipient dedup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemCollection(Vec<Item>);

impl ItemCollection {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn append(&mut self, item: impl Into<Item>) {
		self.0.push(item.into());
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn first(&self) -> Option<&Item> {
		self.0.first()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Item> {
		self.0.iter()
	}

	pub fn contains_id(&self, id: &str) -> bool {
		self.0.iter().any(|x| x.id().is_ok_and(|x| x == id))
	}

	/// ids of all items, skipping the anonymous ones
	pub fn all_ids(&self) -> Vec<String> {
		self.0.iter().filter_map(|x| Some(x.id().ok()?.to_string())).collect()
	}

	pub(crate) fn retain(&mut self, f: impl FnMut(&Item) -> bool) {
		self.0.retain(f);
	}
}

impl From<Vec<Item>> for ItemCollection {
	fn from(value: Vec<Item>) -> Self {
		ItemCollection(value)
	}
}

impl FromIterator<Item> for ItemCollection {
	fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
		ItemCollection(iter.into_iter().collect())
	}
}

impl IntoIterator for ItemCollection {
	type Item = Item;
	type IntoIter = std::vec::IntoIter<Item>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a ItemCollection {
	type Item = &'a Item;
	type IntoIter = std::slice::Iter<'a, Item>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
