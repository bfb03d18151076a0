mod link;
pub use link::LinkType;

mod object;
pub use object::{ObjectType, ActorType, CollectionType, DocumentType};

mod activity;
pub use activity::{
	ActivityType, AcceptType, IgnoreType, IntransitiveActivityType, OfferType, RejectType,
};

crate::strenum! {
	pub enum BaseType {
		;
		Object(ObjectType),
		Link(LinkType)
	};
}

impl From<ObjectType> for BaseType {
	fn from(value: ObjectType) -> Self {
		BaseType::Object(value)
	}
}

impl From<LinkType> for BaseType {
	fn from(value: LinkType) -> Self {
		BaseType::Link(value)
	}
}

impl From<ActivityType> for BaseType {
	fn from(value: ActivityType) -> Self {
		BaseType::Object(ObjectType::Activity(value))
	}
}

impl From<ActorType> for BaseType {
	fn from(value: ActorType) -> Self {
		BaseType::Object(ObjectType::Actor(value))
	}
}

impl From<CollectionType> for BaseType {
	fn from(value: CollectionType) -> Self {
		BaseType::Object(ObjectType::Collection(value))
	}
}

impl From<DocumentType> for BaseType {
	fn from(value: DocumentType) -> Self {
		BaseType::Object(ObjectType::Document(value))
	}
}

/// Broad family a vocabulary type belongs to. Every family has a generic member that unknown
/// subtypes degrade to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
	Object,
	Link,
	Activity,
	Actor,
	Collection,
}

impl Category {
	pub fn of(t: BaseType) -> Self {
		match t {
			BaseType::Link(_) => Category::Link,
			BaseType::Object(ObjectType::Activity(_)) => Category::Activity,
			BaseType::Object(ObjectType::Actor(_)) => Category::Actor,
			BaseType::Object(ObjectType::Collection(_)) => Category::Collection,
			BaseType::Object(_) => Category::Object,
		}
	}

	/// type used when a name is unknown but its shape says it belongs to this category.
	/// actors have no abstract base type in the vocabulary, Person stands in for it
	pub fn generic(self) -> BaseType {
		match self {
			Category::Object => ObjectType::Object.into(),
			Category::Link => LinkType::Link.into(),
			Category::Activity => ActivityType::Activity.into(),
			Category::Actor => ActorType::Person.into(),
			Category::Collection => CollectionType::Collection.into(),
		}
	}

	pub fn all() -> [Category; 5] {
		[Category::Object, Category::Link, Category::Activity, Category::Actor, Category::Collection]
	}
}

impl AsRef<str> for Category {
	fn as_ref(&self) -> &str {
		match self {
			Category::Object => "Object",
			Category::Link => "Link",
			Category::Activity => "Activity",
			Category::Actor => "Actor",
			Category::Collection => "Collection",
		}
	}
}

impl TryFrom<&str> for Category {
	type Error = crate::macros::TypeValueError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Category::all()
			.into_iter()
			.find(|c| c.as_ref().eq_ignore_ascii_case(value))
			.ok_or(crate::macros::TypeValueError)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn nested_types_parse_from_their_leaf_name() {
		assert_eq!(
			BaseType::try_from("TentativeAccept").unwrap(),
			BaseType::Object(ObjectType::Activity(ActivityType::Accept(AcceptType::TentativeAccept)))
		);
		assert_eq!(
			BaseType::try_from("Question").unwrap(),
			BaseType::Object(ObjectType::Activity(ActivityType::IntransitiveActivity(IntransitiveActivityType::Question)))
		);
		assert_eq!(BaseType::try_from("Mention").unwrap(), BaseType::Link(LinkType::Mention));
		assert!(BaseType::try_from("note").is_err());
	}

	#[test]
	fn variants_flatten_every_table() {
		let all = BaseType::variants();
		assert!(all.contains(&BaseType::Object(ObjectType::Document(DocumentType::Video))));
		assert!(all.contains(&BaseType::Object(ObjectType::Collection(CollectionType::OrderedCollectionPage))));
		for t in &all {
			assert_eq!(BaseType::try_from(t.as_ref()).unwrap(), *t, "{t} does not round trip");
		}
	}

	#[test]
	fn categories_follow_nesting() {
		assert_eq!(Category::of(ActivityType::Ignore(IgnoreType::Block).into()), Category::Activity);
		assert_eq!(Category::of(ActorType::Service.into()), Category::Actor);
		assert_eq!(Category::of(DocumentType::Image.into()), Category::Object);
		assert_eq!(Category::of(LinkType::Link.into()), Category::Link);
		for c in Category::all() {
			assert_eq!(Category::of(c.generic()), c);
		}
	}
}
