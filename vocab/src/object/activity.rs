use chrono::{DateTime, Utc};

use crate::{ActivityType, IntransitiveActivityType, Iri, Item, ItemCollection, ObjectType};

use super::{AsObject, ObjectCore};

/// Properties every activity carries, transitive or not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityCore {
	/// Describes one or more entities that either performed or are expected to perform the activity
	pub actor: Option<Item>,
	/// Describes the indirect object, or target, of the activity
	pub target: Option<Item>,
	/// Describes the result of the activity
	pub result: Option<Item>,
	/// Describes an indirect object of the activity from which the activity is directed
	pub origin: Option<Item>,
	/// Identifies one or more objects used (or to be used) in the completion of an Activity
	pub instrument: Option<Item>,
}

crate::fields! {
	ActivityCore {
		actor: "actor" => item,
		target: "target" => item,
		result: "result" => item,
		origin: "origin" => item,
		instrument: "instrument" => item,
	}
}

/// Access to activity properties, regardless of transitivity.
pub trait AsActivity: AsObject {
	fn activity(&self) -> &ActivityCore;
	fn activity_mut(&mut self) -> &mut ActivityCore;

	/// direct object, only transitive activities have one
	fn object(&self) -> Option<&Item> { None }

	fn activity_type(&self) -> ActivityType {
		match self.object_type() {
			ObjectType::Activity(t) => t,
			// constructors only ever stamp activity types on activity structs
			_ => ActivityType::Activity,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
	pub core: ObjectCore,
	pub activity: ActivityCore,
	/// Describes the direct object of the activity
	pub object: Option<Item>,
}

impl Activity {
	pub fn new(kind: ActivityType) -> Self {
		Activity {
			core: ObjectCore::new(ObjectType::Activity(kind)),
			activity: ActivityCore::default(),
			object: None,
		}
	}

	pub fn with_id(kind: ActivityType, id: impl Into<Iri>) -> Self {
		let mut out = Self::new(kind);
		out.core.id = Some(id.into());
		out
	}

	/// shorthand for the common `actor` did `kind` to `object` case
	pub fn build(kind: ActivityType, actor: impl Into<Item>, object: impl Into<Item>) -> Self {
		let mut out = Self::new(kind);
		out.activity.actor = Some(actor.into());
		out.object = Some(object.into());
		out
	}
}

impl AsObject for Activity {
	fn core(&self) -> &ObjectCore { &self.core }
	fn core_mut(&mut self) -> &mut ObjectCore { &mut self.core }
}

impl AsActivity for Activity {
	fn activity(&self) -> &ActivityCore { &self.activity }
	fn activity_mut(&mut self) -> &mut ActivityCore { &mut self.activity }
	fn object(&self) -> Option<&Item> { self.object.as_ref() }
}

crate::fields! {
	Activity [core, activity] {
		object: "object" => item,
	}
}

/// Activity without a direct object: Arrive, Travel and the like.
#[derive(Debug, Clone, PartialEq)]
pub struct IntransitiveActivity {
	pub core: ObjectCore,
	pub activity: ActivityCore,
}

impl IntransitiveActivity {
	pub fn new(kind: IntransitiveActivityType) -> Self {
		IntransitiveActivity {
			core: ObjectCore::new(ObjectType::Activity(ActivityType::IntransitiveActivity(kind))),
			activity: ActivityCore::default(),
		}
	}
}

impl AsObject for IntransitiveActivity {
	fn core(&self) -> &ObjectCore { &self.core }
	fn core_mut(&mut self) -> &mut ObjectCore { &mut self.core }
}

impl AsActivity for IntransitiveActivity {
	fn activity(&self) -> &ActivityCore { &self.activity }
	fn activity_mut(&mut self) -> &mut ActivityCore { &mut self.activity }
}

crate::fields! { IntransitiveActivity [core, activity] {} }

/// Either `closed` timestamp, flag, or the object/link which closed the question.
#[derive(Debug, Clone, PartialEq)]
pub enum Closed {
	At(DateTime<Utc>),
	Flag(bool),
	Item(Item),
}

/// A poll. Only one of `one_of` and `any_of` should be populated.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
	pub core: ObjectCore,
	pub activity: ActivityCore,
	/// exclusive choices
	pub one_of: ItemCollection,
	/// inclusive choices
	pub any_of: ItemCollection,
	pub closed: Option<Closed>,
}

impl Question {
	pub fn new() -> Self {
		Question {
			core: ObjectCore::new(ObjectType::Activity(ActivityType::IntransitiveActivity(IntransitiveActivityType::Question))),
			activity: ActivityCore::default(),
			one_of: ItemCollection::new(),
			any_of: ItemCollection::new(),
			closed: None,
		}
	}

	pub fn is_multiple_choice(&self) -> bool {
		!self.any_of.is_empty()
	}
}

impl Default for Question {
	fn default() -> Self {
		Self::new()
	}
}

impl AsObject for Question {
	fn core(&self) -> &ObjectCore { &self.core }
	fn core_mut(&mut self) -> &mut ObjectCore { &mut self.core }
}

impl AsActivity for Question {
	fn activity(&self) -> &ActivityCore { &self.activity }
	fn activity_mut(&mut self) -> &mut ActivityCore { &mut self.activity }
}

crate::fields! {
	Question [core, activity] {
		one_of: "oneOf" => items,
		any_of: "anyOf" => items,
		closed: "closed" => closed,
	}
}
