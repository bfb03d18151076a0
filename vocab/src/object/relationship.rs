use crate::{Item, ObjectType};

use super::{AsObject, ObjectCore};

/// Describes how `subject` relates to `object`.
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
	pub core: ObjectCore,
	pub subject: Option<Item>,
	pub object: Option<Item>,
	pub relationship: Option<Item>,
}

impl Relationship {
	pub fn new() -> Self {
		Relationship {
			core: ObjectCore::new(ObjectType::Relationship),
			subject: None,
			object: None,
			relationship: None,
		}
	}
}

impl Default for Relationship {
	fn default() -> Self {
		Self::new()
	}
}

impl AsObject for Relationship {
	fn core(&self) -> &ObjectCore { &self.core }
	fn core_mut(&mut self) -> &mut ObjectCore { &mut self.core }
}

crate::fields! {
	Relationship [core] {
		subject: "subject" => item,
		object: "object" => item,
		relationship: "relationship" => item,
	}
}
