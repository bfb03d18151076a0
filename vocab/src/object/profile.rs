use crate::{Item, ObjectType};

use super::{AsObject, ObjectCore};

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
	pub core: ObjectCore,
	/// the object this profile describes
	pub describes: Option<Item>,
}

impl Profile {
	pub fn new() -> Self {
		Profile {
			core: ObjectCore::new(ObjectType::Profile),
			describes: None,
		}
	}
}

impl Default for Profile {
	fn default() -> Self {
		Self::new()
	}
}

impl AsObject for Profile {
	fn core(&self) -> &ObjectCore { &self.core }
	fn core_mut(&mut self) -> &mut ObjectCore { &mut self.core }
}

crate::fields! {
	Profile [core] {
		describes: "describes" => item,
	}
}
