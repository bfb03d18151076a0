use chrono::{DateTime, Utc};

use crate::{BaseType, ObjectType};

use super::{AsObject, ObjectCore};

/// Placeholder left where a deleted object used to be.
#[derive(Debug, Clone, PartialEq)]
pub struct Tombstone {
	pub core: ObjectCore,
	pub former_type: Option<BaseType>,
	pub deleted: Option<DateTime<Utc>>,
}

impl Tombstone {
	pub fn new() -> Self {
		Tombstone {
			core: ObjectCore::new(ObjectType::Tombstone),
			former_type: None,
			deleted: None,
		}
	}
}

impl Default for Tombstone {
	fn default() -> Self {
		Self::new()
	}
}

impl AsObject for Tombstone {
	fn core(&self) -> &ObjectCore { &self.core }
	fn core_mut(&mut self) -> &mut ObjectCore { &mut self.core }
}

crate::fields! {
	Tombstone [core] {
		former_type: "formerType" => base_type,
		deleted: "deleted" => time,
	}
}
