use std::collections::HashMap;
use std::sync::OnceLock;

use crate::{BaseType, Category, Entity};

/// Table of every known type name, grouped by category.
///
/// Built once and never mutated afterwards, so a single instance can be shared by any number
/// of concurrent decoders.
#[derive(Debug, Clone)]
pub struct Registry {
	by_name: HashMap<&'static str, BaseType>,
	by_category: HashMap<Category, Vec<BaseType>>,
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

impl Default for Registry {
	fn default() -> Self {
		Self::new()
	}
}

impl Registry {
	pub fn new() -> Self {
		let mut by_name = HashMap::new();
		let mut by_category : HashMap<Category, Vec<BaseType>> = HashMap::new();
		for t in BaseType::variants() {
			by_name.insert(t.as_str(), t);
			by_category.entry(Category::of(t)).or_default().push(t);
		}
		tracing::trace!("built vocabulary registry with {} types", by_name.len());
		Registry { by_name, by_category }
	}

	/// process-wide registry, built on first use
	pub fn global() -> &'static Registry {
		GLOBAL.get_or_init(Registry::new)
	}

	pub fn lookup(&self, name: &str) -> Option<BaseType> {
		self.by_name.get(name).copied()
	}

	pub fn is_valid_type(&self, category: Category, name: &str) -> bool {
		self.lookup(name)
			.is_some_and(|t| Category::of(t) == category)
	}

	/// every type name of given category, in table order
	pub fn names(&self, category: Category) -> Vec<&'static str> {
		self.by_category
			.get(&category)
			.map(|types| types.iter().map(|t| t.as_str()).collect())
			.unwrap_or_default()
	}

	pub fn len(&self) -> usize {
		self.by_name.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_name.is_empty()
	}

	/// empty value for given type name; unknown names become a generic Object
	pub fn construct(&self, name: &str) -> Entity {
		self.construct_or(name, Category::Object.generic())
	}

	/// empty value for given type name; unknown names become given fallback type
	pub fn construct_or(&self, name: &str, fallback: BaseType) -> Entity {
		match self.lookup(name) {
			Some(t) => Entity::from(t),
			None => {
				tracing::debug!("unknown type '{name}', falling back to '{fallback}'");
				Entity::from(fallback)
			},
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{ActivityType, Base, ObjectType};

	#[test]
	fn validity_is_checked_per_category() {
		let r = Registry::new();
		assert!(r.is_valid_type(Category::Activity, "Create"));
		assert!(r.is_valid_type(Category::Activity, "Question"));
		assert!(r.is_valid_type(Category::Actor, "Person"));
		assert!(r.is_valid_type(Category::Link, "Mention"));
		assert!(r.is_valid_type(Category::Collection, "OrderedCollectionPage"));
		assert!(r.is_valid_type(Category::Object, "Video"));
		assert!(!r.is_valid_type(Category::Object, "Create"));
		assert!(!r.is_valid_type(Category::Actor, "Note"));
		assert!(!r.is_valid_type(Category::Object, "Banana"));
	}

	#[test]
	fn every_name_is_listed_once() {
		let r = Registry::new();
		let listed : usize = Category::all().iter().map(|c| r.names(*c).len()).sum();
		assert_eq!(listed, r.len());
		assert_eq!(r.len(), BaseType::variants().len());
		assert!(r.names(Category::Actor).contains(&"Service"));
	}

	#[test]
	fn known_names_construct_their_own_type() {
		let r = Registry::new();
		let e = r.construct("Announce");
		assert_eq!(e.base_type(), BaseType::from(ActivityType::Announce));
		assert!(matches!(e, Entity::Activity(_)));
	}

	#[test]
	fn unknown_names_fall_back() {
		let r = Registry::new();
		assert_eq!(r.construct("Banana").base_type(), BaseType::Object(ObjectType::Object));
		let e = r.construct_or("ChatMessageReaction", Category::Activity.generic());
		assert!(matches!(e, Entity::Activity(_)));
		assert_eq!(e.base_type(), BaseType::from(ActivityType::Activity));
	}

	#[test]
	fn global_registry_is_shared() {
		assert!(std::ptr::eq(Registry::global(), Registry::global()));
		assert!(!Registry::global().is_empty());
	}
}
