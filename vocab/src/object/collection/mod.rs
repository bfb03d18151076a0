pub mod page;

use crate::{CollectionType, Iri, Item, ItemCollection, ObjectType};

use super::{AsObject, ObjectCore};

/// Anything holding a sequence of items along with a count of the logical total.
///
/// `total_items` may exceed the number of items held: a paged collection usually serializes only
/// a fraction of its members.
pub trait Counted {
	fn total_items(&self) -> u64;
	fn collection(&self) -> &ItemCollection;

	/// true when every member counted in total is also held here
	fn is_complete(&self) -> bool {
		self.total_items() == self.collection().len() as u64
	}
}

/// Collections owning their members. Pages only mirror a slice of their parent, so they append
/// through `append_to` instead.
pub trait Appendable: Counted {
	/// push item and bump total, in one step
	fn append(&mut self, item: Item);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
	pub core: ObjectCore,
	/// A non-negative integer specifying the total number of objects contained by the logical view of the collection.
	/// This number might not reflect the actual number of items serialized within the Collection object instance
	pub total_items: u64,
	/// Identifies the items contained in a collection. The items might be ordered or unordered
	pub items: ItemCollection,
	/// In a paged Collection, indicates the page that contains the most recently updated member items
	pub current: Option<Item>,
	/// In a paged Collection, indicates the furthest preceeding page of items in the collection
	pub first: Option<Item>,
	/// In a paged Collection, indicates the furthest proceeding page of the collection
	pub last: Option<Item>,
}

impl Collection {
	pub fn new() -> Self {
		Self::with_kind(CollectionType::Collection)
	}

	pub fn with_id(id: impl Into<Iri>) -> Self {
		let mut out = Self::new();
		out.core.id = Some(id.into());
		out
	}

	pub(crate) fn with_kind(kind: CollectionType) -> Self {
		Collection {
			core: ObjectCore::new(ObjectType::Collection(kind)),
			total_items: 0,
			items: ItemCollection::new(),
			current: None,
			first: None,
			last: None,
		}
	}
}

impl Default for Collection {
	fn default() -> Self {
		Self::new()
	}
}

impl AsObject for Collection {
	fn core(&self) -> &ObjectCore { &self.core }
	fn core_mut(&mut self) -> &mut ObjectCore { &mut self.core }
}

impl Counted for Collection {
	fn total_items(&self) -> u64 {
		self.total_items
	}

	fn collection(&self) -> &ItemCollection {
		&self.items
	}
}

impl Appendable for Collection {
	fn append(&mut self, item: Item) {
		self.items.append(item);
		self.total_items += 1;
	}
}

crate::fields! {
	Collection [core] {
		total_items: "totalItems" => count,
		items: "items" => items,
		current: "current" => item,
		first: "first" => item,
		last: "last" => item,
	}
}

/// Collection whose members are strictly ordered, usually reverse chronologically.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedCollection {
	pub core: ObjectCore,
	pub total_items: u64,
	pub ordered_items: ItemCollection,
	pub current: Option<Item>,
	pub first: Option<Item>,
	pub last: Option<Item>,
}

impl OrderedCollection {
	pub fn new() -> Self {
		Self::with_kind(CollectionType::OrderedCollection)
	}

	pub fn with_id(id: impl Into<Iri>) -> Self {
		let mut out = Self::new();
		out.core.id = Some(id.into());
		out
	}

	pub(crate) fn with_kind(kind: CollectionType) -> Self {
		OrderedCollection {
			core: ObjectCore::new(ObjectType::Collection(kind)),
			total_items: 0,
			ordered_items: ItemCollection::new(),
			current: None,
			first: None,
			last: None,
		}
	}
}

impl Default for OrderedCollection {
	fn default() -> Self {
		Self::new()
	}
}

impl AsObject for OrderedCollection {
	fn core(&self) -> &ObjectCore { &self.core }
	fn core_mut(&mut self) -> &mut ObjectCore { &mut self.core }
}

impl Counted for OrderedCollection {
	fn total_items(&self) -> u64 {
		self.total_items
	}

	fn collection(&self) -> &ItemCollection {
		&self.ordered_items
	}
}

impl Appendable for OrderedCollection {
	fn append(&mut self, item: Item) {
		self.ordered_items.append(item);
		self.total_items += 1;
	}
}

crate::fields! {
	OrderedCollection [core] {
		total_items: "totalItems" => count,
		ordered_items: "orderedItems" => items,
		current: "current" => item,
		first: "first" => item,
		last: "last" => item,
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::Base;

	#[test]
	fn append_keeps_total_in_step_with_items() {
		let mut c = Collection::new();
		for i in 0..5 {
			c.append(Item::Reference(Iri::new(format!("https://example.net/objects/{i}"))));
		}
		assert_eq!(c.total_items, 5);
		assert_eq!(c.items.len(), 5);
		assert!(c.is_complete());
	}

	#[test]
	fn ordered_append_preserves_order() {
		let mut c = OrderedCollection::with_id("https://example.net/outbox");
		c.append(Iri::new("https://example.net/1").into());
		c.append(Iri::new("https://example.net/2").into());
		let ids : Vec<&str> = c.ordered_items.iter().filter_map(|x| x.id().ok()).collect();
		assert_eq!(ids, vec!["https://example.net/1", "https://example.net/2"]);
		assert_eq!(c.total_items, 2);
	}

	#[test]
	fn larger_logical_total_is_tolerated() {
		let mut c = OrderedCollection::new();
		c.total_items = 40;
		c.ordered_items.append(Iri::new("https://example.net/1"));
		assert!(!c.is_complete());
		c.append(Iri::new("https://example.net/2").into());
		assert_eq!(c.total_items, 41);
	}
}
