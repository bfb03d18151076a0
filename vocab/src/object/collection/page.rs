use crate::{Base, CollectionType, Item};

use super::{Appendable, Collection, Counted, OrderedCollection};
use crate::object::{AsObject, ObjectCore};

fn reference_to(parent: &ObjectCore) -> Option<Item> {
	match parent.id.clone() {
		Some(id) => Some(Item::Reference(id)),
		None => {
			tracing::debug!("paging a collection without id, page will have no partOf");
			None
		},
	}
}

/// Slice of a [`Collection`], pointing back to it through `part_of`.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionPage {
	pub collection: Collection,
	pub part_of: Option<Item>,
	pub next: Option<Item>,
	pub prev: Option<Item>,
}

impl CollectionPage {
	/// new empty page of given collection, inheriting its navigation links and total
	pub fn new(parent: &Collection) -> Self {
		let mut collection = Collection::with_kind(CollectionType::CollectionPage);
		collection.total_items = parent.total_items;
		collection.current = parent.current.clone();
		collection.first = parent.first.clone();
		collection.last = parent.last.clone();
		CollectionPage {
			collection,
			part_of: reference_to(&parent.core),
			next: None,
			prev: None,
		}
	}

	pub(crate) fn blank() -> Self {
		CollectionPage {
			collection: Collection::with_kind(CollectionType::CollectionPage),
			part_of: None,
			next: None,
			prev: None,
		}
	}

	/// true if this page points to given collection
	pub fn is_page_of(&self, parent: &Collection) -> bool {
		match (self.part_of.as_ref(), parent.core.id()) {
			(Some(part_of), Ok(id)) => part_of.id().is_ok_and(|x| x == id),
			_ => false,
		}
	}

	/// append to parent collection and mirror the item on this page, so that page total
	/// always reflects the parent's
	pub fn append_to(&mut self, parent: &mut Collection, item: Item) {
		if !self.is_page_of(parent) {
			tracing::warn!("appending through a page which does not point to its parent collection");
		}
		parent.append(item.clone());
		self.collection.items.append(item);
		self.collection.total_items = parent.total_items;
	}
}

impl AsObject for CollectionPage {
	fn core(&self) -> &ObjectCore { &self.collection.core }
	fn core_mut(&mut self) -> &mut ObjectCore { &mut self.collection.core }
}

impl Counted for CollectionPage {
	fn total_items(&self) -> u64 {
		self.collection.total_items
	}

	fn collection(&self) -> &crate::ItemCollection {
		&self.collection.items
	}
}

crate::fields! {
	CollectionPage [collection] {
		part_of: "partOf" => item,
		next: "next" => item,
		prev: "prev" => item,
	}
}

/// Slice of an [`OrderedCollection`]. `start_index` is the position of the first item of this
/// page within the whole collection.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedCollectionPage {
	pub collection: OrderedCollection,
	pub part_of: Option<Item>,
	pub next: Option<Item>,
	pub prev: Option<Item>,
	pub start_index: Option<u64>,
}

impl OrderedCollectionPage {
	pub fn new(parent: &OrderedCollection) -> Self {
		let mut collection = OrderedCollection::with_kind(CollectionType::OrderedCollectionPage);
		collection.total_items = parent.total_items;
		collection.current = parent.current.clone();
		collection.first = parent.first.clone();
		collection.last = parent.last.clone();
		OrderedCollectionPage {
			collection,
			part_of: reference_to(&parent.core),
			next: None,
			prev: None,
			start_index: None,
		}
	}

	pub(crate) fn blank() -> Self {
		OrderedCollectionPage {
			collection: OrderedCollection::with_kind(CollectionType::OrderedCollectionPage),
			part_of: None,
			next: None,
			prev: None,
			start_index: None,
		}
	}

	pub fn is_page_of(&self, parent: &OrderedCollection) -> bool {
		match (self.part_of.as_ref(), parent.core.id()) {
			(Some(part_of), Ok(id)) => part_of.id().is_ok_and(|x| x == id),
			_ => false,
		}
	}

	pub fn append_to(&mut self, parent: &mut OrderedCollection, item: Item) {
		if !self.is_page_of(parent) {
			tracing::warn!("appending through a page which does not point to its parent collection");
		}
		parent.append(item.clone());
		self.collection.ordered_items.append(item);
		self.collection.total_items = parent.total_items;
	}
}

impl AsObject for OrderedCollectionPage {
	fn core(&self) -> &ObjectCore { &self.collection.core }
	fn core_mut(&mut self) -> &mut ObjectCore { &mut self.collection.core }
}

impl Counted for OrderedCollectionPage {
	fn total_items(&self) -> u64 {
		self.collection.total_items
	}

	fn collection(&self) -> &crate::ItemCollection {
		&self.collection.ordered_items
	}
}

crate::fields! {
	OrderedCollectionPage [collection] {
		part_of: "partOf" => item,
		next: "next" => item,
		prev: "prev" => item,
		start_index: "startIndex" => u64,
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{Iri, ObjectType};

	fn note(n: u32) -> Item {
		Iri::new(format!("https://example.net/notes/{n}")).into()
	}

	#[test]
	fn page_points_to_parent_and_copies_navigation() {
		let mut parent = OrderedCollection::with_id("https://example.net/outbox");
		parent.first = Some(Iri::new("https://example.net/outbox?page=1").into());
		parent.total_items = 12;

		let page = OrderedCollectionPage::new(&parent);
		assert_eq!(page.object_type(), ObjectType::Collection(CollectionType::OrderedCollectionPage));
		assert_eq!(page.part_of, Some(Item::Reference(Iri::new("https://example.net/outbox"))));
		assert_eq!(page.collection.first, parent.first);
		assert_eq!(page.collection.total_items, 12);
		assert!(page.is_page_of(&parent));
		assert!(page.collection.ordered_items.is_empty());
	}

	#[test]
	fn appending_through_page_keeps_parent_total_consistent() {
		let mut parent = Collection::with_id("https://example.net/followers");
		parent.append(note(0));
		let mut page = CollectionPage::new(&parent);

		page.append_to(&mut parent, note(1));
		page.append_to(&mut parent, note(2));

		assert_eq!(parent.total_items, 3);
		assert_eq!(parent.items.len(), 3);
		assert_eq!(page.collection.items.len(), 2);
		assert_eq!(page.total_items(), 3);
	}

	#[test]
	fn ordered_page_appends_land_on_parent() {
		let mut parent = OrderedCollection::with_id("https://example.net/outbox");
		parent.append(note(0));
		let mut page = OrderedCollectionPage::new(&parent);

		page.append_to(&mut parent, note(1));
		page.append_to(&mut parent, note(2));

		assert_eq!(parent.total_items(), 3);
		assert_eq!(parent.ordered_items.len(), 3);
		assert!(parent.is_complete());
		assert_eq!(page.total_items(), 3);
		assert_eq!(page.collection().len(), 2);
		assert!(!page.is_complete());
	}

	#[test]
	fn foreign_parent_still_receives_the_item() {
		let origin = Collection::with_id("https://example.net/followers");
		let mut other = Collection::with_id("https://example.net/following");
		let mut page = CollectionPage::new(&origin);
		assert!(!page.is_page_of(&other));

		page.append_to(&mut other, note(1));
		assert_eq!(other.total_items, 1);
		assert_eq!(page.total_items(), 1);
	}

	#[test]
	fn page_of_anonymous_collection_has_no_part_of() {
		let parent = Collection::new();
		let page = CollectionPage::new(&parent);
		assert!(page.part_of.is_none());
		assert!(!page.is_page_of(&parent));
	}
}
