//! Seams towards the http client and the storage layer. Nothing in this crate calls them on its
//! own: fetching and loading only happen when a caller asks for it.

use crate::{
	Base, BaseType, Codec, DecodeError, Entity, Iri, Item, ItemCollection,
	object::collection::{OrderedCollection, page::OrderedCollectionPage},
	target::Addressed,
};

pub trait Fetcher {
	type Error: std::error::Error + 'static;

	/// raw json-ld document found at given iri
	fn fetch(&self, iri: &Iri) -> Result<Vec<u8>, Self::Error>;
}

pub trait Storage {
	type Error: std::error::Error + 'static;

	/// matching items, in storage order, along with how many match in total regardless of limit
	fn load(&self, filter: &Filter) -> Result<(ItemCollection, u64), Self::Error>;

	/// persist item, returning it as stored
	fn save(&self, item: Item) -> Result<Item, Self::Error>;

	/// one page of given collection, holding whatever the filter selects
	fn load_page(&self, filter: &Filter, parent: &OrderedCollection) -> Result<OrderedCollectionPage, Self::Error> {
		let (items, total) = self.load(filter)?;
		let mut page = OrderedCollectionPage::new(parent);
		page.collection.ordered_items = items;
		page.collection.total_items = total;
		page.start_index = Some(filter.offset);
		Ok(page)
	}
}

/// Selection of stored items. Empty constraints match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
	pub kind: Option<BaseType>,
	pub attributed_to: Option<String>,
	pub addressed_to: Option<String>,
	pub offset: u64,
	pub limit: Option<u64>,
}

impl Filter {
	pub fn kind(mut self, kind: impl Into<BaseType>) -> Self {
		self.kind = Some(kind.into());
		self
	}

	pub fn attributed_to(mut self, id: impl ToString) -> Self {
		self.attributed_to = Some(id.to_string());
		self
	}

	pub fn addressed_to(mut self, id: impl ToString) -> Self {
		self.addressed_to = Some(id.to_string());
		self
	}

	pub fn page(mut self, offset: u64, limit: u64) -> Self {
		self.offset = offset;
		self.limit = Some(limit);
		self
	}

	/// whether item satisfies every constraint but pagination
	pub fn matches(&self, item: &Item) -> bool {
		if let Some(kind) = self.kind {
			if item.base_type() != kind {
				return false;
			}
		}
		if self.attributed_to.is_none() && self.addressed_to.is_none() {
			return true;
		}
		// references carry no attribution nor recipients
		let Some(entity) = item.get() else { return false };
		if let Some(author) = &self.attributed_to {
			let by_actor = entity
				.as_activity()
				.and_then(|x| x.activity().actor.as_ref())
				.is_some_and(|x| x.id().is_ok_and(|id| id == author));
			let by_attribution = entity
				.core()
				.is_some_and(|x| x.attributed_to.contains_id(author));
			if !by_actor && !by_attribution {
				return false;
			}
		}
		if let Some(recipient) = &self.addressed_to {
			if !entity.addressed().iter().any(|x| x == recipient) {
				return false;
			}
		}
		true
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError<E: std::error::Error + 'static> {
	#[error("failed fetching object: {0}")]
	Fetch(#[source] E),

	#[error("fetched document is invalid: {0}")]
	Decode(#[from] DecodeError),

	#[error("{0} does not point to an object")]
	NotAnObject(Iri),
}

impl Item {
	/// replace a reference with the value it points to, fetching and decoding it;
	/// embedded values are returned right away
	pub fn resolve<F: Fetcher + ?Sized>(&mut self, fetcher: &F, codec: &Codec) -> Result<&mut Entity, ResolveError<F::Error>> {
		if let Item::Reference(iri) = self {
			tracing::debug!("resolving {iri}");
			let bytes = fetcher.fetch(iri).map_err(ResolveError::Fetch)?;
			let fetched = codec.decode(&bytes)?;
			if fetched.is_reference() {
				return Err(ResolveError::NotAnObject(iri.clone()));
			}
			if fetched.id().is_ok_and(|id| id != iri.as_str()) {
				tracing::warn!("fetched {iri} but got object with id {:?}", fetched.id());
			}
			*self = fetched;
		}
		match self {
			Item::Value(x) => Ok(x.as_mut()),
			Item::Reference(iri) => Err(ResolveError::NotAnObject(iri.clone())),
		}
	}
}
