use std::collections::HashSet;

use crate::{
	Base, Entity, Item,
	object::{AsObject, ObjectCore, activity::AsActivity},
};

pub const PUBLIC : &str = "https://www.w3.org/ns/activitystreams#Public";

pub trait Addressed {
	/// every recipient: to, bto, cc and bcc
	fn addressed(&self) -> Vec<String>;
	/// primary recipients only: to and bto
	fn mentioning(&self) -> Vec<String>;

	fn is_public(&self) -> bool {
		self.addressed().iter().any(|x| x == PUBLIC)
	}
}

fn addressed(core: &ObjectCore) -> Vec<String> {
	let mut to = core.to.all_ids();
	to.append(&mut core.bto.all_ids());
	to.append(&mut core.cc.all_ids());
	to.append(&mut core.bcc.all_ids());
	to
}

fn mentioning(core: &ObjectCore) -> Vec<String> {
	let mut to = core.to.all_ids();
	to.append(&mut core.bto.all_ids());
	to
}

impl<T: AsObject> Addressed for T {
	fn addressed(&self) -> Vec<String> {
		addressed(self.core())
	}

	fn mentioning(&self) -> Vec<String> {
		mentioning(self.core())
	}
}

impl Addressed for Entity {
	fn addressed(&self) -> Vec<String> {
		self.core().map(addressed).unwrap_or_default()
	}

	fn mentioning(&self) -> Vec<String> {
		self.core().map(mentioning).unwrap_or_default()
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DedupOptions {
	/// also filter `audience`, after bcc
	pub include_audience: bool,
}

impl Default for DedupOptions {
	fn default() -> Self {
		DedupOptions { include_audience: true }
	}
}

/// Recipient list cleanup before delivery.
///
/// Lists are walked in order to, bto, cc, bcc (then audience): each recipient is kept only in the
/// first list naming it, and never kept if it's the activity's actor, or its object when the
/// activity is reflexive (see [`crate::ActivityType::is_reflexive`]). Anonymous recipients are
/// always kept. Applying it twice changes nothing.
pub trait Dedup {
	fn dedup_recipients(&mut self, options: &DedupOptions);
}

impl<T: AsActivity + ?Sized> Dedup for T {
	fn dedup_recipients(&mut self, options: &DedupOptions) {
		let mut excluded = HashSet::new();
		if let Some(Ok(actor)) = self.activity().actor.as_ref().map(Base::id) {
			excluded.insert(actor.to_string());
		}
		if self.activity_type().is_reflexive() {
			if let Some(Ok(object)) = self.object().map(Base::id) {
				excluded.insert(object.to_string());
			}
		}
		dedup_lists(self.core_mut(), excluded, options);
	}
}

impl Dedup for Entity {
	/// activities exclude their actor and object, other objects only lose cross-list duplicates
	fn dedup_recipients(&mut self, options: &DedupOptions) {
		if let Some(activity) = self.as_activity_mut() {
			activity.dedup_recipients(options);
		} else if let Some(core) = self.core_mut() {
			dedup_lists(core, HashSet::new(), options);
		}
	}
}

impl Dedup for Item {
	fn dedup_recipients(&mut self, options: &DedupOptions) {
		if let Some(x) = self.get_mut() {
			x.dedup_recipients(options);
		}
	}
}

fn dedup_lists(core: &mut ObjectCore, excluded: HashSet<String>, options: &DedupOptions) {
	let mut seen = excluded;
	let before = core.to.len() + core.bto.len() + core.cc.len() + core.bcc.len() + core.audience.len();
	let mut lists = vec![&mut core.to, &mut core.bto, &mut core.cc, &mut core.bcc];
	if options.include_audience {
		lists.push(&mut core.audience);
	}
	for list in lists {
		list.retain(|x| match x.id() {
			Ok(id) => seen.insert(id.to_string()),
			Err(_) => true,
		});
	}
	let after = core.to.len() + core.bto.len() + core.cc.len() + core.bcc.len() + core.audience.len();
	if before != after {
		tracing::trace!("dropped {} duplicate or excluded recipients", before - after);
	}
}
