use crate::{Base, Field, FieldErr, Item, object::AsObject};

fn count(node: &Option<Item>, field: &'static str) -> Field<i32> {
	let x = node
		.as_ref()
		.and_then(Item::get)
		.ok_or(FieldErr(field))?
		.total_items()?
		.min(i32::MAX as u64)
		as i32;
	Ok(x)
}

fn url_of(node: &Option<Item>, field: &'static str) -> Field<String> {
	let inner = node.as_ref().ok_or(FieldErr(field))?;
	match inner.get() {
		// a bare reference is the url itself
		None => Ok(inner.id()?.to_string()),
		Some(entity) => match entity.as_link() {
			Some(link) => Ok(link.href()?.to_string()),
			None => {
				let url = entity.core().and_then(|x| x.url.as_ref()).ok_or(FieldErr("url"))?;
				Ok(url.id()?.to_string())
			},
		},
	}
}

pub trait Shortcuts: AsObject {
	/// from the embedded `likes` collection total
	fn likes_count(&self) -> Field<i32> {
		count(&self.core().likes, "likes")
	}

	fn shares_count(&self) -> Field<i32> {
		count(&self.core().shares, "shares")
	}

	fn replies_count(&self) -> Field<i32> {
		count(&self.core().replies, "replies")
	}

	fn image_url(&self) -> Field<String> {
		url_of(&self.core().image, "image")
	}

	fn icon_url(&self) -> Field<String> {
		url_of(&self.core().icon, "icon")
	}
}

impl<T: AsObject> Shortcuts for T {}
