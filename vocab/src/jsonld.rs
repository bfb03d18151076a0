use serde_json::{Map, Value};

use crate::{BaseType, Category};

pub const ACTIVITYSTREAMS : &str = "https://www.w3.org/ns/activitystreams";
pub const SECURITY : &str = "https://w3id.org/security/v1";

pub trait LD {
	/// wrap in a json-ld `@context`, declaring the extension terms this kind of value may use
	fn ld_context(self) -> Self;
}

impl LD for Value {
	fn ld_context(mut self) -> Self {
		let category = self
			.get("type")
			.and_then(Value::as_str)
			.and_then(|x| BaseType::try_from(x).ok())
			.map(Category::of);
		if let Some(obj) = self.as_object_mut() {
			let mut ctx = Map::new();
			ctx.insert("sensitive".to_string(), Value::String("as:sensitive".into()));
			ctx.insert("quoteUrl".to_string(), Value::String("as:quoteUrl".into()));
			#[cfg(feature = "activitypub-miscellaneous-terms")]
			ctx.insert("Hashtag".to_string(), Value::String("as:Hashtag".into()));
			match category {
				Some(Category::Actor) => {
					ctx.insert("manuallyApprovesFollowers".to_string(), Value::String("as:manuallyApprovesFollowers".into()));
					ctx.insert("movedTo".to_string(), Value::String("as:movedTo".into()));
					ctx.insert("toot".to_string(), Value::String("http://joinmastodon.org/ns#".into()));
					ctx.insert("discoverable".to_string(), Value::String("toot:discoverable".into()));
				},
				Some(Category::Object) => {
					ctx.insert("ostatus".to_string(), Value::String("http://ostatus.org#".into()));
					ctx.insert("conversation".to_string(), Value::String("ostatus:conversation".into()));
				},
				_ => {},
			}
			obj.insert(
				"@context".to_string(),
				Value::Array(vec![
					Value::String(ACTIVITYSTREAMS.into()),
					Value::String(SECURITY.into()),
					Value::Object(ctx),
				]),
			);
		} else {
			tracing::warn!("cannot add @context to json value different than object");
		}
		self
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::*;

	#[test]
	fn context_declares_actor_terms() {
		let actor = json!({"type": "Person", "id": "https://ex/u/alice"}).ld_context();
		let ctx = &actor["@context"];
		assert_eq!(ctx[0], json!(ACTIVITYSTREAMS));
		assert_eq!(ctx[2]["discoverable"], json!("toot:discoverable"));
		assert!(ctx[2].get("conversation").is_none());
	}

	#[test]
	fn context_declares_object_terms() {
		let note = json!({"type": "Note"}).ld_context();
		assert_eq!(note["@context"][2]["conversation"], json!("ostatus:conversation"));
		assert_eq!(note["@context"][2]["sensitive"], json!("as:sensitive"));
	}

	#[test]
	fn non_objects_are_left_alone() {
		assert_eq!(json!("https://ex/1").ld_context(), json!("https://ex/1"));
	}
}
