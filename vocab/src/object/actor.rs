use crate::{ActorType, Iri, Item, ItemCollection, NaturalLanguageValues, ObjectType};

use super::{AsObject, ObjectCore};

/// Application, Group, Organization, Person or Service.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
	pub core: ObjectCore,
	pub preferred_username: NaturalLanguageValues,
	/// OrderedCollection of all the messages received by the actor
	pub inbox: Option<Item>,
	/// OrderedCollection of all the messages produced by the actor
	pub outbox: Option<Item>,
	pub following: Option<Item>,
	pub followers: Option<Item>,
	pub liked: Option<Item>,
	/// supplementary collections which may be of interest
	pub streams: ItemCollection,
	pub endpoints: Option<Endpoints>,
	pub public_key: Option<PublicKey>,
	pub manually_approves_followers: Option<bool>,
	pub discoverable: Option<bool>,
	pub moved_to: Option<Item>,
}

impl Actor {
	pub fn new(kind: ActorType) -> Self {
		Actor {
			core: ObjectCore::new(ObjectType::Actor(kind)),
			preferred_username: NaturalLanguageValues::new(),
			inbox: None,
			outbox: None,
			following: None,
			followers: None,
			liked: None,
			streams: ItemCollection::new(),
			endpoints: None,
			public_key: None,
			manually_approves_followers: None,
			discoverable: None,
			moved_to: None,
		}
	}

	pub fn with_id(kind: ActorType, id: impl Into<Iri>) -> Self {
		let mut out = Self::new(kind);
		out.core.id = Some(id.into());
		out
	}

	pub fn actor_type(&self) -> ActorType {
		match self.core.kind() {
			ObjectType::Actor(t) => t,
			_ => ActorType::Person,
		}
	}

	/// shared inbox if advertised, own inbox otherwise
	pub fn delivery_inbox(&self) -> Option<&Item> {
		self.endpoints
			.as_ref()
			.and_then(|e| e.shared_inbox.as_ref())
			.or(self.inbox.as_ref())
	}
}

impl AsObject for Actor {
	fn core(&self) -> &ObjectCore { &self.core }
	fn core_mut(&mut self) -> &mut ObjectCore { &mut self.core }
}

crate::fields! {
	Actor [core] {
		preferred_username: "preferredUsername" => nlv,
		inbox: "inbox" => item,
		outbox: "outbox" => item,
		following: "following" => item,
		followers: "followers" => item,
		liked: "liked" => item,
		streams: "streams" => items,
		endpoints: "endpoints" => endpoints,
		public_key: "publicKey" => public_key,
		manually_approves_followers: "manuallyApprovesFollowers" => bool,
		discoverable: "discoverable" => bool,
		moved_to: "movedTo" => item,
	}
}

/// Useful endpoints for this actor, shared inbox above all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Endpoints {
	pub shared_inbox: Option<Item>,
	pub proxy_url: Option<Item>,
	pub upload_media: Option<Item>,
	pub oauth_authorization_endpoint: Option<Item>,
	pub oauth_token_endpoint: Option<Item>,
	pub provide_client_key: Option<Item>,
	pub sign_client_key: Option<Item>,
}

crate::fields! {
	Endpoints {
		shared_inbox: "sharedInbox" => item,
		proxy_url: "proxyUrl" => item,
		upload_media: "uploadMedia" => item,
		oauth_authorization_endpoint: "oauthAuthorizationEndpoint" => item,
		oauth_token_endpoint: "oauthTokenEndpoint" => item,
		provide_client_key: "provideClientKey" => item,
		sign_client_key: "signClientKey" => item,
	}
}

/// Key used to verify http signatures of this actor, from the security vocabulary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublicKey {
	pub id: Option<Iri>,
	pub owner: Option<Iri>,
	pub public_key_pem: String,
}

crate::fields! {
	PublicKey {
		id: "id" => id,
		owner: "owner" => id,
		public_key_pem: "publicKeyPem" => pem,
	}
}
