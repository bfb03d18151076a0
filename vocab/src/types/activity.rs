#[cfg(feature = "litepub")]
crate::strenum! {
	pub enum ActivityType {
		Activity,
		Add,
		Announce,
		Create,
		Delete,
		Dislike,
		EmojiReact,
		Flag,
		Follow,
		Join,
		Leave,
		Like,
		Listen,
		Move,
		Read,
		Remove,
		Undo,
		Update,
		View;

		IntransitiveActivity(IntransitiveActivityType),
		Accept(AcceptType),
		Ignore(IgnoreType),
		Offer(OfferType),
		Reject(RejectType)
	};
}

#[cfg(not(feature = "litepub"))]
crate::strenum! {
	pub enum ActivityType {
		Activity,
		Add,
		Announce,
		Create,
		Delete,
		Dislike,
		Flag,
		Follow,
		Join,
		Leave,
		Like,
		Listen,
		Move,
		Read,
		Remove,
		Undo,
		Update,
		View;

		IntransitiveActivity(IntransitiveActivityType),
		Accept(AcceptType),
		Ignore(IgnoreType),
		Offer(OfferType),
		Reject(RejectType)
	};
}

crate::strenum! {
	pub enum IntransitiveActivityType {
		IntransitiveActivity,
		Arrive,
		Question,
		Travel;
	};

	pub enum AcceptType {
		Accept,
		TentativeAccept;
	};

	pub enum IgnoreType {
		Ignore,
		Block;
	};

	pub enum OfferType {
		Offer,
		Invite;
	};

	pub enum RejectType {
		Reject,
		TentativeReject;
	};
}

impl ActivityType {
	/// activities whose object must never be among its recipients: Create, Like, Dislike,
	/// Update and Block
	pub fn is_reflexive(&self) -> bool {
		matches!(
			self,
			ActivityType::Create
			| ActivityType::Like
			| ActivityType::Dislike
			| ActivityType::Update
			| ActivityType::Ignore(IgnoreType::Block)
		)
	}

	pub fn is_intransitive(&self) -> bool {
		matches!(self, ActivityType::IntransitiveActivity(_))
	}
}
