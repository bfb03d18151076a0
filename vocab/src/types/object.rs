use super::ActivityType;

crate::strenum! {
	pub enum ObjectType {
		Object,
		Article,
		Event,
		Note,
		Place,
		Profile,
		Relationship,
		Tombstone;

		Activity(ActivityType),
		Actor(ActorType),
		Collection(CollectionType),
		Document(DocumentType)
	};

	pub enum ActorType {
		Application,
		Group,
		Organization,
		Person,
		Service;
	};

	pub enum CollectionType {
		Collection,
		CollectionPage,
		OrderedCollection,
		OrderedCollectionPage;
	};

	pub enum DocumentType {
		Document,
		Audio,
		Image,
		Page,
		Video;
	};
}
