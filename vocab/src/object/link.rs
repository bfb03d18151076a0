use crate::{Field, FieldErr, Iri, Item, LinkType, NaturalLanguageValues};

/// Qualified reference to a resource: a Mention, an Hashtag, or a plain Link with extra metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
	pub id: Option<Iri>,
	kind: LinkType,
	pub href: Option<Iri>,
	/// link relation types, as in html `rel`
	pub rel: Vec<String>,
	pub media_type: Option<String>,
	pub name: NaturalLanguageValues,
	pub hreflang: Option<String>,
	pub height: Option<u64>,
	pub width: Option<u64>,
	pub preview: Option<Item>,
}

impl Link {
	pub fn new(kind: LinkType) -> Self {
		Link {
			id: None,
			kind,
			href: None,
			rel: Vec::new(),
			media_type: None,
			name: NaturalLanguageValues::new(),
			hreflang: None,
			height: None,
			width: None,
			preview: None,
		}
	}

	pub fn to_href(kind: LinkType, href: impl Into<Iri>) -> Self {
		let mut out = Self::new(kind);
		out.href = Some(href.into());
		out
	}

	pub fn kind(&self) -> LinkType {
		self.kind
	}

	pub fn href(&self) -> Field<&str> {
		self.href.as_ref().map(|x| x.as_str()).ok_or(FieldErr("href"))
	}
}

crate::fields! {
	Link {
		id: "id" => id,
		href: "href" => iri,
		rel: "rel" => strings,
		media_type: "mediaType" => str,
		name: "name" => nlv,
		hreflang: "hreflang" => str,
		height: "height" => u64,
		width: "width" => u64,
		preview: "preview" => item,
	}
}
