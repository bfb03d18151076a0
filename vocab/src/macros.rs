#[derive(Debug, thiserror::Error)]
#[error("invalid type value")]
pub struct TypeValueError;

macro_rules! strenum {
	( $(pub enum $enum_name:ident { $($flat:ident),* ; $($deep:ident($inner:ident)),* };)+ ) => {
		$(
			#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
			pub enum $enum_name {
				$($flat,)*
				$($deep($inner),)*
			}

			impl $enum_name {
				pub fn as_str(&self) -> &'static str {
					match self {
						$(Self::$flat => stringify!($flat),)*
						$(Self::$deep(x) => x.as_str(),)*
					}
				}
			}

			impl AsRef<str> for $enum_name {
				fn as_ref(&self) -> &str {
					self.as_str()
				}
			}

			impl std::fmt::Display for $enum_name {
				fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
					f.write_str(self.as_ref())
				}
			}

			impl TryFrom<&str> for $enum_name {
				type Error = $crate::macros::TypeValueError;

				fn try_from(value:&str) -> Result<Self, Self::Error> {
					match value {
						$(stringify!($flat) => Ok(Self::$flat),)*
						_ => {
							$(
								if let Ok(x) = $inner::try_from(value) {
									return Ok(Self::$deep(x));
								}
							)*
							Err($crate::macros::TypeValueError)
						},
					}
				}
			}

			impl $enum_name {
				/// every value of this table, nested tables flattened
				pub fn variants() -> Vec<Self> {
					#[allow(unused_mut)]
					let mut out : Vec<Self> = vec![$(Self::$flat,)*];
					$(
						out.extend($inner::variants().into_iter().map(Self::$deep));
					)*
					out
				}
			}
		)*
	};
}

pub(crate) use strenum;

/// declares which json key each field of a vocabulary struct maps to, and how it is read and
/// written. kinds resolve to `Reader::read_<kind>` and `InsertValue::insert_<kind>`.
/// structs listed in brackets are embedded bases, read and written before own fields.
macro_rules! fields {
	( $t:ty $([ $($base:ident),+ ])? { $($field:ident : $key:literal => $kind:ident),* $(,)? } ) => {
		impl $crate::codec::FieldSet for $t {
			fn read_fields(&mut self, r: &$crate::codec::Reader) {
				$($( $crate::codec::FieldSet::read_fields(&mut self.$base, r); )+)?
				$( self.$field = paste::paste! { r.[< read_ $kind >]($key) }; )*
			}

			fn write_fields(&self, map: &mut serde_json::Map<String, serde_json::Value>) {
				$($( $crate::codec::FieldSet::write_fields(&self.$base, map); )+)?
				$( paste::paste! { $crate::codec::InsertValue::[< insert_ $kind >](map, $key, &self.$field) }; )*
			}
		}
	};
}

pub(crate) use fields;
