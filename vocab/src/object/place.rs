use crate::ObjectType;

use super::{AsObject, ObjectCore};

/// A logical or physical location.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
	pub core: ObjectCore,
	/// accuracy of position coordinates, in percent
	pub accuracy: Option<f64>,
	pub altitude: Option<f64>,
	pub latitude: Option<f64>,
	pub longitude: Option<f64>,
	pub radius: Option<f64>,
	/// "cm", "feet", "inches", "km", "m", "miles" or an iri
	pub units: Option<String>,
}

impl Place {
	pub fn new() -> Self {
		Place {
			core: ObjectCore::new(ObjectType::Place),
			accuracy: None,
			altitude: None,
			latitude: None,
			longitude: None,
			radius: None,
			units: None,
		}
	}
}

impl Default for Place {
	fn default() -> Self {
		Self::new()
	}
}

impl AsObject for Place {
	fn core(&self) -> &ObjectCore { &self.core }
	fn core_mut(&mut self) -> &mut ObjectCore { &mut self.core }
}

crate::fields! {
	Place [core] {
		accuracy: "accuracy" => f64,
		altitude: "altitude" => f64,
		latitude: "latitude" => f64,
		longitude: "longitude" => f64,
		radius: "radius" => f64,
		units: "units" => str,
	}
}
