use bevy::prelude::*;
use serde::Deserialize;
use serde::Serialize;

use crate::geo::Location;

/// The two shipped looks of the globe. Each one carries its own location
/// list, palette, radii and lighting (see `GlobeConfig::for_variant`).
#[derive(Reflect, Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GlobeVariant {
    /// Lit photographic globe with glowing yellow markers and cyan arcs
    #[default]
    Classic,
    /// Translucent map texture, small dark markers, grey arcs and widened
    /// touch targets on compact screens
    Minimal,
}

impl GlobeVariant {
    pub const fn locations(self) -> &'static [Location] {
        match self {
            Self::Classic => CLASSIC_LOCATIONS,
            Self::Minimal => MINIMAL_LOCATIONS,
        }
    }
}

const CLASSIC_LOCATIONS: &[Location] = &[
    Location::new(56.95, 24.1, "Latvia"),
    Location::new(54.68, 25.28, "Lithuania"),
    Location::new(59.43, 24.75, "Estonia"),
    Location::new(52.52, 13.4, "Germany"),
    Location::new(40.4, -3.7, "Spain"),
    Location::new(40.38, 49.89, "Azerbaijan"),
    Location::new(41.31, 69.24, "Uzbekistan"),
    Location::new(51.16, 71.43, "Kazakhstan"),
    Location::new(35.18, 33.36, "Cyprus"),
    Location::new(25.27, 55.3, "UAE (Dubai)"),
    Location::new(51.5, -0.12, "UK (London)"),
    Location::new(40.71, -74.0, "USA (New York)"),
    Location::new(34.05, -118.24, "USA (Los Angeles)"),
];

// positions are tuned to the stylised map texture rather than real coordinates
const MINIMAL_LOCATIONS: &[Location] = &[
    Location::new(27.68, 11.28, "Latvia"),
    Location::new(24.68, 10.28, "Lithuania"),
    Location::new(30.68, 13.28, "Estonia"),
    Location::new(21.52, 5.4, "Germany"),
    Location::new(12.4, -13.7, "Spain"),
    Location::new(12.38, 37.0, "Azerbaijan"),
    Location::new(14.31, 49.24, "Uzbekistan"),
    Location::new(18.16, 55.43, "Kazakhstan"),
    Location::new(6.18, 18.36, "Cyprus"),
    Location::new(-2.27, 38.3, "UAE"),
    Location::new(22.5, -10.0, "UK"),
    Location::new(18.71, -77.0, "USA"),
    Location::new(6.05, -124.24, "USA"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_locations_are_valid() {
        for variant in [GlobeVariant::Classic, GlobeVariant::Minimal] {
            assert_eq!(variant.locations().len(), 13);
            for location in variant.locations() {
                assert!(location.validate().is_ok(), "{location:?}");
            }
        }
    }

    #[test]
    fn test_minimal_keeps_duplicate_names() {
        let usa = GlobeVariant::Minimal
            .locations()
            .iter()
            .filter(|location| location.name == "USA")
            .count();
        assert_eq!(usa, 2);
    }
}
