use thiserror::Error;

/// A named point on the globe in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude:  f32,
    pub longitude: f32,
    pub name:      &'static str,
}

#[derive(Debug, Error, PartialEq)]
pub enum LocationError {
    #[error("latitude {latitude} of '{name}' is outside [-90, 90]")]
    Latitude { name: &'static str, latitude: f32 },
    #[error("longitude {longitude} of '{name}' is outside [-180, 180]")]
    Longitude { name: &'static str, longitude: f32 },
}

impl Location {
    pub const fn new(latitude: f32, longitude: f32, name: &'static str) -> Self {
        Self {
            latitude,
            longitude,
            name,
        }
    }

    /// NaN coordinates fail both range checks.
    pub fn validate(&self) -> Result<(), LocationError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(LocationError::Latitude {
                name:     self.name,
                latitude: self.latitude,
            });
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(LocationError::Longitude {
                name:      self.name,
                longitude: self.longitude,
            });
        }
        Ok(())
    }
}
