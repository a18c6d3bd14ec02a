//! Camera and light placement for the globe scene

use bevy::math::Vec3;

/// Vertical field of view in degrees
pub const CAMERA_FOV_DEGREES: f32 = 45.0;

pub const CAMERA_NEAR: f32 = 0.1;

pub const CAMERA_FAR: f32 = 1_000.0;

/// Straight down the z axis, far enough to frame a unit globe with margin
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 3.0);

/// Point light range; the globe is always well inside it
pub const POINT_LIGHT_RANGE: f32 = 100.0;
