use std::f32::consts::PI;

use bevy::math::Vec3;

/// Maps latitude/longitude in degrees onto a sphere of the given radius.
///
/// Latitude 90° lands on +Y. Longitude is offset by 180° and the x axis is
/// mirrored so the result lines up with an equirectangular texture wrapped on
/// the globe mesh.
pub fn project(latitude: f32, longitude: f32, radius: f32) -> Vec3 {
    let phi = (90.0 - latitude) * PI / 180.0;
    let theta = (longitude + 180.0) * PI / 180.0;

    let x = -radius * phi.sin() * theta.cos();
    let y = radius * phi.cos();
    let z = radius * phi.sin() * theta.sin();

    Vec3::new(x, y, z)
}
