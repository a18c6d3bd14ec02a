mod constants;
mod viewport;

use bevy::light::AmbientLight;
use bevy::prelude::*;

use constants::CAMERA_FAR;
use constants::CAMERA_FOV_DEGREES;
use constants::CAMERA_NEAR;
use constants::CAMERA_POSITION;
use constants::POINT_LIGHT_RANGE;
pub use viewport::ViewportClass;
use viewport::ViewportPlugin;

use crate::globe::GlobeConfig;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(ViewportPlugin)
            .add_systems(Startup, (spawn_camera, spawn_point_light))
            .add_systems(
                Update,
                (update_clear_color, update_lights).run_if(resource_changed::<GlobeConfig>),
            );
    }
}

#[derive(Component, Debug)]
pub struct GlobeCamera;

#[derive(Component, Debug)]
struct GlobeLight;

fn spawn_camera(mut commands: Commands, config: Res<GlobeConfig>) {
    commands.spawn((
        Name::new("GlobeCamera"),
        GlobeCamera,
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_translation(CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        // per-camera ambient light so the inspector can tune it with the rest of the config
        AmbientLight {
            color: Color::WHITE,
            brightness: config.ambient_brightness,
            ..default()
        },
    ));
}

/// Always spawned; an intensity of zero simply turns it off
fn spawn_point_light(mut commands: Commands, config: Res<GlobeConfig>) {
    commands.spawn((
        Name::new("GlobeLight"),
        GlobeLight,
        PointLight {
            intensity: config.point_light_intensity,
            range: POINT_LIGHT_RANGE,
            ..default()
        },
        Transform::from_translation(config.point_light_position),
    ));
}

// lets the inspector change the background while the app is running
fn update_clear_color(config: Res<GlobeConfig>, mut clear_color: ResMut<ClearColor>) {
    clear_color.0 = config.clear_color;
}

fn update_lights(
    config: Res<GlobeConfig>,
    mut ambient: Query<&mut AmbientLight, With<GlobeCamera>>,
    mut point_lights: Query<(&mut PointLight, &mut Transform), With<GlobeLight>>,
) {
    for mut ambient in &mut ambient {
        ambient.brightness = config.ambient_brightness;
    }
    for (mut light, mut transform) in &mut point_lights {
        light.intensity = config.point_light_intensity;
        transform.translation = config.point_light_position;
    }
}
