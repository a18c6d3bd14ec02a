//! Geoglobe - an interactive 3D globe built with Bevy 0.18
//!
//! - Geographic markers projected onto a textured sphere
//! - Pulsing glows and curved arcs connecting every pair of markers
//! - Hover (or tap, on narrow windows) tooltips naming each marker
//! - Scroll-bound or idle rotation
//! - Two preset looks, chosen from an optional settings file
//! - Bevy Remote Protocol (BRP) support for debugging

mod asset_loader;
mod camera;
mod geo;
mod global_input;
mod globe;
mod pointer;
mod rotation;
mod schedule;
mod settings;
mod traits;

use bevy::prelude::*;
use bevy_brp_extras::BrpExtrasPlugin;
use bevy_inspector_egui::bevy_egui::EguiPlugin;

use crate::asset_loader::AssetLoaderPlugin;
use crate::camera::CameraPlugin;
use crate::global_input::GlobalInputPlugin;
use crate::globe::GlobeConfig;
use crate::globe::GlobePlugin;
use crate::globe::TooltipConfig;
use crate::pointer::PointerPlugin;
use crate::rotation::RotationPlugin;
use crate::schedule::SchedulePlugin;
use crate::settings::GlobeSettings;

fn main() {
    let mut app = App::new();

    // Get effective port from BrpExtrasPlugin to include in window title if non-default
    let brp_plugin = BrpExtrasPlugin::default();
    let (effective_port, _) = brp_plugin.get_effective_port();
    let window_title = if effective_port == bevy_brp_extras::DEFAULT_REMOTE_PORT {
        "geoglobe".to_string()
    } else {
        format!("geoglobe - {effective_port}")
    };

    #[cfg(not(target_arch = "wasm32"))]
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: window_title,
            ..default()
        }),
        ..default()
    }));

    #[cfg(target_arch = "wasm32")]
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: window_title,
            canvas: Some("#globe".to_string()),
            fit_canvas_to_parent: true,
            ..default()
        }),
        ..default()
    }));

    // settings are read after DefaultPlugins so the log plugin reports them
    let settings = GlobeSettings::load();
    app.insert_resource(settings)
        .insert_resource(GlobeConfig::for_variant(settings.variant))
        .insert_resource(TooltipConfig::for_variant(settings.variant));

    app.add_plugins((
        EguiPlugin::default(),
        AssetLoaderPlugin,
        brp_plugin,
        CameraPlugin,
        GlobalInputPlugin,
        GlobePlugin,
        PointerPlugin,
        RotationPlugin,
        SchedulePlugin,
    ))
    .run();
}
