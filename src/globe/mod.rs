mod animation;
mod builder;
mod config;
mod constants;
mod mesh;
mod variant;

use bevy::prelude::*;

use animation::GlobeAnimationPlugin;
pub use builder::Globe;
pub use builder::Marker;
use builder::spawn_globe;
use config::GlobeConfigPlugin;
pub use config::GlobeConfig;
pub use config::TooltipConfig;
pub use variant::GlobeVariant;

use crate::asset_loader::AssetsState;

pub struct GlobePlugin;

impl Plugin for GlobePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(GlobeConfigPlugin)
            .add_plugins(GlobeAnimationPlugin)
            .add_systems(OnEnter(AssetsState::Loaded), spawn_globe);
    }
}
