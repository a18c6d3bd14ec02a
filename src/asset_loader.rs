// the globe texture is requested once at startup and the scene waits for it
use bevy::asset::LoadState;
use bevy::dev_tools::states::log_transitions;
use bevy::prelude::*;

use crate::globe::GlobeConfig;

pub struct AssetLoaderPlugin;

impl Plugin for AssetLoaderPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AssetsState>() // the scene is built on OnEnter(Loaded)
            .init_resource::<GlobeAssets>()
            .add_systems(PreStartup, load_assets)
            .add_systems(
                Update,
                check_asset_loading.run_if(in_state(AssetsState::Loading)),
            )
            .add_systems(Update, log_transitions::<AssetsState>);
    }
}

#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AssetsState {
    #[default]
    Loading,
    Loaded,
    /// Terminal - the globe is never built
    Failed,
}

#[derive(Resource, Clone, Debug, Default)]
pub struct GlobeAssets {
    pub texture: Handle<Image>,
}

pub fn load_assets(
    mut globe_assets: ResMut<GlobeAssets>,
    config: Res<GlobeConfig>,
    asset_server: Res<AssetServer>,
) {
    info!("Loading globe texture {}", config.texture_path);
    *globe_assets = GlobeAssets {
        texture: asset_server.load(config.texture_path.clone()),
    };
}

pub fn check_asset_loading(
    mut next_state: ResMut<NextState<AssetsState>>,
    asset_server: Res<AssetServer>,
    globe_assets: Res<GlobeAssets>,
) {
    match asset_server.get_load_state(globe_assets.texture.id()) {
        Some(LoadState::Loaded) => {
            info!("Globe texture loaded");
            next_state.set(AssetsState::Loaded);
        },
        Some(LoadState::Failed(error)) => {
            error!("Globe texture failed to load, the globe will not be shown: {error}");
            next_state.set(AssetsState::Failed);
        },
        _ => {},
    }
}
