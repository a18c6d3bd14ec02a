use bevy::prelude::*;

use crate::asset_loader::AssetsState;

/// Per-frame ordering of the globe systems. Bevy renders after `Update`, so
/// the chain below is everything that happens between two frames.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FrameSet {
    Input,
    Animation,
    HitTest,
    Rotation,
}

pub struct SchedulePlugin;

impl Plugin for SchedulePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                FrameSet::Input,
                FrameSet::Animation,
                FrameSet::HitTest,
                FrameSet::Rotation,
            )
                .chain()
                // nothing to animate, hit or rotate until the scene exists - and if the
                // texture failed it never will
                .run_if(in_state(AssetsState::Loaded)),
        );
    }
}
