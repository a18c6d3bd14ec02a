//! Pointer handling: where the cursor or finger is, which marker it is over,
//! and the tooltip that names it.

mod input;
mod tooltip;

use bevy::prelude::*;

pub use hit_test::HitRegion;
pub use hit_test::HitSphere;
use hit_test::hit_test_markers;
use input::PointerInputPlugin;
pub use tooltip::Tooltip;
use tooltip::TooltipPlugin;

use crate::schedule::FrameSet;

pub struct PointerPlugin;

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PointerInputPlugin)
            .add_plugins(TooltipPlugin)
            .add_systems(Update, hit_test_markers.in_set(FrameSet::HitTest));
    }
}
