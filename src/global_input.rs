//! App-wide keyboard actions. Each action flips a toggle that other plugins
//! use as a run condition through `toggle_active`.

use bevy::platform::collections::HashSet;
use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

pub struct GlobalInputPlugin;

impl Plugin for GlobalInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EnhancedInputPlugin)
            .add_input_context::<GlobalInput>()
            .init_resource::<ActiveToggles>()
            .add_systems(Startup, spawn_global_input)
            .add_observer(toggle_globe_inspector)
            .add_observer(toggle_tooltip_inspector);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalAction {
    GlobeInspector,
    TooltipInspector,
}

#[derive(Component)]
struct GlobalInput;

#[derive(InputAction)]
#[action_output(bool)]
struct ToggleGlobeInspector;

#[derive(InputAction)]
#[action_output(bool)]
struct ToggleTooltipInspector;

/// Actions whose state differs from their default
#[derive(Resource, Default, Debug)]
pub struct ActiveToggles(HashSet<GlobalAction>);

impl ActiveToggles {
    fn flip(&mut self, action: GlobalAction) {
        if !self.0.remove(&action) {
            self.0.insert(action);
        }
        debug!("{action:?} toggled, flipped={}", self.0.contains(&action));
    }

    fn is_flipped(&self, action: GlobalAction) -> bool { self.0.contains(&action) }
}

/// Run condition that starts at `default` and flips each time `action` fires
pub fn toggle_active(default: bool, action: GlobalAction) -> impl FnMut(Res<ActiveToggles>) -> bool {
    move |toggles: Res<ActiveToggles>| toggles.is_flipped(action) != default
}

fn spawn_global_input(mut commands: Commands) {
    commands.spawn((
        Name::new("GlobalInput"),
        GlobalInput,
        actions!(GlobalInput[
            (
                Action::<ToggleGlobeInspector>::new(),
                bindings![KeyCode::F1],
            ),
            (
                Action::<ToggleTooltipInspector>::new(),
                bindings![KeyCode::F2],
            ),
        ]),
    ));
}

fn toggle_globe_inspector(
    _toggle: On<Start<ToggleGlobeInspector>>,
    mut toggles: ResMut<ActiveToggles>,
) {
    toggles.flip(GlobalAction::GlobeInspector);
}

fn toggle_tooltip_inspector(
    _toggle: On<Start<ToggleTooltipInspector>>,
    mut toggles: ResMut<ActiveToggles>,
) {
    toggles.flip(GlobalAction::TooltipInspector);
}
