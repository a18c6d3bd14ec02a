use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy::window::WindowResized;

use crate::globe::GlobeConfig;

pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewportClass>()
            .add_systems(Startup, classify_initial_viewport)
            .add_systems(Update, classify_on_resize);
    }
}

/// Logical size of the primary window and whether it counts as compact.
/// Compact viewports get tap-to-hover and the wider hit regions.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct ViewportClass {
    pub size:    Vec2,
    pub compact: bool,
}

impl ViewportClass {
    pub fn classify(size: Vec2, compact_width_threshold: f32) -> Self {
        Self {
            size,
            compact: size.x < compact_width_threshold,
        }
    }
}

fn classify_initial_viewport(
    window: Single<&Window, With<PrimaryWindow>>,
    config: Res<GlobeConfig>,
    mut viewport: ResMut<ViewportClass>,
) {
    *viewport = ViewportClass::classify(window.size(), config.compact_width_threshold);
    debug!("initial viewport {viewport:?}");
}

fn classify_on_resize(
    mut resized: MessageReader<WindowResized>,
    primary: Query<(), With<PrimaryWindow>>,
    config: Res<GlobeConfig>,
    mut viewport: ResMut<ViewportClass>,
) {
    for event in resized.read() {
        if !primary.contains(event.window) {
            continue;
        }
        let next = ViewportClass::classify(
            Vec2::new(event.width, event.height),
            config.compact_width_threshold,
        );
        if next.compact != viewport.compact {
            // hit regions are decided when the globe is built, so only input changes here
            info!("viewport is now {}", if next.compact { "compact" } else { "wide" });
        }
        viewport.set_if_neq(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_is_strictly_below_threshold() {
        assert!(ViewportClass::classify(Vec2::new(699.0, 900.0), 700.0).compact);
        assert!(!ViewportClass::classify(Vec2::new(700.0, 900.0), 700.0).compact);
        assert!(!ViewportClass::classify(Vec2::new(1280.0, 720.0), 700.0).compact);
    }

    #[test]
    fn test_height_does_not_matter() {
        let tall = ViewportClass::classify(Vec2::new(1024.0, 4000.0), 700.0);
        let short = ViewportClass::classify(Vec2::new(1024.0, 100.0), 700.0);
        assert_eq!(tall.compact, short.compact);
    }
}
