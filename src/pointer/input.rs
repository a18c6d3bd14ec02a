use bevy::input::touch::TouchInput;
use bevy::input::touch::TouchPhase;
use bevy::input::touch::Touches;
use bevy::prelude::*;
use bevy::window::CursorMoved;
use bevy::window::PrimaryWindow;

use crate::camera::ViewportClass;
use crate::schedule::FrameSet;

pub struct PointerInputPlugin;

impl Plugin for PointerInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>().add_systems(
            Update,
            (track_cursor, track_touch_start).in_set(FrameSet::Input),
        );
    }
}

/// Last known pointer position. `ndc` stays `None` until the first cursor or
/// touch event, so nothing is hit before the user has pointed at anything.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub ndc:    Option<Vec2>,
    /// Logical window position, used to place the tooltip
    pub screen: Vec2,
}

impl PointerState {
    pub fn update(&mut self, screen: Vec2, viewport_size: Vec2) {
        // minimized windows report a zero size
        if viewport_size.x <= 0.0 || viewport_size.y <= 0.0 {
            return;
        }
        self.screen = screen;
        self.ndc = Some(viewport_to_ndc(screen, viewport_size));
    }
}

/// Window position (origin top left, y down) to normalized device coordinates
/// (origin centre, y up, both axes in [-1, 1])
pub fn viewport_to_ndc(position: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(
        (position.x / size.x).mul_add(2.0, -1.0),
        (position.y / size.y).mul_add(-2.0, 1.0),
    )
}

fn track_cursor(
    mut cursor_moved: MessageReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut pointer: ResMut<PointerState>,
) {
    for event in cursor_moved.read() {
        if let Ok(window) = windows.get(event.window) {
            pointer.update(event.position, window.size());
        }
    }
}

/// On compact viewports a single-finger tap acts like moving the cursor there
fn track_touch_start(
    mut touch_input: MessageReader<TouchInput>,
    touches: Res<Touches>,
    viewport: Res<ViewportClass>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut pointer: ResMut<PointerState>,
) {
    for event in touch_input.read() {
        if !viewport.compact || event.phase != TouchPhase::Started || touches.iter().count() > 1 {
            continue;
        }
        if let Ok(window) = windows.get(event.window) {
            pointer.update(event.position, window.size());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_ndc_corners_and_centre() {
        assert_eq!(viewport_to_ndc(Vec2::ZERO, SIZE), Vec2::new(-1.0, 1.0));
        assert_eq!(viewport_to_ndc(SIZE, SIZE), Vec2::new(1.0, -1.0));
        assert_eq!(viewport_to_ndc(SIZE / 2.0, SIZE), Vec2::ZERO);
    }

    #[test]
    fn test_pointer_unset_until_first_event() {
        let mut pointer = PointerState::default();
        assert_eq!(pointer.ndc, None);

        pointer.update(Vec2::new(400.0, 300.0), SIZE);
        assert_eq!(pointer.ndc, Some(Vec2::ZERO));
        assert_eq!(pointer.screen, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_zero_sized_viewport_is_ignored() {
        let mut pointer = PointerState::default();
        pointer.update(Vec2::new(10.0, 10.0), Vec2::ZERO);
        assert_eq!(pointer, PointerState::default());
    }

    fn touch_app(compact: bool) -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_message::<TouchInput>()
            .init_resource::<Touches>()
            .init_resource::<PointerState>()
            .insert_resource(ViewportClass {
                size: SIZE,
                compact,
            })
            .add_systems(Update, track_touch_start);
        let window = app.world_mut().spawn((Window::default(), PrimaryWindow)).id();
        (app, window)
    }

    fn tap(app: &mut App, window: Entity, phase: TouchPhase, position: Vec2) {
        app.world_mut().write_message(TouchInput {
            phase,
            position,
            window,
            force: None,
            id: 0,
        });
        app.update();
    }

    #[test]
    fn test_tap_is_ignored_on_wide_viewports() {
        let (mut app, window) = touch_app(false);
        tap(&mut app, window, TouchPhase::Started, Vec2::new(200.0, 100.0));
        assert_eq!(app.world().resource::<PointerState>().ndc, None);
    }

    #[test]
    fn test_tap_points_at_touch_on_compact_viewports() {
        let (mut app, window) = touch_app(true);
        let window_size = app
            .world()
            .get::<Window>(window)
            .map_or(Vec2::ZERO, Window::size);
        let position = Vec2::new(200.0, 100.0);

        // only the start of a touch counts
        tap(&mut app, window, TouchPhase::Moved, position);
        assert_eq!(app.world().resource::<PointerState>().ndc, None);

        tap(&mut app, window, TouchPhase::Started, position);
        let pointer = *app.world().resource::<PointerState>();
        assert_eq!(pointer.ndc, Some(viewport_to_ndc(position, window_size)));
        assert_eq!(pointer.screen, position);
    }
}
