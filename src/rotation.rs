//! Globe rotation. When the virtual page can scroll, the scroll position sets
//! the angle directly; otherwise the globe spins slowly on its own. The mode
//! is re-evaluated every frame and rotation pauses while a marker is hovered.

use std::f64::consts::TAU;

use bevy::input::mouse::MouseScrollUnit;
use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::globe::Globe;
use crate::globe::GlobeConfig;
use crate::pointer::Tooltip;
use crate::schedule::FrameSet;
use crate::settings::GlobeSettings;
use crate::traits::F64Ext;

/// Idle speed is configured per 60 Hz frame
const NOMINAL_FRAME_SECS: f32 = 1.0 / 60.0;

/// Logical pixels scrolled per wheel line
const SCROLL_LINE_HEIGHT: f32 = 40.0;

pub struct RotationPlugin;

impl Plugin for RotationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GlobeRotation>()
            .init_resource::<ScrollState>()
            .add_systems(
                Update,
                (track_page_extent, scroll_page)
                    .chain()
                    .in_set(FrameSet::Input),
            )
            .add_systems(Update, rotate_globe.in_set(FrameSet::Rotation));
    }
}

/// Current rotation around the globe's own vertical axis, in radians.
/// Idle spin only ever adds to it, so it is kept in `f64` to keep growing
/// after long sessions.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct GlobeRotation {
    pub angle: f64,
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct ScrollState {
    offset:     f32,
    max_offset: f32,
}

impl ScrollState {
    /// Recomputes how far the page can scroll and keeps the offset inside it
    pub fn set_extent(&mut self, page_height: Option<f32>, window_height: f32) {
        self.max_offset = page_height.map_or(0.0, |height| (height - window_height).max(0.0));
        self.offset = self.offset.clamp(0.0, self.max_offset);
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset);
    }

    pub fn is_scrollable(&self) -> bool { self.max_offset > 0.0 }

    pub const fn offset(&self) -> f32 { self.offset }

    /// How far down the page is scrolled, 0 at the top and 1 at the bottom
    pub fn fraction(&self) -> f32 {
        if self.is_scrollable() {
            self.offset / self.max_offset
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationMode {
    ScrollBound { fraction: f32 },
    Idle,
}

impl RotationMode {
    pub fn from_scroll(scroll: &ScrollState) -> Self {
        if scroll.is_scrollable() {
            Self::ScrollBound {
                fraction: scroll.fraction(),
            }
        } else {
            Self::Idle
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::ScrollBound { .. } => "scroll-bound",
            Self::Idle => "idle",
        }
    }
}

/// Scroll-bound sets the angle outright; idle advances it frame-rate
/// independently
pub fn next_angle(mode: RotationMode, current: f64, base_speed: f32, delta_secs: f32) -> f64 {
    match mode {
        RotationMode::ScrollBound { fraction } => f64::from(fraction) * TAU,
        RotationMode::Idle => {
            f64::from(base_speed).mul_add(f64::from(delta_secs / NOMINAL_FRAME_SECS), current)
        },
    }
}

/// Fixed tilt on x and z with the spin on y. The spin is reduced to one turn
/// before it reaches `f32`.
pub fn globe_orientation(tilt: Vec2, angle: f64) -> Quat {
    Quat::from_euler(EulerRot::XYZ, tilt.x, angle.rem_euclid(TAU).to_f32(), tilt.y)
}

fn track_page_extent(
    settings: Res<GlobeSettings>,
    window: Single<&Window, With<PrimaryWindow>>,
    mut scroll: ResMut<ScrollState>,
) {
    let mut next = *scroll;
    next.set_extent(settings.page_height, window.height());
    scroll.set_if_neq(next);
}

fn scroll_page(mut wheel: MessageReader<MouseWheel>, mut scroll: ResMut<ScrollState>) {
    if wheel.is_empty() {
        return;
    }
    for event in wheel.read() {
        let pixels = match event.unit {
            MouseScrollUnit::Line => event.y * SCROLL_LINE_HEIGHT,
            MouseScrollUnit::Pixel => event.y,
        };
        // wheel up moves back towards the top of the page
        scroll.scroll_by(-pixels);
    }
    trace!("page offset {} ({:.2})", scroll.offset(), scroll.fraction());
}

fn rotate_globe(
    time: Res<Time>,
    config: Res<GlobeConfig>,
    scroll: Res<ScrollState>,
    tooltip: Res<Tooltip>,
    mut rotation: ResMut<GlobeRotation>,
    mut globe: Query<&mut Transform, With<Globe>>,
    mut last_mode: Local<Option<&'static str>>,
) {
    if tooltip.is_hovering() {
        return;
    }

    let mode = RotationMode::from_scroll(&scroll);
    if *last_mode != Some(mode.label()) {
        debug!("rotation mode: {}", mode.label());
        *last_mode = Some(mode.label());
    }

    rotation.angle = next_angle(
        mode,
        rotation.angle,
        config.auto_rotation_speed,
        time.delta_secs(),
    );

    for mut transform in &mut globe {
        transform.rotation = globe_orientation(config.globe_tilt, rotation.angle);
    }
}
