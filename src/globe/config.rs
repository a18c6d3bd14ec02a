use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use super::constants::ARC_HEIGHT;
use super::constants::ARC_LINE_WIDTH;
use super::constants::ARC_SEGMENTS;
use super::constants::COMPACT_WIDTH_THRESHOLD;
use super::constants::GLOBE_RADIUS;
use super::constants::GLOBE_SEGMENTS;
use super::constants::MARKER_ALTITUDE;
use super::variant::GlobeVariant;
use crate::global_input::GlobalAction;
use crate::global_input::toggle_active;

pub struct GlobeConfigPlugin;

impl Plugin for GlobeConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GlobeConfig>()
            .init_resource::<TooltipConfig>()
            .add_plugins(
                ResourceInspectorPlugin::<GlobeConfig>::default()
                    .run_if(toggle_active(false, GlobalAction::GlobeInspector)),
            )
            .add_plugins(
                ResourceInspectorPlugin::<TooltipConfig>::default()
                    .run_if(toggle_active(false, GlobalAction::TooltipInspector)),
            );
    }
}

/// Everything that differs between the globe variants. Geometry fields are
/// read once when the scene is built; colours, animation and rotation fields
/// are read every frame so they can be tuned live from the inspector.
#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone)]
#[reflect(Resource, InspectorOptions)]
pub struct GlobeConfig {
    pub variant:                 GlobeVariant,
    pub texture_path:            String,
    pub globe_radius:            f32,
    pub globe_segments:          u32,
    /// Fixed tilt of the globe around x and z, in radians
    pub globe_tilt:              Vec2,
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub globe_opacity:           f32,
    pub globe_unlit:             bool,
    /// Opaque core drawn just inside a translucent globe
    pub inner_sphere_color:      Option<Color>,
    pub clear_color:             Color,
    #[inspector(min = 0.0, max = 5_000.0, display = NumberDisplay::Slider)]
    pub ambient_brightness:      f32,
    /// Zero disables the point light
    #[inspector(min = 0.0, max = 5_000_000.0, display = NumberDisplay::Slider)]
    pub point_light_intensity:   f32,
    pub point_light_position:    Vec3,
    /// Radius markers are projected onto, slightly above the surface
    pub marker_altitude:         f32,
    pub marker_radius:           f32,
    pub marker_color:            Color,
    pub marker_emissive:         Color,
    pub marker_unlit:            bool,
    pub glow_radius:             Option<f32>,
    pub glow_color:              Color,
    /// Radius of the invisible touch target added on compact viewports
    pub hit_region_radius:       Option<f32>,
    pub arc_height:              f32,
    pub arc_segments:            usize,
    pub arc_color:               Color,
    #[inspector(min = 0.5, max = 8.0, display = NumberDisplay::Slider)]
    pub arc_line_width:          f32,
    /// Arc opacity when flicker is off
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub arc_opacity:             f32,
    pub arc_flicker:             bool,
    /// Radians per nominal 60 Hz frame while idle
    #[inspector(min = 0.0, max = 0.05, display = NumberDisplay::Slider)]
    pub auto_rotation_speed:     f32,
    pub compact_width_threshold: f32,
}

impl Default for GlobeConfig {
    fn default() -> Self { Self::for_variant(GlobeVariant::default()) }
}

impl GlobeConfig {
    pub fn for_variant(variant: GlobeVariant) -> Self {
        match variant {
            GlobeVariant::Classic => Self {
                variant,
                texture_path: "textures/planet.png".to_string(),
                globe_radius: GLOBE_RADIUS,
                globe_segments: GLOBE_SEGMENTS,
                globe_tilt: Vec2::new(0.35, 0.0),
                globe_opacity: 1.0,
                globe_unlit: false,
                inner_sphere_color: None,
                clear_color: Color::srgb_u8(0x0b, 0x10, 0x1c),
                ambient_brightness: 700.0,
                point_light_intensity: 1_200_000.0,
                point_light_position: Vec3::new(5.0, 5.0, 5.0),
                marker_altitude: MARKER_ALTITUDE,
                marker_radius: 0.035,
                marker_color: Color::srgb_u8(0xff, 0xe0, 0x66),
                marker_emissive: Color::srgb_u8(0x22, 0x22, 0x00),
                marker_unlit: false,
                glow_radius: Some(0.06),
                glow_color: Color::srgb_u8(0xff, 0xe0, 0x66),
                hit_region_radius: None,
                arc_height: ARC_HEIGHT,
                arc_segments: ARC_SEGMENTS,
                arc_color: Color::srgb_u8(0x00, 0xff, 0xff),
                arc_line_width: ARC_LINE_WIDTH,
                arc_opacity: 0.45,
                arc_flicker: true,
                auto_rotation_speed: 0.01,
                compact_width_threshold: COMPACT_WIDTH_THRESHOLD,
            },
            GlobeVariant::Minimal => Self {
                variant,
                texture_path: "textures/map3.png".to_string(),
                globe_radius: GLOBE_RADIUS,
                globe_segments: GLOBE_SEGMENTS,
                globe_tilt: Vec2::new(0.42, 0.12),
                globe_opacity: 0.6,
                globe_unlit: true,
                inner_sphere_color: Some(Color::srgb_u8(0xff, 0xfd, 0xf9)),
                clear_color: Color::WHITE,
                ambient_brightness: 1_200.0,
                point_light_intensity: 0.0,
                point_light_position: Vec3::new(5.0, 5.0, 5.0),
                marker_altitude: MARKER_ALTITUDE,
                marker_radius: 0.02,
                marker_color: Color::srgb_u8(0x16, 0x0f, 0x29),
                marker_emissive: Color::BLACK,
                marker_unlit: true,
                glow_radius: None,
                glow_color: Color::NONE,
                hit_region_radius: Some(0.06),
                arc_height: ARC_HEIGHT,
                arc_segments: ARC_SEGMENTS,
                arc_color: Color::srgb_u8(0xc7, 0xc7, 0xc7),
                arc_line_width: ARC_LINE_WIDTH,
                arc_opacity: 0.45,
                arc_flicker: false,
                auto_rotation_speed: 0.004,
                compact_width_threshold: COMPACT_WIDTH_THRESHOLD,
            },
        }
    }
}

#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone)]
#[reflect(Resource, InspectorOptions)]
pub struct TooltipConfig {
    pub background:      Color,
    pub text_color:      Color,
    pub border_color:    Color,
    #[inspector(min = 0.0, max = 4.0, display = NumberDisplay::Slider)]
    pub border_width:    f32,
    #[inspector(min = 8.0, max = 32.0, display = NumberDisplay::Slider)]
    pub font_size:       f32,
    /// Horizontal and vertical padding in logical pixels
    pub padding:         Vec2,
    /// Offset from the pointer so the tooltip never sits under it
    pub pointer_offset:  Vec2,
    #[inspector(min = 0.0, max = 2.0, display = NumberDisplay::Slider)]
    pub hide_delay_secs: f32,
    /// Anything at least half the tooltip height draws a pill
    pub corner_radius:   f32,
    pub shadow_color:    Color,
    pub shadow_offset:   Vec2,
    #[inspector(min = 0.0, max = 64.0, display = NumberDisplay::Slider)]
    pub shadow_blur:     f32,
}

impl Default for TooltipConfig {
    fn default() -> Self { Self::for_variant(GlobeVariant::default()) }
}

impl TooltipConfig {
    pub fn for_variant(variant: GlobeVariant) -> Self {
        match variant {
            GlobeVariant::Classic => Self {
                background:      Color::srgba_u8(30, 40, 60, 242),
                text_color:      Color::WHITE,
                border_color:    Color::NONE,
                border_width:    0.0,
                font_size:       18.0,
                padding:         Vec2::new(16.0, 8.0),
                pointer_offset:  Vec2::splat(10.0),
                hide_delay_secs: 0.2,
                corner_radius:   8.0,
                shadow_color:    Color::srgba(0.0, 0.0, 0.0, 0.25),
                shadow_offset:   Vec2::new(0.0, 4.0),
                shadow_blur:     24.0,
            },
            GlobeVariant::Minimal => Self {
                background:      Color::WHITE,
                text_color:      Color::srgb_u8(0x16, 0x0f, 0x29),
                border_color:    Color::BLACK,
                border_width:    1.0,
                font_size:       14.0,
                padding:         Vec2::new(30.0, 5.0),
                pointer_offset:  Vec2::splat(10.0),
                hide_delay_secs: 0.2,
                corner_radius:   9_999.0,
                shadow_color:    Color::srgba(0.0, 0.0, 0.0, 0.1),
                shadow_offset:   Vec2::new(0.0, 4.0),
                shadow_blur:     24.0,
            },
        }
    }
}
