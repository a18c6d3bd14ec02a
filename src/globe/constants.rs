//! Constants for the globe module
//! Shared defaults that both variants start from

// =============================================================================
// Globe
// =============================================================================

/// Radius of the textured globe sphere
pub const GLOBE_RADIUS: f32 = 1.0;

/// Sectors and stacks of the globe's UV sphere
pub const GLOBE_SEGMENTS: u32 = 64;

/// Inner core radius as a fraction of the globe radius
pub const INNER_SPHERE_SCALE: f32 = 0.99;

// =============================================================================
// Markers
// =============================================================================

/// Projection radius for markers - just above the surface to avoid z-fighting
pub const MARKER_ALTITUDE: f32 = 1.01;

/// Sectors and stacks for marker and glow spheres
pub const MARKER_SEGMENTS: u32 = 32;

/// Glow pulse speed in radians per second
pub const GLOW_PULSE_SPEED: f32 = 2.0;

/// Extra scale the glow reaches at the peak of its pulse
pub const GLOW_SCALE_AMPLITUDE: f32 = 0.25;

/// Glow opacity at the trough of its pulse
pub const GLOW_BASE_ALPHA: f32 = 0.15;

/// Opacity added at the peak of the glow pulse
pub const GLOW_ALPHA_AMPLITUDE: f32 = 0.25;

// =============================================================================
// Arcs
// =============================================================================

/// Distance from the centre the middle of each arc reaches
pub const ARC_HEIGHT: f32 = 1.12;

/// Line segments per arc polyline
pub const ARC_SEGMENTS: usize = 60;

/// Gizmo line width for arcs
pub const ARC_LINE_WIDTH: f32 = 2.0;

/// Arc flicker speed in radians per second
pub const ARC_FLICKER_SPEED: f32 = 1.0;

/// Arc opacity at the trough of its flicker
pub const ARC_FLICKER_BASE_ALPHA: f32 = 0.25;

/// Opacity added at the peak of the arc flicker
pub const ARC_FLICKER_AMPLITUDE: f32 = 0.25;

// =============================================================================
// Viewport
// =============================================================================

/// Windows narrower than this (logical px) get touch handling and hit regions
pub const COMPACT_WIDTH_THRESHOLD: f32 = 700.0;
