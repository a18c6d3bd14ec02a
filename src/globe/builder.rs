use bevy::prelude::*;

use super::config::GlobeConfig;
use super::constants::GLOW_BASE_ALPHA;
use super::constants::INNER_SPHERE_SCALE;
use super::constants::MARKER_SEGMENTS;
use super::mesh::globe_mesh;
use crate::asset_loader::GlobeAssets;
use crate::camera::ViewportClass;
use crate::geo::ArcCurve;
use crate::geo::Location;
use crate::geo::project;
use crate::pointer::HitRegion;
use crate::pointer::HitSphere;
use crate::rotation::globe_orientation;
use crate::traits::UsizeExt;

/// The textured sphere. Markers, hit regions and arcs are its children so they
/// turn with it.
#[derive(Component, Debug)]
pub struct Globe;

#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub name: String,
}

/// Translucent halo around a marker; `phase` staggers the pulse per marker
#[derive(Component, Debug, Clone, Copy)]
pub struct MarkerGlow {
    pub phase: f32,
}

/// Sampled arc polyline in globe space. `id` keys the flicker so every arc
/// flickers the same way every run.
#[derive(Component, Debug, Clone)]
pub struct GlobeArc {
    pub id:     usize,
    pub points: Vec<Vec3>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPlan {
    pub index:    usize,
    pub name:     &'static str,
    pub position: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArcPlan {
    pub id:     usize,
    pub from:   usize,
    pub to:     usize,
    pub points: Vec<Vec3>,
}

/// Everything the scene needs, computed up front from the locations so the
/// spawning system only has to turn it into entities.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePlan {
    pub markers:           Vec<MarkerPlan>,
    pub arcs:              Vec<ArcPlan>,
    /// Set only on compact viewports for variants that widen touch targets
    pub hit_region_radius: Option<f32>,
}

impl ScenePlan {
    pub fn new(locations: &[Location], config: &GlobeConfig, compact: bool) -> Self {
        let markers: Vec<MarkerPlan> = locations
            .iter()
            .filter(|location| match location.validate() {
                Ok(()) => true,
                Err(error) => {
                    warn!("Skipping location: {error}");
                    false
                },
            })
            .enumerate()
            .map(|(index, location)| MarkerPlan {
                index,
                name: location.name,
                position: project(location.latitude, location.longitude, config.marker_altitude),
            })
            .collect();

        // all pairs - fine for the handful of locations a variant ships with
        let mut arcs = Vec::with_capacity(markers.len() * markers.len().saturating_sub(1) / 2);
        for (i, from) in markers.iter().enumerate() {
            for to in &markers[i + 1..] {
                let curve = ArcCurve::new(from.position, to.position, config.arc_height);
                if curve.is_degenerate() {
                    debug!("{} and {} share a position, their arc is a point", from.name, to.name);
                }
                arcs.push(ArcPlan {
                    id:     arcs.len(),
                    from:   from.index,
                    to:     to.index,
                    points: curve.sample(config.arc_segments),
                });
            }
        }

        Self {
            markers,
            arcs,
            hit_region_radius: config.hit_region_radius.filter(|_| compact),
        }
    }

    pub const fn hit_region_count(&self) -> usize {
        if self.hit_region_radius.is_some() {
            self.markers.len()
        } else {
            0
        }
    }
}

pub fn spawn_globe(
    mut commands: Commands,
    config: Res<GlobeConfig>,
    globe_assets: Res<GlobeAssets>,
    viewport: Res<ViewportClass>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let plan = ScenePlan::new(config.variant.locations(), &config, viewport.compact);

    let globe = commands
        .spawn((
            Name::new("Globe"),
            Globe,
            Mesh3d(meshes.add(globe_mesh(config.globe_radius, config.globe_segments))),
            MeshMaterial3d(materials.add(globe_material(&config, globe_assets.texture.clone()))),
            Transform::from_rotation(globe_orientation(config.globe_tilt, 0.0)),
        ))
        .id();

    if let Some(color) = config.inner_sphere_color {
        commands.spawn((
            Name::new("InnerSphere"),
            Mesh3d(meshes.add(globe_mesh(
                config.globe_radius * INNER_SPHERE_SCALE,
                config.globe_segments,
            ))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color,
                unlit: true,
                ..default()
            })),
            Transform::default(),
        ));
    }

    let marker_mesh = meshes.add(
        Sphere::new(config.marker_radius)
            .mesh()
            .uv(MARKER_SEGMENTS, MARKER_SEGMENTS),
    );
    let marker_material = materials.add(StandardMaterial {
        base_color: config.marker_color,
        emissive: config.marker_emissive.to_linear(),
        unlit: config.marker_unlit,
        perceptual_roughness: 0.15,
        reflectance: 0.9,
        ..default()
    });
    let glow_mesh = config.glow_radius.map(|radius| {
        meshes.add(
            Sphere::new(radius)
                .mesh()
                .uv(MARKER_SEGMENTS, MARKER_SEGMENTS),
        )
    });

    for marker in &plan.markers {
        let marker_entity = commands
            .spawn((
                Name::new(marker.name),
                Marker {
                    name: marker.name.to_string(),
                },
                HitSphere {
                    radius: config.marker_radius,
                },
                Mesh3d(marker_mesh.clone()),
                MeshMaterial3d(marker_material.clone()),
                Transform::from_translation(marker.position),
                ChildOf(globe),
            ))
            .id();

        if let Some(glow_mesh) = &glow_mesh {
            // opacity is animated per glow, so the material can't be shared
            let glow_material = materials.add(StandardMaterial {
                base_color: config.glow_color.with_alpha(GLOW_BASE_ALPHA),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                ..default()
            });
            commands.spawn((
                Name::new("MarkerGlow"),
                MarkerGlow {
                    phase: marker.index.to_f32(),
                },
                Mesh3d(glow_mesh.clone()),
                MeshMaterial3d(glow_material),
                Transform::default(),
                ChildOf(marker_entity),
            ));
        }

        if let Some(radius) = plan.hit_region_radius {
            commands.spawn((
                Name::new("HitRegion"),
                HitRegion {
                    marker: marker_entity,
                },
                HitSphere { radius },
                Transform::from_translation(marker.position),
                Visibility::Hidden,
                ChildOf(globe),
            ));
        }
    }

    let arc_count = plan.arcs.len();
    let hit_region_count = plan.hit_region_count();
    for arc in plan.arcs {
        commands.spawn((
            Name::new(format!("Arc {}-{}", arc.from, arc.to)),
            GlobeArc {
                id:     arc.id,
                points: arc.points,
            },
            Transform::default(),
            ChildOf(globe),
        ));
    }

    info!(
        "Globe built ({:?}): {} markers, {} hit regions, {} arcs",
        config.variant,
        plan.markers.len(),
        hit_region_count,
        arc_count
    );
}

fn globe_material(config: &GlobeConfig, texture: Handle<Image>) -> StandardMaterial {
    let alpha_mode = if config.globe_opacity < 1.0 {
        AlphaMode::Blend
    } else {
        AlphaMode::Opaque
    };

    StandardMaterial {
        base_color: Color::WHITE.with_alpha(config.globe_opacity),
        base_color_texture: Some(texture),
        unlit: config.globe_unlit,
        alpha_mode,
        perceptual_roughness: 0.7,
        ..default()
    }
}
