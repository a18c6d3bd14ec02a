use bevy::asset::RenderAssetUsages;
use bevy::mesh::Indices;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;

use crate::geo::project;
use crate::traits::UsizeExt;

/// Latitude/longitude sphere whose vertices come from `project`, so an
/// equirectangular texture lines up exactly with projected markers.
/// u runs west to east from -180°, v runs north to south.
pub fn globe_mesh(radius: f32, segments: u32) -> Mesh {
    let sectors = segments.max(3) as usize;
    let stacks = (segments / 2).max(2) as usize;

    let vertex_count = (stacks + 1) * (sectors + 1);
    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);

    for stack in 0..=stacks {
        let v = stack.to_f32() / stacks.to_f32();
        let latitude = 180.0f32.mul_add(-v, 90.0);
        for sector in 0..=sectors {
            let u = sector.to_f32() / sectors.to_f32();
            let longitude = 360.0f32.mul_add(u, -180.0);
            let position = project(latitude, longitude, radius);
            positions.push(position.to_array());
            normals.push(position.normalize_or_zero().to_array());
            uvs.push([u, v]);
        }
    }

    let row = sectors + 1;
    let mut indices = Vec::with_capacity(stacks * sectors * 6);
    for stack in 0..stacks {
        for sector in 0..sectors {
            let top_left = stack * row + sector;
            let bottom_left = top_left + row;
            // counter-clockwise seen from outside
            indices.extend(
                [
                    top_left,
                    bottom_left,
                    top_left + 1,
                    top_left + 1,
                    bottom_left,
                    bottom_left + 1,
                ]
                .map(index_u32),
            );
        }
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "a globe mesh has far fewer than u32::MAX vertices"
)]
const fn index_u32(index: usize) -> u32 { index as u32 }
