//! Instance data structures for GPU upload.
//!
//! Every extracted box is drawn as one scaled unit cube. Boxes of the same
//! size share a batch so each distinct shape costs one instanced draw call.

use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};
use voxenv_core::{BoundingBox, VoxelState};
use voxenv_layout::Primitive;

/// Floor and wall colour (`#a5c9ea`).
pub const LAYOUT_COLOR: u32 = 0x00a5_c9ea;

/// Exit pad colour (`#4caf50`).
pub const EXIT_COLOR: u32 = 0x004c_af50;

/// Per-instance data sent to the GPU.
///
/// The vertex shader expects a cube spanning `[-1, 1]` on every axis, so
/// `scale` holds half extents.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct InstanceData {
    /// Half extents in world units.
    pub scale: [f32; 3],
    /// Box centre in world units.
    pub translation: [f32; 3],
    /// Linear RGB.
    pub color: [f32; 3],
}

impl InstanceData {
    /// Size in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Instance covering the cells of `bounds`.
    ///
    /// Cell `c` spans `[c, c + 1)`, so the centre sits half a unit above the
    /// midpoint of the inclusive corners.
    #[must_use]
    pub fn from_box(bounds: &BoundingBox, color: [f32; 3]) -> Self {
        let [sx, sy, sz] = bounds.size();
        let (min, max) = (bounds.min, bounds.max);
        let centre = |lo: i32, hi: i32| (f64::from(lo) + f64::from(hi)) as f32 / 2.0 + 0.5;

        Self {
            scale: [sx as f32 / 2.0, sy as f32 / 2.0, sz as f32 / 2.0],
            translation: [
                centre(min.x, max.x),
                centre(min.y, max.y),
                centre(min.z, max.z),
            ],
            color,
        }
    }

    /// Sets the colour for this instance.
    #[must_use]
    pub const fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }
}

/// Converts `0xRRGGBB` to float RGB.
#[must_use]
pub fn rgb(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| f32::from(((hex >> shift) & 0xff) as u8) / 255.0;
    [channel(16), channel(8), channel(0)]
}

/// Display colour for a classification. Empty cells are never drawn.
#[must_use]
pub fn state_color(state: VoxelState) -> [f32; 3] {
    match state {
        VoxelState::Empty => [0.0; 3],
        VoxelState::Floor | VoxelState::Wall => rgb(LAYOUT_COLOR),
        VoxelState::Exit => rgb(EXIT_COLOR),
    }
}

/// Instances sharing one box shape.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceBatch {
    /// Cells along each axis shared by every instance.
    pub size: [u32; 3],
    /// One entry per box, in extraction order.
    pub instances: Vec<InstanceData>,
}

impl InstanceBatch {
    /// Number of instances to draw.
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Raw bytes for the instance buffer.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

/// Groups primitives into per-shape batches, ordered by first appearance.
#[must_use]
pub fn batch_instances(primitives: &[Primitive]) -> Vec<InstanceBatch> {
    let mut batches: Vec<InstanceBatch> = Vec::new();
    let mut by_size: HashMap<[u32; 3], usize> = HashMap::new();

    for prim in primitives {
        let size = prim.bounds.size();
        let slot = *by_size.entry(size).or_insert_with(|| {
            batches.push(InstanceBatch {
                size,
                instances: Vec::new(),
            });
            batches.len() - 1
        });
        batches[slot]
            .instances
            .push(InstanceData::from_box(&prim.bounds, state_color(prim.state)));
    }

    tracing::debug!(
        "Batched {} primitives into {} draw calls",
        primitives.len(),
        batches.len()
    );
    batches
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxenv_core::VoxelCoords;

    fn prim(min: (i32, i32, i32), max: (i32, i32, i32), state: VoxelState) -> Primitive {
        Primitive {
            bounds: BoundingBox::new(min.into(), max.into()),
            state,
        }
    }

    #[test]
    fn test_instance_size() {
        assert_eq!(InstanceData::SIZE, 36);
    }

    #[test]
    fn test_floor_slab_transform() {
        let bounds = BoundingBox::new(VoxelCoords::new(0, 0, 0), VoxelCoords::new(4, 0, 3));
        let instance = InstanceData::from_box(&bounds, rgb(LAYOUT_COLOR));

        assert_eq!(instance.scale, [2.5, 0.5, 2.0]);
        assert_eq!(instance.translation, [2.5, 0.5, 2.0]);
    }

    #[test]
    fn test_single_cell_transform() {
        let bounds = BoundingBox::from_point(VoxelCoords::new(3, 1, -2));
        let instance = InstanceData::from_box(&bounds, [1.0, 0.0, 0.0]);

        assert_eq!(instance.scale, [0.5, 0.5, 0.5]);
        assert_eq!(instance.translation, [3.5, 1.5, -1.5]);
    }

    #[test]
    fn test_layout_color() {
        let [r, g, b] = rgb(LAYOUT_COLOR);

        assert!((r - 165.0 / 255.0).abs() < f32::EPSILON);
        assert!((g - 201.0 / 255.0).abs() < f32::EPSILON);
        assert!((b - 234.0 / 255.0).abs() < f32::EPSILON);
        assert_eq!(state_color(VoxelState::Floor), state_color(VoxelState::Wall));
        assert_ne!(state_color(VoxelState::Exit), state_color(VoxelState::Wall));
    }

    #[test]
    fn test_batches_group_by_shape() {
        let prims = [
            prim((0, 1, 0), (0, 3, 3), VoxelState::Wall),
            prim((1, 1, 0), (4, 3, 0), VoxelState::Wall),
            prim((4, 1, 0), (4, 3, 3), VoxelState::Wall),
            prim((1, 1, 3), (4, 3, 3), VoxelState::Wall),
        ];

        let batches = batch_instances(&prims);

        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].size, [1, 3, 4]);
        assert_eq!(batches[0].instance_count(), 2);
        assert_eq!(batches[1].size, [4, 3, 1]);
        assert_eq!(batches[1].instance_count(), 2);
        assert_eq!(batches[1].instances[1].translation, [3.0, 2.5, 3.5]);
    }

    #[test]
    fn test_batch_bytes() {
        let batches = batch_instances(&[prim((0, 0, 0), (1, 1, 1), VoxelState::Exit)]);

        assert_eq!(batches[0].as_bytes().len(), InstanceData::SIZE);
        assert_eq!(batches[0].instances[0].color, rgb(EXIT_COLOR));
    }

    #[test]
    fn test_empty_input() {
        assert!(batch_instances(&[]).is_empty());
    }
}
