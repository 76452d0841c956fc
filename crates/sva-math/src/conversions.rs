//! Conversion between [`PTransform`] and 4x4 homogeneous matrices.

use crate::{Mat3, Mat4, PTransform, Vec3};

/// Convention used by the homogeneous matrix.
///
/// `Right` is the usual robotics convention where the 3x3 block is an
/// active rotation; since [`PTransform`] stores passive rotations the block
/// is the transpose of [`PTransform::rotation`]. `Left` stores the rotation
/// as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Handedness {
    #[default]
    Right,
    Left,
}

/// 4x4 homogeneous form of `pt`.
pub fn to_homogeneous(pt: &PTransform, handedness: Handedness) -> Mat4 {
    let block = match handedness {
        Handedness::Right => pt.rotation().transpose(),
        Handedness::Left => pt.rotation(),
    };
    let mut m = Mat4::identity();
    m.fixed_view_mut::<3, 3>(0, 0).copy_from(&block);
    m.fixed_view_mut::<3, 1>(0, 3).copy_from(&pt.translation());
    m
}

/// Inverse of [`to_homogeneous`]. The bottom row of `m` is ignored.
pub fn from_homogeneous(m: &Mat4, handedness: Handedness) -> PTransform {
    let block: Mat3 = m.fixed_view::<3, 3>(0, 0).into_owned();
    let trans: Vec3 = m.fixed_view::<3, 1>(0, 3).into_owned();
    let rot = match handedness {
        Handedness::Right => block.transpose(),
        Handedness::Left => block,
    };
    PTransform::new(rot, trans)
}
