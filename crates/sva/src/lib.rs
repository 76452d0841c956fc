//! sva: spatial vector algebra for rigid-body dynamics.
//!
//! This is the umbrella crate: it re-exports the numeric core from
//! `sva-math` and the persistence layer from `sva-format`.

pub use sva_format::{
    self, FormatConfig, FormatError, Persist, deserialize, deserialize_seq, load, save, serialize,
    serialize_seq,
};
pub use sva_math::{
    self, ABInertia, AdmittanceVec, ForceVec, Handedness, ImpedanceVec, Mat3, Mat4, Mat6, Mat6X,
    MotionVec, MotionVecSeq, PTransform, PTransformSeq, Quat, RBInertia, SpatialSeq, Vec3, Vec6,
    cross, cross_dual, cross_dual_matrix6, cross_matrix6, dot, from_homogeneous, inertia_to_origin,
    interpolate, lower_from_symmetric, rot_x, rot_y, rot_z, rotation_error, rotation_velocity,
    sinc_inv, skew, symmetric_from_lower, to_homogeneous, transform_error, transform_velocity,
};
