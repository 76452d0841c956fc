//! Persistence for spatial algebra values.
//!
//! Each value type maps to a plain record of flat `f64` arrays, wrapped in a
//! tagged JSON envelope. Round-trips are bit-exact.

pub mod codec;
pub mod error;
pub mod record;

pub use codec::{
    Envelope, FormatConfig, deserialize, deserialize_seq, deserialize_with, load, save, serialize,
    serialize_seq, serialize_with,
};
pub use error::{FormatError, Result};
pub use record::{
    ABInertiaRecord, AdmittanceRecord, BatchRecord, ForceRecord, ImpedanceRecord, MotionRecord,
    PTransformRecord, Persist, RBInertiaRecord, Validate,
};
