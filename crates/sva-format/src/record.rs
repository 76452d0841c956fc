//! Plain serde records, one per spatial value type.
//!
//! Records hold flat arrays only: 3-vectors as `[f64; 3]`, 3x3 matrices as
//! row-major `[f64; 9]`. Inertia records carry the full symmetric matrix;
//! rebuilding goes through the value constructors so the lower-triangular
//! storage is restored.

use crate::error::{FormatError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sva_math::{
    ABInertia, AdmittanceVec, ForceVec, ImpedanceVec, Mat3, Mat6X, MotionVec, PTransform,
    RBInertia, Vec3,
};

/// A value that can cross the persistence boundary.
pub trait Persist: Sized {
    type Record: Serialize + DeserializeOwned + Validate;

    /// Tag written into the envelope.
    const KIND: &'static str;

    fn to_record(&self) -> Self::Record;

    fn from_record(record: Self::Record) -> Result<Self>;
}

/// Record-level checks run before a value is built or written.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn check_finite(field: &'static str, values: &[f64]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(FormatError::NonFinite(field))
    }
}

fn vec3_to_array(v: &Vec3) -> [f64; 3] {
    [v.x, v.y, v.z]
}

fn vec3_from_array(a: &[f64; 3]) -> Vec3 {
    Vec3::new(a[0], a[1], a[2])
}

fn mat3_to_array(m: &Mat3) -> [f64; 9] {
    [
        m[(0, 0)],
        m[(0, 1)],
        m[(0, 2)],
        m[(1, 0)],
        m[(1, 1)],
        m[(1, 2)],
        m[(2, 0)],
        m[(2, 1)],
        m[(2, 2)],
    ]
}

fn mat3_from_array(a: &[f64; 9]) -> Mat3 {
    Mat3::from_row_slice(a)
}

// --- vectors ----------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionRecord {
    pub angular: [f64; 3],
    pub linear: [f64; 3],
}

impl Validate for MotionRecord {
    fn validate(&self) -> Result<()> {
        check_finite("angular", &self.angular)?;
        check_finite("linear", &self.linear)
    }
}

impl Persist for MotionVec {
    type Record = MotionRecord;
    const KIND: &'static str = "motion";

    fn to_record(&self) -> MotionRecord {
        MotionRecord {
            angular: vec3_to_array(&self.angular()),
            linear: vec3_to_array(&self.linear()),
        }
    }

    fn from_record(record: MotionRecord) -> Result<Self> {
        Ok(MotionVec::new(
            vec3_from_array(&record.angular),
            vec3_from_array(&record.linear),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceRecord {
    pub couple: [f64; 3],
    pub force: [f64; 3],
}

impl Validate for ForceRecord {
    fn validate(&self) -> Result<()> {
        check_finite("couple", &self.couple)?;
        check_finite("force", &self.force)
    }
}

impl Persist for ForceVec {
    type Record = ForceRecord;
    const KIND: &'static str = "force";

    fn to_record(&self) -> ForceRecord {
        ForceRecord {
            couple: vec3_to_array(&self.couple()),
            force: vec3_to_array(&self.force()),
        }
    }

    fn from_record(record: ForceRecord) -> Result<Self> {
        Ok(ForceVec::new(
            vec3_from_array(&record.couple),
            vec3_from_array(&record.force),
        ))
    }
}

// --- inertia ----------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RBInertiaRecord {
    pub mass: f64,
    pub momentum: [f64; 3],
    /// Rotational inertia at the origin, row-major.
    pub inertia: [f64; 9],
}

impl Validate for RBInertiaRecord {
    fn validate(&self) -> Result<()> {
        check_finite("mass", &[self.mass])?;
        check_finite("momentum", &self.momentum)?;
        check_finite("inertia", &self.inertia)
    }
}

impl Persist for RBInertia {
    type Record = RBInertiaRecord;
    const KIND: &'static str = "rb_inertia";

    fn to_record(&self) -> RBInertiaRecord {
        RBInertiaRecord {
            mass: self.mass(),
            momentum: vec3_to_array(&self.momentum()),
            inertia: mat3_to_array(&self.inertia()),
        }
    }

    fn from_record(record: RBInertiaRecord) -> Result<Self> {
        Ok(RBInertia::new(
            record.mass,
            vec3_from_array(&record.momentum),
            mat3_from_array(&record.inertia),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ABInertiaRecord {
    pub mass_matrix: [f64; 9],
    pub g_inertia: [f64; 9],
    pub inertia: [f64; 9],
}

impl Validate for ABInertiaRecord {
    fn validate(&self) -> Result<()> {
        check_finite("mass_matrix", &self.mass_matrix)?;
        check_finite("g_inertia", &self.g_inertia)?;
        check_finite("inertia", &self.inertia)
    }
}

impl Persist for ABInertia {
    type Record = ABInertiaRecord;
    const KIND: &'static str = "ab_inertia";

    fn to_record(&self) -> ABInertiaRecord {
        ABInertiaRecord {
            mass_matrix: mat3_to_array(&self.mass_matrix()),
            g_inertia: mat3_to_array(&self.g_inertia()),
            inertia: mat3_to_array(&self.inertia()),
        }
    }

    fn from_record(record: ABInertiaRecord) -> Result<Self> {
        Ok(ABInertia::new(
            &mat3_from_array(&record.mass_matrix),
            &mat3_from_array(&record.g_inertia),
            &mat3_from_array(&record.inertia),
        ))
    }
}

// --- transform --------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PTransformRecord {
    /// Passive rotation, row-major.
    pub rotation: [f64; 9],
    pub translation: [f64; 3],
}

impl Validate for PTransformRecord {
    fn validate(&self) -> Result<()> {
        check_finite("rotation", &self.rotation)?;
        check_finite("translation", &self.translation)
    }
}

impl Persist for PTransform {
    type Record = PTransformRecord;
    const KIND: &'static str = "transform";

    fn to_record(&self) -> PTransformRecord {
        PTransformRecord {
            rotation: mat3_to_array(&self.rotation()),
            translation: vec3_to_array(&self.translation()),
        }
    }

    fn from_record(record: PTransformRecord) -> Result<Self> {
        Ok(PTransform::new(
            mat3_from_array(&record.rotation),
            vec3_from_array(&record.translation),
        ))
    }
}

// --- gains ------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpedanceRecord {
    pub angular: [f64; 3],
    pub linear: [f64; 3],
}

impl Validate for ImpedanceRecord {
    fn validate(&self) -> Result<()> {
        check_finite("angular", &self.angular)?;
        check_finite("linear", &self.linear)
    }
}

impl Persist for ImpedanceVec {
    type Record = ImpedanceRecord;
    const KIND: &'static str = "impedance";

    fn to_record(&self) -> ImpedanceRecord {
        ImpedanceRecord {
            angular: vec3_to_array(&self.angular()),
            linear: vec3_to_array(&self.linear()),
        }
    }

    fn from_record(record: ImpedanceRecord) -> Result<Self> {
        Ok(ImpedanceVec::new(
            vec3_from_array(&record.angular),
            vec3_from_array(&record.linear),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdmittanceRecord {
    pub angular: [f64; 3],
    pub linear: [f64; 3],
}

impl Validate for AdmittanceRecord {
    fn validate(&self) -> Result<()> {
        check_finite("angular", &self.angular)?;
        check_finite("linear", &self.linear)
    }
}

impl Persist for AdmittanceVec {
    type Record = AdmittanceRecord;
    const KIND: &'static str = "admittance";

    fn to_record(&self) -> AdmittanceRecord {
        AdmittanceRecord {
            angular: vec3_to_array(&self.angular()),
            linear: vec3_to_array(&self.linear()),
        }
    }

    fn from_record(record: AdmittanceRecord) -> Result<Self> {
        Ok(AdmittanceVec::new(
            vec3_from_array(&record.angular),
            vec3_from_array(&record.linear),
        ))
    }
}

// --- batches ----------------------------------------------------------------

/// 6xN batch, column-major: `data[6 * j + i]` is row `i` of column `j`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRecord {
    pub columns: usize,
    pub data: Vec<f64>,
}

impl Validate for BatchRecord {
    fn validate(&self) -> Result<()> {
        check_finite("data", &self.data)
    }
}

impl Persist for Mat6X {
    type Record = BatchRecord;
    const KIND: &'static str = "batch6";

    fn to_record(&self) -> BatchRecord {
        BatchRecord {
            columns: self.ncols(),
            data: self.as_slice().to_vec(),
        }
    }

    fn from_record(record: BatchRecord) -> Result<Self> {
        let expected = record.columns.saturating_mul(6);
        if record.data.len() != expected {
            return Err(FormatError::InvalidLength {
                field: "data",
                expected,
                found: record.data.len(),
            });
        }
        Ok(Mat6X::from_column_slice(&record.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym() -> Mat3 {
        Mat3::new(1.0, 2.0, 3.0, 2.0, 1.0, 4.0, 3.0, 4.0, 1.0)
    }

    #[test]
    fn test_matrix_records_are_row_major() {
        let m = Mat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(mat3_to_array(&m), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(mat3_from_array(&mat3_to_array(&m)), m);
    }

    #[test]
    fn test_inertia_record_restores_lower_storage() {
        let rb = RBInertia::new(2.0, Vec3::new(0.1, -0.2, 0.3), sym());
        let record = rb.to_record();
        assert_eq!(record.inertia, mat3_to_array(&sym()));
        let back = RBInertia::from_record(record).unwrap();
        assert_eq!(back, rb);
        assert_eq!(back.lower_triangular_inertia()[(0, 1)], 0.0);
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut record = PTransform::identity().to_record();
        assert!(record.validate().is_ok());
        record.translation[1] = f64::NAN;
        assert!(matches!(record.validate(), Err(FormatError::NonFinite("translation"))));

        let mut record = RBInertia::zero().to_record();
        record.mass = f64::INFINITY;
        assert!(matches!(record.validate(), Err(FormatError::NonFinite("mass"))));
    }

    #[test]
    fn test_batch_record_length_is_checked() {
        let record = BatchRecord {
            columns: 2,
            data: vec![0.0; 11],
        };
        let err = Mat6X::from_record(record).unwrap_err();
        assert!(matches!(
            err,
            FormatError::InvalidLength {
                field: "data",
                expected: 12,
                found: 11
            }
        ));
    }

    #[test]
    fn test_batch_record_is_column_major() {
        let batch = Mat6X::from_fn(2, |i, j| (10 * j + i) as f64);
        let record = batch.to_record();
        assert_eq!(record.columns, 2);
        assert_eq!(record.data[7], 11.0);
        assert_eq!(Mat6X::from_record(record).unwrap(), batch);
    }
}
