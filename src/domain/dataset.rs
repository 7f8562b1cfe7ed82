//! Named hospital datasets: patient records plus resource capacity figures.
//!
//! A dataset is selected, never mutated, by the caller. Several named
//! datasets coexist; exactly one is active per forecasting session.

use serde::{Deserialize, Serialize};

use super::patient::{Outcome, PatientRecord, Severity};

/// Error type for dataset validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DatasetError {
    #[error("Patient record {index}: {reasons}")]
    InvalidRecord { index: usize, reasons: String },

    #[error("Resource '{kind}' over capacity: {current}/{capacity}")]
    OverCapacity {
        kind: &'static str,
        current: u32,
        capacity: u32,
    },
}

/// Current usage and capacity of one resource kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResourceLevel {
    /// Units currently in use
    pub current: u32,

    /// Total units available
    pub capacity: u32,
}

impl ResourceLevel {
    /// Create a new resource level.
    #[must_use]
    pub fn new(current: u32, capacity: u32) -> Self {
        Self { current, capacity }
    }

    /// Fraction of capacity in use (0.0 when capacity is zero).
    #[must_use]
    pub fn utilization(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            f64::from(self.current) / f64::from(self.capacity)
        }
    }
}

/// Resource capacity figures tracked per dataset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResourceInventory {
    /// Intensive-care beds
    pub icu_beds: ResourceLevel,

    /// Clinical staff on shift
    pub staff: ResourceLevel,

    /// Ventilator units
    pub ventilators: ResourceLevel,
}

/// A named bundle of patient records and resource figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Display name (e.g. "General Hospital")
    pub name: String,

    /// Admission records, in load order
    pub patients: Vec<PatientRecord>,

    /// Resource usage and capacity
    pub resources: ResourceInventory,
}

impl Dataset {
    /// Create a new dataset.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        patients: Vec<PatientRecord>,
        resources: ResourceInventory,
    ) -> Self {
        Self {
            name: name.into(),
            patients,
            resources,
        }
    }

    /// Validate every record and resource level.
    ///
    /// # Errors
    /// Returns the first offending record or over-capacity resource.
    pub fn validate(&self) -> Result<(), DatasetError> {
        for (index, patient) in self.patients.iter().enumerate() {
            if let Err(reasons) = patient.validate() {
                return Err(DatasetError::InvalidRecord {
                    index,
                    reasons: reasons.join("; "),
                });
            }
        }

        for (kind, level) in [
            ("icu_beds", self.resources.icu_beds),
            ("staff", self.resources.staff),
            ("ventilators", self.resources.ventilators),
        ] {
            if level.current > level.capacity {
                return Err(DatasetError::OverCapacity {
                    kind,
                    current: level.current,
                    capacity: level.capacity,
                });
            }
        }

        Ok(())
    }

    /// Content fingerprint identifying what a forecaster was trained on.
    ///
    /// SHA-256 over the name, every record field and the resource figures,
    /// truncated to 64 bits of hex. Equal content yields equal fingerprints.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        hasher.update(self.name.as_bytes());
        hasher.update((self.patients.len() as u64).to_le_bytes());
        for patient in &self.patients {
            hasher.update(patient.age.to_le_bytes());
            hasher.update(patient.length_of_stay.to_bits().to_le_bytes());
            hasher.update(patient.severity.as_str().as_bytes());
            hasher.update(patient.department.as_bytes());
            hasher.update(patient.outcome.as_str().as_bytes());
        }
        for level in [
            self.resources.icu_beds,
            self.resources.staff,
            self.resources.ventilators,
        ] {
            hasher.update(level.current.to_le_bytes());
            hasher.update(level.capacity.to_le_bytes());
        }
        let result = hasher.finalize();

        result[..8]
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join("")
    }

    /// The general hospital dataset from the standard catalog.
    #[must_use]
    pub fn general_hospital() -> Self {
        Self::new(
            "General Hospital",
            vec![
                PatientRecord::new(45, 5.0, Severity::Moderate, "Cardiology", Outcome::Recovered),
                PatientRecord::new(62, 8.0, Severity::Severe, "Pulmonology", Outcome::Recovered),
            ],
            ResourceInventory {
                icu_beds: ResourceLevel::new(18, 25),
                staff: ResourceLevel::new(45, 55),
                ventilators: ResourceLevel::new(12, 20),
            },
        )
    }

    /// The specialty clinic dataset from the standard catalog.
    #[must_use]
    pub fn specialty_clinic() -> Self {
        Self::new(
            "Specialty Clinic",
            vec![
                PatientRecord::new(35, 3.0, Severity::Mild, "Orthopedics", Outcome::Recovered),
                PatientRecord::new(58, 6.0, Severity::Moderate, "Neurology", Outcome::Transferred),
            ],
            ResourceInventory {
                icu_beds: ResourceLevel::new(12, 15),
                staff: ResourceLevel::new(30, 40),
                ventilators: ResourceLevel::new(8, 10),
            },
        )
    }

    /// The emergency center dataset from the standard catalog.
    #[must_use]
    pub fn emergency_center() -> Self {
        Self::new(
            "Emergency Center",
            vec![
                PatientRecord::new(28, 2.0, Severity::Severe, "ICU", Outcome::Recovered),
                PatientRecord::new(75, 10.0, Severity::Severe, "Cardiology", Outcome::Deceased),
            ],
            ResourceInventory {
                icu_beds: ResourceLevel::new(25, 30),
                staff: ResourceLevel::new(60, 75),
                ventilators: ResourceLevel::new(20, 25),
            },
        )
    }

    /// All datasets in the standard catalog.
    #[must_use]
    pub fn catalog() -> Vec<Self> {
        vec![
            Self::general_hospital(),
            Self::specialty_clinic(),
            Self::emergency_center(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_datasets_are_valid() {
        let catalog = Dataset::catalog();
        assert_eq!(catalog.len(), 3);
        for dataset in &catalog {
            dataset.validate().expect("Catalog dataset should validate");
        }
        let names: Vec<_> = catalog.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            ["General Hospital", "Specialty Clinic", "Emergency Center"]
        );
    }

    #[test]
    fn test_fingerprint_is_stable_and_content_sensitive() {
        let a = Dataset::general_hospital();
        let b = Dataset::general_hospital();
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().len(), 16);

        let c = Dataset::emergency_center();
        assert_ne!(a.fingerprint(), c.fingerprint());

        let mut d = Dataset::general_hospital();
        d.patients[0].age += 1;
        assert_ne!(a.fingerprint(), d.fingerprint());
    }

    #[test]
    fn test_over_capacity_is_rejected() {
        let mut dataset = Dataset::general_hospital();
        dataset.resources.ventilators = ResourceLevel::new(30, 20);
        let err = dataset.validate().expect_err("Should reject over-capacity");
        assert!(matches!(err, DatasetError::OverCapacity { kind: "ventilators", .. }));
    }

    #[test]
    fn test_invalid_record_is_reported_with_index() {
        let mut dataset = Dataset::specialty_clinic();
        dataset.patients[1].department = String::new();
        let err = dataset.validate().expect_err("Should reject record");
        assert!(matches!(err, DatasetError::InvalidRecord { index: 1, .. }));
    }

    #[test]
    fn test_utilization() {
        assert!((ResourceLevel::new(18, 25).utilization() - 0.72).abs() < 1e-9);
        assert!((ResourceLevel::new(5, 0).utilization()).abs() < f64::EPSILON);
    }
}
