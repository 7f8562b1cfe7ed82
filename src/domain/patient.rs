//! Patient record types for admission forecasting and analytics.
//!
//! Records are immutable once loaded and are owned by the dataset that
//! contains them.

use serde::{Deserialize, Serialize};

/// Severity classification assigned at admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Routine admission, no acute indicators
    Mild,
    /// Requires active monitoring
    Moderate,
    /// Critical condition, intensive care likely
    Severe,
}

impl Severity {
    /// Stable lowercase label matching the wire format.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome recorded when a patient leaves the ward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Discharged after recovery
    Recovered,
    /// Moved to another facility or ward
    Transferred,
    /// Died during the stay
    Deceased,
}

impl Outcome {
    /// Stable lowercase label matching the wire format.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recovered => "recovered",
            Self::Transferred => "transferred",
            Self::Deceased => "deceased",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single admission record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Age in years at admission
    pub age: u32,

    /// Length of stay in days (fractional stays allowed)
    pub length_of_stay: f64,

    /// Severity at admission
    pub severity: Severity,

    /// Admitting department label
    pub department: String,

    /// Outcome at the end of the stay
    pub outcome: Outcome,
}

impl PatientRecord {
    /// Create a new patient record.
    #[must_use]
    pub fn new(
        age: u32,
        length_of_stay: f64,
        severity: Severity,
        department: impl Into<String>,
        outcome: Outcome,
    ) -> Self {
        Self {
            age,
            length_of_stay,
            severity,
            department: department.into(),
            outcome,
        }
    }

    /// Validate that all fields are within expected ranges.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.age > 120 {
            errors.push(format!("Age {} out of range [0, 120]", self.age));
        }
        if !self.length_of_stay.is_finite() || self.length_of_stay < 0.0 {
            errors.push(format!(
                "Length of stay {} must be a non-negative number",
                self.length_of_stay
            ));
        }
        if self.department.trim().is_empty() {
            errors.push("Department must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_record() {
        let record = PatientRecord::new(45, 5.0, Severity::Moderate, "Cardiology", Outcome::Recovered);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_invalid_record_collects_all_errors() {
        let record = PatientRecord::new(200, f64::NAN, Severity::Severe, "  ", Outcome::Deceased);
        let errors = record.validate().expect_err("Should reject record");
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_enum_wire_names() {
        let json = serde_json::to_string(&Severity::Moderate).expect("Should serialize");
        assert_eq!(json, "\"moderate\"");
        let json = serde_json::to_string(&Outcome::Recovered).expect("Should serialize");
        assert_eq!(json, "\"recovered\"");
    }

    #[test]
    fn test_record_round_trip() {
        let record = PatientRecord::new(62, 8.0, Severity::Severe, "Pulmonology", Outcome::Recovered);
        let json = serde_json::to_string(&record).expect("Should serialize");
        assert!(json.contains("\"length_of_stay\":8.0"));
        let back: PatientRecord = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(back.department, "Pulmonology");
        assert_eq!(back.severity, Severity::Severe);
    }
}
