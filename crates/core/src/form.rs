//! Raw entry form and the per-variant builder.
//!
//! The form layer collects one flat set of fields regardless of which entry
//! kind the user picked; [`build_entry`] dispatches on the raw discriminant
//! and constructs the matching [`Entry`] variant, or reports a structured
//! field-level failure. It is a pure function: no I/O, no side effects.
//!
//! Common fields (date, specialist, description) are validated by the
//! surrounding form layer before this stage. The builder passes them
//! through unchanged and tolerates empty strings.

use crate::entry::{
    Discharge, Entry, EntryKind, HealthCheckEntry, HospitalEntry, OccupationalHealthcareEntry,
    SickLeave,
};
use medrec_types::{DiagnosisCode, HealthCheckRating};
use uuid::Uuid;

/// Raw form values: the union of all variant fields, each optionally empty.
#[derive(Clone, Debug, Default)]
pub struct EntryForm {
    /// Raw `type` discriminant as chosen in the form.
    pub kind: String,
    pub date: String,
    pub specialist: String,
    pub description: String,
    /// Raw diagnosis codes; blanks are ignored, the rest must parse.
    pub diagnosis_codes: Vec<String>,
    /// `None` when the rating field was left unset. `Some(0)` is a valid
    /// rating, not a missing one.
    pub health_check_rating: Option<u8>,
    pub discharge_date: String,
    pub discharge_criteria: String,
    pub employer_name: String,
    pub sick_leave_start: String,
    pub sick_leave_end: String,
}

/// A field-level reason why raw form values could not become an entry.
///
/// These are recovered locally and shown to the user; they never abort the
/// process.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("unknown entry type: {0:?}")]
    UnknownType(String),
    #[error("missing required field: {field}")]
    MissingRequiredField { field: &'static str },
    #[error("invalid value for {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

/// Builds a well-typed entry from raw form values.
///
/// The built entry carries a locally generated placeholder id; the record
/// service assigns the durable id on successful persistence and only the
/// service's entry is dispatched into the store.
///
/// # Errors
///
/// Returns a [`ValidationFailure`] when the discriminant is not one of the
/// three supported kinds, a variant-required field is absent, the rating is
/// out of range, or a diagnosis code is malformed.
pub fn build_entry(form: &EntryForm) -> Result<Entry, ValidationFailure> {
    let kind = EntryKind::from_wire(&form.kind)
        .ok_or_else(|| ValidationFailure::UnknownType(form.kind.clone()))?;

    let diagnosis_codes = parse_diagnosis_codes(&form.diagnosis_codes)?;
    let id = placeholder_id();

    match kind {
        EntryKind::HealthCheck => {
            let raw = form
                .health_check_rating
                .ok_or(ValidationFailure::MissingRequiredField {
                    field: "healthCheckRating",
                })?;
            let rating = HealthCheckRating::try_from(raw).map_err(|err| {
                ValidationFailure::InvalidField {
                    field: "healthCheckRating",
                    reason: err.to_string(),
                }
            })?;

            Ok(Entry::HealthCheck(HealthCheckEntry {
                id,
                date: form.date.clone(),
                specialist: form.specialist.clone(),
                description: form.description.clone(),
                diagnosis_codes,
                health_check_rating: rating,
            }))
        }
        EntryKind::Hospital => {
            if form.discharge_date.trim().is_empty() || form.discharge_criteria.trim().is_empty() {
                return Err(ValidationFailure::MissingRequiredField { field: "discharge" });
            }

            Ok(Entry::Hospital(HospitalEntry {
                id,
                date: form.date.clone(),
                specialist: form.specialist.clone(),
                description: form.description.clone(),
                diagnosis_codes,
                discharge: Discharge {
                    date: form.discharge_date.clone(),
                    criteria: form.discharge_criteria.clone(),
                },
            }))
        }
        EntryKind::OccupationalHealthcare => {
            if form.employer_name.trim().is_empty() {
                return Err(ValidationFailure::MissingRequiredField {
                    field: "employerName",
                });
            }

            // A half-filled sick leave range is dropped, not rejected.
            let sick_leave = if !form.sick_leave_start.trim().is_empty()
                && !form.sick_leave_end.trim().is_empty()
            {
                Some(SickLeave {
                    start_date: form.sick_leave_start.clone(),
                    end_date: form.sick_leave_end.clone(),
                })
            } else {
                None
            };

            Ok(Entry::OccupationalHealthcare(OccupationalHealthcareEntry {
                id,
                date: form.date.clone(),
                specialist: form.specialist.clone(),
                description: form.description.clone(),
                diagnosis_codes,
                employer_name: form.employer_name.clone(),
                sick_leave,
            }))
        }
    }
}

/// Parses raw diagnosis codes, ignoring blanks. An empty result becomes
/// `None` so the entry carries no empty-vs-missing ambiguity.
fn parse_diagnosis_codes(
    raw: &[String],
) -> Result<Option<Vec<DiagnosisCode>>, ValidationFailure> {
    let codes = raw
        .iter()
        .filter(|raw_code| !raw_code.trim().is_empty())
        .map(|raw_code| {
            DiagnosisCode::parse(raw_code).map_err(|err| ValidationFailure::InvalidField {
                field: "diagnosisCodes",
                reason: format!("{raw_code:?}: {err}"),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(if codes.is_empty() { None } else { Some(codes) })
}

fn placeholder_id() -> String {
    format!("local-{}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn health_check_form(rating: Option<u8>) -> EntryForm {
        EntryForm {
            kind: "HealthCheck".into(),
            date: "2023-03-01".into(),
            specialist: "MD House".into(),
            description: "Yearly control visit.".into(),
            health_check_rating: rating,
            ..EntryForm::default()
        }
    }

    #[test]
    fn test_health_check_builds_with_exact_rating() {
        for raw in 0..=3u8 {
            let entry = build_entry(&health_check_form(Some(raw))).expect("should build");
            match entry {
                Entry::HealthCheck(e) => assert_eq!(e.health_check_rating.as_u8(), raw),
                other => panic!("expected HealthCheck, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_health_check_without_rating_fails() {
        let err = build_entry(&health_check_form(None)).expect_err("missing rating should fail");
        assert_eq!(
            err,
            ValidationFailure::MissingRequiredField {
                field: "healthCheckRating"
            }
        );
    }

    #[test]
    fn test_health_check_rating_out_of_range_fails() {
        let err = build_entry(&health_check_form(Some(9))).expect_err("rating 9 should fail");
        assert!(matches!(
            err,
            ValidationFailure::InvalidField {
                field: "healthCheckRating",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_type_fails() {
        let form = EntryForm {
            kind: "DentalVisit".into(),
            ..EntryForm::default()
        };
        let err = build_entry(&form).expect_err("unknown type should fail");
        assert_eq!(err, ValidationFailure::UnknownType("DentalVisit".into()));
    }

    #[test]
    fn test_hospital_requires_both_discharge_fields() {
        let base = EntryForm {
            kind: "Hospital".into(),
            date: "2023-03-01".into(),
            specialist: "MD House".into(),
            description: "Broken thumb".into(),
            ..EntryForm::default()
        };

        let missing_both = build_entry(&base).expect_err("no discharge should fail");
        assert_eq!(
            missing_both,
            ValidationFailure::MissingRequiredField { field: "discharge" }
        );

        let missing_criteria = EntryForm {
            discharge_date: "2023-03-15".into(),
            ..base.clone()
        };
        build_entry(&missing_criteria).expect_err("date alone should fail");

        let missing_date = EntryForm {
            discharge_criteria: "Thumb has healed.".into(),
            ..base.clone()
        };
        build_entry(&missing_date).expect_err("criteria alone should fail");

        let complete = EntryForm {
            discharge_date: "2023-03-15".into(),
            discharge_criteria: "Thumb has healed.".into(),
            ..base
        };
        let entry = build_entry(&complete).expect("complete discharge should build");
        match entry {
            Entry::Hospital(e) => {
                assert_eq!(e.discharge.date, "2023-03-15");
                assert_eq!(e.discharge.criteria, "Thumb has healed.");
            }
            other => panic!("expected Hospital, got {other:?}"),
        }
    }

    #[test]
    fn test_occupational_requires_employer() {
        let form = EntryForm {
            kind: "OccupationalHealthcare".into(),
            date: "2023-03-01".into(),
            specialist: "MD House".into(),
            description: "Shoulder strain".into(),
            ..EntryForm::default()
        };
        let err = build_entry(&form).expect_err("missing employer should fail");
        assert_eq!(
            err,
            ValidationFailure::MissingRequiredField {
                field: "employerName"
            }
        );
    }

    #[test]
    fn test_one_sided_sick_leave_is_dropped() {
        let base = EntryForm {
            kind: "OccupationalHealthcare".into(),
            date: "2023-03-01".into(),
            specialist: "MD House".into(),
            description: "Shoulder strain".into(),
            employer_name: "HyPD".into(),
            ..EntryForm::default()
        };

        for (start, end) in [("2023-03-01", ""), ("", "2023-03-08")] {
            let form = EntryForm {
                sick_leave_start: start.into(),
                sick_leave_end: end.into(),
                ..base.clone()
            };
            let entry = build_entry(&form).expect("should build without sick leave");
            match entry {
                Entry::OccupationalHealthcare(e) => assert!(e.sick_leave.is_none()),
                other => panic!("expected OccupationalHealthcare, got {other:?}"),
            }
        }

        let full = EntryForm {
            sick_leave_start: "2023-03-01".into(),
            sick_leave_end: "2023-03-08".into(),
            ..base
        };
        match build_entry(&full).expect("should build with sick leave") {
            Entry::OccupationalHealthcare(e) => {
                let leave = e.sick_leave.expect("sick leave should be attached");
                assert_eq!(leave.start_date, "2023-03-01");
                assert_eq!(leave.end_date, "2023-03-08");
            }
            other => panic!("expected OccupationalHealthcare, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_common_fields_pass_through() {
        let form = EntryForm {
            kind: "HealthCheck".into(),
            health_check_rating: Some(1),
            ..EntryForm::default()
        };
        let entry = build_entry(&form).expect("empty common fields should not fail");
        assert_eq!(entry.date(), "");
        assert_eq!(entry.specialist(), "");
        assert_eq!(entry.description(), "");
    }

    #[test]
    fn test_diagnosis_codes_are_parsed_and_blanks_ignored() {
        let form = EntryForm {
            kind: "HealthCheck".into(),
            health_check_rating: Some(0),
            diagnosis_codes: vec!["M24.2".into(), "".into(), " Z57.1 ".into()],
            ..EntryForm::default()
        };
        let entry = build_entry(&form).expect("should build");
        let codes = entry.diagnosis_codes().expect("codes should be present");
        assert_eq!(codes.len(), 2);
        assert_eq!(codes[0].as_str(), "M24.2");
        assert_eq!(codes[1].as_str(), "Z57.1");
    }

    #[test]
    fn test_no_diagnosis_codes_means_none() {
        let form = EntryForm {
            kind: "HealthCheck".into(),
            health_check_rating: Some(0),
            diagnosis_codes: vec!["".into()],
            ..EntryForm::default()
        };
        let entry = build_entry(&form).expect("should build");
        assert!(entry.diagnosis_codes().is_none());
    }

    #[test]
    fn test_malformed_diagnosis_code_fails() {
        let form = EntryForm {
            kind: "HealthCheck".into(),
            health_check_rating: Some(0),
            diagnosis_codes: vec!["not a code!".into()],
            ..EntryForm::default()
        };
        let err = build_entry(&form).expect_err("malformed code should fail");
        assert!(matches!(
            err,
            ValidationFailure::InvalidField {
                field: "diagnosisCodes",
                ..
            }
        ));
    }

    #[test]
    fn test_built_entry_carries_placeholder_id() {
        let entry = build_entry(&health_check_form(Some(2))).expect("should build");
        assert!(entry.id().starts_with("local-"));
    }
}
