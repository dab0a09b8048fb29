//! Terminal rendering of store snapshots.
//!
//! Pure string builders over [`State`]; printing is left to `main`.
//! Diagnosis codes on entries are weak references: a code with no
//! catalogue record is rendered bare and logged, never a crash.

use medrec_core::{Entry, State};
use std::fmt::Write;

/// One line per patient, sorted by id for stable output.
pub fn render_patient_list(state: &State) -> String {
    if state.patients.is_empty() {
        return "No patients found.".to_owned();
    }

    let mut patients: Vec<_> = state.patients.values().collect();
    patients.sort_by(|a, b| a.id.cmp(&b.id));

    let mut out = String::new();
    for patient in patients {
        let _ = writeln!(
            out,
            "{}  {} {}  ({})",
            patient.id,
            patient.name,
            patient.gender.symbol(),
            patient.occupation
        );
    }
    out
}

/// The diagnosis catalogue, sorted by code.
pub fn render_diagnoses(state: &State) -> String {
    if state.diagnoses.is_empty() {
        return "No diagnoses loaded.".to_owned();
    }

    let mut diagnoses: Vec<_> = state.diagnoses.values().collect();
    diagnoses.sort_by(|a, b| a.code.cmp(&b.code));

    let mut out = String::new();
    for diagnosis in diagnoses {
        let _ = writeln!(out, "{}  {}", diagnosis.code, diagnosis.name);
    }
    out
}

/// Full record view for one patient, or `None` when the id is not loaded.
pub fn render_patient(state: &State, id: &str) -> Option<String> {
    let patient = state.patients.get(id)?;

    let mut out = String::new();
    let _ = writeln!(out, "{} {}", patient.name, patient.gender.symbol());
    if let Some(ssn) = &patient.ssn {
        let _ = writeln!(out, "ssn: {ssn}");
    }
    if let Some(date_of_birth) = &patient.date_of_birth {
        let _ = writeln!(out, "born: {date_of_birth}");
    }
    let _ = writeln!(out, "occupation: {}", patient.occupation);

    let _ = writeln!(out, "\nEntries:");
    if patient.entries.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for entry in &patient.entries {
        out.push_str(&render_entry(state, entry));
    }

    Some(out)
}

fn render_entry(state: &State, entry: &Entry) -> String {
    let mut out = String::new();

    match entry {
        Entry::HealthCheck(e) => {
            let _ = writeln!(out, "  {} [health check]", e.date);
            let _ = writeln!(out, "    {}", e.description);
            let _ = writeln!(out, "    health: {}", e.health_check_rating.colour());
        }
        Entry::Hospital(e) => {
            let _ = writeln!(out, "  {} [hospital]", e.date);
            let _ = writeln!(out, "    {}", e.description);
            let _ = writeln!(out, "    discharged {}: {}", e.discharge.date, e.discharge.criteria);
        }
        Entry::OccupationalHealthcare(e) => {
            let _ = writeln!(out, "  {} [occupational healthcare] {}", e.date, e.employer_name);
            let _ = writeln!(out, "    {}", e.description);
            if let Some(leave) = &e.sick_leave {
                let _ = writeln!(out, "    sick leave: {} to {}", leave.start_date, leave.end_date);
            }
        }
    }

    let _ = writeln!(out, "    specialist: {}", entry.specialist());

    if let Some(codes) = entry.diagnosis_codes() {
        for code in codes {
            match state.diagnoses.get(code) {
                Some(diagnosis) => {
                    let _ = writeln!(out, "    - {} {}", code, diagnosis.name);
                }
                None => {
                    tracing::warn!(code = %code, "entry references unknown diagnosis code");
                    let _ = writeln!(out, "    - {code}");
                }
            }
        }
    }

    out
}
