//! CSV extraction and raw-row transforms.
//!
//! Everything here turns flat CSV exports into the typed rows and lookup
//! tables the enrichment stages consume. Column names must match the saved
//! portal reports exactly; a missing column is a hard stop.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::info;

use crate::constants::*;
use crate::domain::{EducationRecord, StudentRecord};
use crate::error::{EtlError, Result};
use crate::pipeline::enrich::{AthleteLookup, MajorLookup};

/// One student as assembled from the portal export, before enrichment.
/// The export has one row per (student, major); rows are merged by username.
#[derive(Debug, Clone, Default)]
pub struct RawStudentRow {
    pub handshake_username: String,
    pub handshake_id: String,
    pub email: String,
    pub first_name: String,
    pub legal_first_name: String,
    pub pref_first_name: String,
    pub last_name: String,
    pub school_year: String,
    pub majors: Vec<String>,
    pub is_pre_med: bool,
    pub has_activated_handshake: bool,
    pub has_completed_profile: bool,
    pub is_pell_eligible: bool,
    pub is_urm: bool,
    pub is_first_generation: bool,
    pub is_in_sli_org: bool,
}

fn to_option(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl RawStudentRow {
    pub fn to_student_record(&self) -> StudentRecord {
        let mut student = StudentRecord::new();
        student.handshake_username = to_option(&self.handshake_username);
        student.handshake_id = to_option(&self.handshake_id);
        student.email = to_option(&self.email);
        student.first_name = to_option(&self.first_name);
        student.legal_first_name = to_option(&self.legal_first_name);
        student.pref_first_name = to_option(&self.pref_first_name);
        student.last_name = to_option(&self.last_name);
        student.school_year = to_option(&self.school_year);
        student.is_pre_med = self.is_pre_med;
        student.has_activated_handshake = self.has_activated_handshake;
        student.has_completed_profile = self.has_completed_profile;
        student.is_pell_eligible = self.is_pell_eligible;
        student.is_urm = self.is_urm;
        student.is_first_generation = self.is_first_generation;
        student.is_in_sli_org = self.is_in_sli_org;
        student
    }
}

/// Pell/URM/first-generation flags per username
#[derive(Debug, Clone, Copy, Default)]
pub struct DemographicFlags {
    pub is_pell_eligible: bool,
    pub is_urm: bool,
    pub is_first_generation: bool,
}

pub type DemographicLookup = HashMap<String, DemographicFlags>;
pub type SliRoster = HashSet<String>;

/// Read a CSV file into one string map per row, keyed by header name.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Vec<HashMap<String, String>>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.to_string(), v.to_string()))
            .collect();
        rows.push(row);
    }
    info!(path = %path.as_ref().display(), rows = rows.len(), "read csv");
    Ok(rows)
}

fn field<'a>(row: &'a HashMap<String, String>, column: &str) -> Result<&'a str> {
    row.get(column)
        .map(String::as_str)
        .ok_or_else(|| EtlError::MissingColumn(column.to_string()))
}

fn yes_no(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("yes")
}

fn true_false(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// Merge the one-row-per-(student, major) portal export into one
/// `RawStudentRow` per student.
///
/// The first row seen for a username supplies the identity fields; later
/// rows only contribute additional majors. Display first name is the
/// preferred name when present, else the legal name.
pub fn transform_handshake_data(rows: &[HashMap<String, String>]) -> Result<Vec<RawStudentRow>> {
    let mut students: Vec<RawStudentRow> = Vec::new();
    let mut index_by_username: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let username = field(row, USERNAME_COL)?.to_string();
        let major = field(row, MAJOR_COL)?.trim().to_string();

        if let Some(&i) = index_by_username.get(&username) {
            let majors = &mut students[i].majors;
            if !major.is_empty() && !majors.contains(&major) {
                majors.push(major);
            }
            continue;
        }

        let legal_first_name = field(row, FIRST_NAME_COL)?.to_string();
        let pref_first_name = field(row, PREF_NAME_COL)?.to_string();
        let first_name = if pref_first_name.trim().is_empty() {
            legal_first_name.clone()
        } else {
            pref_first_name.clone()
        };
        let labels = field(row, LABELS_COL)?.to_lowercase();

        let student = RawStudentRow {
            handshake_username: username.clone(),
            handshake_id: field(row, ID_COL)?.to_string(),
            email: field(row, EMAIL_COL)?.to_string(),
            first_name,
            legal_first_name,
            pref_first_name,
            last_name: field(row, LAST_NAME_COL)?.to_string(),
            school_year: field(row, SCHOOL_YEAR_COL)?.to_string(),
            majors: if major.is_empty() { vec![] } else { vec![major] },
            is_pre_med: labels.contains(PRE_MED_LABEL),
            has_activated_handshake: yes_no(field(row, HAS_LOGGED_IN_COL)?),
            has_completed_profile: yes_no(field(row, HAS_COMPLETED_PROFILE_COL)?),
            ..RawStudentRow::default()
        };
        index_by_username.insert(username, students.len());
        students.push(student);
    }

    info!(students = students.len(), "transformed handshake export");
    Ok(students)
}

/// Build the raw-major → (department, college) lookup from the reference CSV.
pub fn transform_major_data(rows: &[HashMap<String, String>]) -> Result<MajorLookup> {
    let mut lookup = MajorLookup::new();
    for row in rows {
        let major = field(row, MAJOR_REF_MAJOR_COL)?;
        let department = field(row, MAJOR_REF_DEPARTMENT_COL)?;
        let college = field(row, MAJOR_REF_COLLEGE_COL)?;
        lookup.insert(
            major.to_string(),
            EducationRecord::new(Some(major), Some(department), Some(college)),
        );
    }
    Ok(lookup)
}

/// Build the uppercased-university-id → sports lookup from the athletics
/// roster. Roster order is preserved per athlete.
pub fn transform_athlete_data(rows: &[HashMap<String, String>]) -> Result<AthleteLookup> {
    let mut lookup = AthleteLookup::new();
    for row in rows {
        let id = field(row, ATHLETE_ID_COL)?.trim().to_uppercase();
        let sport = field(row, ATHLETE_SPORT_COL)?.trim().to_string();
        if id.is_empty() || sport.is_empty() {
            continue;
        }
        lookup.entry(id).or_default().push(sport);
    }
    Ok(lookup)
}

/// Build the per-username demographic flag lookup. Flag text is
/// TRUE/FALSE, tolerated case-insensitively.
pub fn transform_demographic_data(rows: &[HashMap<String, String>]) -> Result<DemographicLookup> {
    let mut lookup = DemographicLookup::new();
    for row in rows {
        let username = field(row, DEMO_USERNAME_COL)?.trim().to_string();
        if username.is_empty() {
            continue;
        }
        lookup.insert(
            username,
            DemographicFlags {
                is_pell_eligible: true_false(field(row, DEMO_PELL_COL)?),
                is_urm: true_false(field(row, DEMO_URM_COL)?),
                is_first_generation: true_false(field(row, DEMO_FIRST_GEN_COL)?),
            },
        );
    }
    Ok(lookup)
}

/// Build the set of usernames with a student-leadership org membership.
pub fn transform_sli_data(rows: &[HashMap<String, String>]) -> Result<SliRoster> {
    let mut roster = SliRoster::new();
    for row in rows {
        let username = field(row, SLI_USERNAME_COL)?.trim().to_string();
        if !username.is_empty() {
            roster.insert(username);
        }
    }
    Ok(roster)
}

/// Copy demographic flags onto the matching raw rows. A student absent
/// from the demographic file keeps all-false flags.
pub fn apply_demographic_data(students: &mut [RawStudentRow], lookup: &DemographicLookup) {
    for student in students.iter_mut() {
        if let Some(flags) = lookup.get(&student.handshake_username) {
            student.is_pell_eligible = flags.is_pell_eligible;
            student.is_urm = flags.is_urm;
            student.is_first_generation = flags.is_first_generation;
        }
    }
}

/// Mark students who appear in the student-leadership org roster.
pub fn apply_sli_data(students: &mut [RawStudentRow], roster: &SliRoster) {
    for student in students.iter_mut() {
        if roster.contains(&student.handshake_username) {
            student.is_in_sli_org = true;
        }
    }
}
