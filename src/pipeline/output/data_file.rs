//! Data-analysis-file formatter.
//!
//! Fully denormalized: one row per (education record, department, sport)
//! combination so every column is single-valued and groupable.

use serde::Serialize;

use crate::domain::{EducationRecord, StudentRecord};

/// One row of the data-analysis file. Field order is the output column
/// order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DataFileRow {
    pub handshake_username: String,
    pub handshake_id: String,
    pub school_year: String,
    pub is_athlete: bool,
    pub major: String,
    pub department: String,
    pub college: String,
    pub sport: String,
}

fn or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn row(student: &StudentRecord, major: &str, department: &str, college: &str, sport: &str) -> DataFileRow {
    DataFileRow {
        handshake_username: or_empty(&student.handshake_username),
        handshake_id: or_empty(&student.handshake_id),
        school_year: or_empty(&student.school_year),
        is_athlete: student.is_athlete(),
        major: major.to_string(),
        department: department.to_string(),
        college: college.to_string(),
        sport: sport.to_string(),
    }
}

/// Emit the rows for one education record: the student's additional
/// departments plus the record's own department, crossed with the
/// student's sports when any exist. A record with no department still
/// produces its blank-department rows.
fn rows_for_education_record(
    student: &StudentRecord,
    record: &EducationRecord,
    include_own_department: bool,
) -> Vec<DataFileRow> {
    let major = record.major.clone().unwrap_or_default();
    let college = record.college.clone().unwrap_or_default();

    let mut departments: Vec<String> = student.additional_departments().to_vec();
    if include_own_department {
        departments.push(record.department.clone().unwrap_or_default());
    }

    let mut result = Vec::new();
    for department in &departments {
        if student.sports().is_empty() {
            result.push(row(student, &major, department, &college, ""));
        } else {
            for sport in student.sports() {
                result.push(row(student, &major, department, &college, sport));
            }
        }
    }
    result
}

/// Flatten students into data-file rows.
///
/// Students with education records emit the per-record expansion above;
/// students with only additional departments emit the same shape with
/// blank major/college; students with no enrichment data emit one blank
/// row.
pub fn format_for_data_file(students: &[StudentRecord]) -> Vec<DataFileRow> {
    let mut result = Vec::new();
    for student in students {
        if !student.education_records().is_empty() {
            for record in student.education_records() {
                result.extend(rows_for_education_record(student, record, true));
            }
        } else if !student.additional_departments().is_empty() {
            result.extend(rows_for_education_record(
                student,
                &EducationRecord::default(),
                false,
            ));
        } else {
            result.push(row(student, "", "", "", ""));
        }
    }
    result
}
