//! Education-record derivation: the mapping from a student's raw major list
//! to the ordered education records they are credited with.

use std::collections::HashMap;

use tracing::debug;

use crate::constants::INTERDISCIPLINARY_MARKER;
use crate::domain::{EducationRecord, StudentRecord};
use crate::error::{EtlError, Result};
use crate::pipeline::enrich::majors::clean_major;
use crate::pipeline::extract::RawStudentRow;

/// Lookup table from raw major string (degree prefix intact) to its
/// department and college
pub type MajorLookup = HashMap<String, EducationRecord>;

/// The three "no major on file" representations found in upstream data:
/// an empty list, a single empty string, or a single blank value.
fn has_no_majors(majors: &[String]) -> bool {
    majors.is_empty() || (majors.len() == 1 && majors[0].trim().is_empty())
}

/// Derive the ordered education records for one student.
///
/// Majors are looked up by their raw string, colon and prefix intact; the
/// resulting record's major is rewritten to the cleaned form. An
/// interdisciplinary-studies major is never looked up and collapses the
/// whole result to that single record, discarding any sibling majors. A
/// major absent from the lookup is a hard stop: silently dropping it would
/// corrupt department-level counts downstream.
pub fn education_records_for_student(
    majors: &[String],
    lookup: &MajorLookup,
    username: &str,
) -> Result<Vec<EducationRecord>> {
    if has_no_majors(majors) {
        return Ok(vec![EducationRecord::default()]);
    }

    let mut result = Vec::new();
    for major in majors {
        if major.to_lowercase().contains(INTERDISCIPLINARY_MARKER) {
            debug!(major = %major, "interdisciplinary major collapses education records");
            return Ok(vec![EducationRecord::major_only(&clean_major(major))]);
        }
        let record = lookup.get(major).ok_or_else(|| EtlError::UnknownMajor {
            major: major.clone(),
            username: username.to_string(),
        })?;
        result.push(record.with_major(&clean_major(major)));
    }
    Ok(result)
}

/// Build one StudentRecord per raw portal row, populated with identity
/// fields and education records. SOAR and athlete enrichment happen in
/// later passes.
pub fn build_student_records(
    rows: &[RawStudentRow],
    major_data: &MajorLookup,
) -> Result<Vec<StudentRecord>> {
    rows.iter()
        .map(|row| {
            let mut student = row.to_student_record();
            for record in
                education_records_for_student(&row.majors, major_data, &row.handshake_username)?
            {
                student.add_education_record(record);
            }
            Ok(student)
        })
        .collect()
}
