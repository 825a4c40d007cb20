//! Roster-file formatter.
//!
//! One output row per department a student belongs to, each row carrying
//! the student's full joined sports/majors/colleges lists so any single
//! department tab reads complete on its own.

use serde::Serialize;

use crate::domain::StudentRecord;

/// One row of the roster file. Field order is the output column order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RosterRow {
    pub handshake_id: String,
    pub email: String,
    pub first_name: String,
    pub pref_name: String,
    pub last_name: String,
    pub school_year: String,
    pub department: String,
    pub is_pre_med: bool,
    pub has_activated_handshake: bool,
    pub has_completed_profile: bool,
    pub is_athlete: bool,
    pub sports: String,
    pub majors: String,
    pub colleges: String,
}

fn join(list: &[String]) -> String {
    list.join("; ")
}

fn or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn row(student: &StudentRecord, department: &str, blank_lists: bool) -> RosterRow {
    RosterRow {
        handshake_id: or_empty(&student.handshake_id),
        email: or_empty(&student.email),
        first_name: or_empty(&student.first_name),
        pref_name: or_empty(&student.pref_first_name),
        last_name: or_empty(&student.last_name),
        school_year: or_empty(&student.school_year),
        department: department.to_string(),
        is_pre_med: student.is_pre_med,
        has_activated_handshake: student.has_activated_handshake,
        has_completed_profile: student.has_completed_profile,
        is_athlete: student.is_athlete(),
        sports: if blank_lists { String::new() } else { join(student.sports()) },
        majors: if blank_lists { String::new() } else { join(student.majors()) },
        colleges: if blank_lists { String::new() } else { join(student.colleges()) },
    }
}

/// Flatten students into roster rows.
///
/// Students with departments get one row per department; students with
/// majors but no departments get a single empty-department row; students
/// with no enrichment data at all get a single blank row so they still
/// appear in the roster.
pub fn format_for_roster_file(students: &[StudentRecord]) -> Vec<RosterRow> {
    let mut result = Vec::new();
    for student in students {
        if !student.departments().is_empty() {
            for department in student.departments() {
                result.push(row(student, department, false));
            }
        } else if !student.majors().is_empty() {
            result.push(row(student, "", false));
        } else {
            result.push(row(student, "", true));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EducationRecord;

    fn student_with_identity() -> StudentRecord {
        let mut student = StudentRecord::new();
        student.handshake_id = Some("12345".to_string());
        student.email = Some("astu1@jhu.edu".to_string());
        student.first_name = Some("Art".to_string());
        student.pref_first_name = Some("Art".to_string());
        student.last_name = Some("Stuart".to_string());
        student.school_year = Some("Sophomore".to_string());
        student
    }

    #[test]
    fn test_one_row_per_department_with_full_lists() {
        let mut student = student_with_identity();
        student.add_education_record(EducationRecord::new(
            Some("Computer Science"),
            Some("comp_elec_eng"),
            Some("wse"),
        ));
        student.add_education_record(EducationRecord::new(
            Some("English"),
            Some("lit_lang_film"),
            Some("ksas"),
        ));
        student.add_sport("Soccer");
        student.add_sport("Lacrosse");

        let rows = format_for_roster_file(&[student]);
        assert_eq!(rows.len(), 3);
        let departments: Vec<&str> = rows.iter().map(|r| r.department.as_str()).collect();
        assert_eq!(
            departments,
            ["comp_elec_eng", "lit_lang_film", "soar_athletics"]
        );
        for row in &rows {
            assert_eq!(row.majors, "Computer Science; English");
            assert_eq!(row.colleges, "wse; ksas");
            assert_eq!(row.sports, "Soccer; Lacrosse");
            assert!(row.is_athlete);
        }
    }

    #[test]
    fn test_majors_without_departments_emit_single_empty_department_row() {
        let mut student = student_with_identity();
        student.add_education_record(EducationRecord::major_only("Interdisciplinary Studies"));

        let rows = format_for_roster_file(&[student]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].department, "");
        assert_eq!(rows[0].majors, "Interdisciplinary Studies");
        assert_eq!(rows[0].colleges, "");
    }

    #[test]
    fn test_student_with_no_enrichment_data_emits_one_blank_row() {
        let mut student = student_with_identity();
        student.add_education_record(EducationRecord::default());

        let rows = format_for_roster_file(&[student]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].handshake_id, "12345");
        assert_eq!(rows[0].department, "");
        assert_eq!(rows[0].majors, "");
        assert_eq!(rows[0].sports, "");
        assert_eq!(rows[0].colleges, "");
        assert!(!rows[0].is_athlete);
    }

    #[test]
    fn test_missing_identity_fields_serialize_as_empty_strings() {
        let student = StudentRecord::new();
        let rows = format_for_roster_file(&[student]);
        assert_eq!(rows[0].handshake_id, "");
        assert_eq!(rows[0].email, "");
        assert_eq!(rows[0].school_year, "");
    }

    #[test]
    fn test_flags_are_carried_on_every_row() {
        let mut student = student_with_identity();
        student.is_pre_med = true;
        student.has_activated_handshake = true;
        student.add_education_record(EducationRecord::new(
            Some("Computer Science"),
            Some("comp_elec_eng"),
            Some("wse"),
        ));
        student.add_additional_department("soar_fye_wse");

        let rows = format_for_roster_file(&[student]);
        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert!(row.is_pre_med);
            assert!(row.has_activated_handshake);
            assert!(!row.has_completed_profile);
        }
    }
}
