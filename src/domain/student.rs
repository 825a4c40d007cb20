//! Per-student aggregates built up during enrichment.
//!
//! A `StudentRecord` accumulates education records, additional (non-academic)
//! departments, and sports. Every add operation is an idempotent no-op on
//! duplicates, and the derived majors/colleges/departments views preserve
//! insertion order so the output files are deterministic.

use crate::domain::Department;

/// A single (major, department, college) triple; the atomic unit of academic
/// affiliation. Blank strings are normalized to `None` at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationRecord {
    pub major: Option<String>,
    pub department: Option<String>,
    pub college: Option<String>,
}

fn normalize(value: Option<&str>) -> Option<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Some(s.to_string()),
        _ => None,
    }
}

impl EducationRecord {
    pub fn new(major: Option<&str>, department: Option<&str>, college: Option<&str>) -> Self {
        EducationRecord {
            major: normalize(major),
            department: normalize(department),
            college: normalize(college),
        }
    }

    /// A record carrying only a major, used for majors with no fixed
    /// department/college mapping
    pub fn major_only(major: &str) -> Self {
        EducationRecord::new(Some(major), None, None)
    }

    /// Copy of this record with the major rewritten
    pub fn with_major(&self, major: &str) -> Self {
        EducationRecord {
            major: normalize(Some(major)),
            department: self.department.clone(),
            college: self.college.clone(),
        }
    }
}

/// Append `value` to `list` unless it is already present.
fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|existing| existing == value) {
        list.push(value.to_string());
    }
}

/// The per-student aggregate of identity, education, and affiliation data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentRecord {
    pub handshake_username: Option<String>,
    pub handshake_id: Option<String>,
    pub email: Option<String>,
    /// Display name: preferred name if present, else legal name
    pub first_name: Option<String>,
    pub legal_first_name: Option<String>,
    pub pref_first_name: Option<String>,
    pub last_name: Option<String>,
    pub school_year: Option<String>,
    pub is_pre_med: bool,
    pub has_activated_handshake: bool,
    pub has_completed_profile: bool,
    pub is_pell_eligible: bool,
    pub is_urm: bool,
    pub is_first_generation: bool,
    pub is_in_sli_org: bool,

    education_records: Vec<EducationRecord>,
    additional_departments: Vec<String>,
    sports: Vec<String>,

    // Derived unique views, maintained incrementally on each add
    majors: Vec<String>,
    colleges: Vec<String>,
    departments: Vec<String>,
}

impl StudentRecord {
    pub fn new() -> Self {
        StudentRecord::default()
    }

    pub fn education_records(&self) -> &[EducationRecord] {
        &self.education_records
    }

    pub fn additional_departments(&self) -> &[String] {
        &self.additional_departments
    }

    pub fn sports(&self) -> &[String] {
        &self.sports
    }

    /// Unique, insertion-ordered majors across the education records
    pub fn majors(&self) -> &[String] {
        &self.majors
    }

    /// Unique, insertion-ordered colleges across the education records
    pub fn colleges(&self) -> &[String] {
        &self.colleges
    }

    /// Unique, insertion-ordered departments across the education records
    /// plus the additional departments
    pub fn departments(&self) -> &[String] {
        &self.departments
    }

    pub fn is_athlete(&self) -> bool {
        !self.sports.is_empty()
    }

    /// Add an education record, skipping exact duplicates. The derived
    /// majors/colleges/departments views pick up any new non-blank values.
    pub fn add_education_record(&mut self, record: EducationRecord) {
        if self.education_records.contains(&record) {
            return;
        }
        if let Some(major) = &record.major {
            push_unique(&mut self.majors, major);
        }
        if let Some(college) = &record.college {
            push_unique(&mut self.colleges, college);
        }
        if let Some(department) = &record.department {
            push_unique(&mut self.departments, department);
        }
        self.education_records.push(record);
    }

    /// Add a non-academic department affiliation. Also lands in the
    /// departments view.
    pub fn add_additional_department(&mut self, department: &str) {
        push_unique(&mut self.additional_departments, department);
        push_unique(&mut self.departments, department);
    }

    /// Add a sport membership. Any sport makes the student an athlete and
    /// credits them to the SOAR athletics department.
    pub fn add_sport(&mut self, sport: &str) {
        push_unique(&mut self.sports, sport);
        self.add_additional_department(Department::SoarAthletics.name());
    }
}
