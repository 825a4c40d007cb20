//! Column-name and reference constants shared across the extract and
//! enrichment layers. The portal export column names must match the saved
//! Handshake Insights report exactly.

// Handshake student export columns
pub const USERNAME_COL: &str = "Students Username";
pub const ID_COL: &str = "Students ID";
pub const MAJOR_COL: &str = "Majors Name";
pub const SCHOOL_YEAR_COL: &str = "School Year Name";
pub const EMAIL_COL: &str = "Students Email";
pub const FIRST_NAME_COL: &str = "Students First Name";
pub const PREF_NAME_COL: &str = "Students Preferred Name";
pub const LAST_NAME_COL: &str = "Students Last Name";
pub const HAS_LOGGED_IN_COL: &str = "Students Has Logged In? (Yes / No)";
pub const HAS_COMPLETED_PROFILE_COL: &str = "Students Profile Completion? (Yes / No)";
pub const LABELS_COL: &str = "Students Institution Labels Name List";

// Major reference csv columns
pub const MAJOR_REF_MAJOR_COL: &str = "major";
pub const MAJOR_REF_DEPARTMENT_COL: &str = "department";
pub const MAJOR_REF_COLLEGE_COL: &str = "college";

// Athletics roster csv columns
pub const ATHLETE_ID_COL: &str = "University ID";
pub const ATHLETE_SPORT_COL: &str = "Sport";

// Demographic csv columns
pub const DEMO_USERNAME_COL: &str = "handshake_username";
pub const DEMO_PELL_COL: &str = "is_pell_eligible";
pub const DEMO_URM_COL: &str = "is_urm";
pub const DEMO_FIRST_GEN_COL: &str = "is_first_generation";

// Student leadership org roster columns
pub const SLI_USERNAME_COL: &str = "handshake_username";

/// Institution label marking pre-health students
pub const PRE_MED_LABEL: &str = "hwd: pre-health";

/// Lowercased substring identifying the interdisciplinary-studies catch-all
/// major, which has no fixed department/college mapping
pub const INTERDISCIPLINARY_MARKER: &str = "interdisciplinary studies";

// College codes recognized by the freshman FYE rules
pub const COLLEGE_WSE: &str = "wse";
pub const COLLEGE_KSAS: &str = "ksas";

pub const FRESHMAN_YEAR: &str = "Freshman";

/// School years eligible for SOAR departments beyond athletics
pub const UNDERGRAD_YEARS: [&str; 4] = ["Freshman", "Sophomore", "Junior", "Senior"];

pub fn is_undergrad_year(school_year: &str) -> bool {
    UNDERGRAD_YEARS.contains(&school_year)
}
