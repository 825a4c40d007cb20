//! Synthetic SOAR department derivation.
//!
//! Student Outreach & Support (SOAR) departments are not present in any
//! input file; they are derived from school year, college, org membership,
//! and demographic flags. Runs after athlete enrichment because the
//! diversity-and-inclusion rule consults athlete status.

use tracing::debug;

use crate::constants::{is_undergrad_year, COLLEGE_KSAS, COLLEGE_WSE, FRESHMAN_YEAR};
use crate::domain::{Department, StudentRecord};
use crate::error::{EtlError, Result};

fn is_freshman(student: &StudentRecord) -> bool {
    student.school_year.as_deref() == Some(FRESHMAN_YEAR)
}

/// First-year-experience department for a freshman, keyed by college. A
/// freshman with a college outside the two undergraduate schools indicates
/// corrupt reference data and stops the run.
fn fye_department(college: &str, username: &str) -> Result<Department> {
    match college {
        COLLEGE_WSE => Ok(Department::SoarFyeWse),
        COLLEGE_KSAS => Ok(Department::SoarFyeKsas),
        _ => Err(EtlError::UnknownCollege {
            college: college.to_string(),
            username: username.to_string(),
        }),
    }
}

/// Apply the SOAR ruleset to one student, in place.
///
/// Non-undergraduates are skipped entirely. Freshmen join the FYE
/// department of each college they have a record in. Student-leadership
/// org members join soar_sli. Students flagged Pell-eligible,
/// underrepresented-minority, or first-generation join soar_css when
/// pre-med; otherwise they join soar_div_incl unless already served by
/// athletics, SLI, or a first-year program.
pub fn derive_soar_departments(student: &mut StudentRecord) -> Result<()> {
    match &student.school_year {
        Some(year) if is_undergrad_year(year) => {}
        _ => return Ok(()),
    }
    let username = student
        .handshake_username
        .clone()
        .unwrap_or_default();

    if is_freshman(student) {
        let colleges: Vec<String> = student.colleges().to_vec();
        for college in &colleges {
            let fye = fye_department(college, &username)?;
            student.add_additional_department(fye.name());
        }
    }

    if student.is_in_sli_org {
        student.add_additional_department(Department::SoarSli.name());
    }

    if student.is_pell_eligible || student.is_urm || student.is_first_generation {
        if student.is_pre_med {
            student.add_additional_department(Department::SoarCss.name());
        } else if !student.is_athlete() && !student.is_in_sli_org && !is_freshman(student) {
            student.add_additional_department(Department::SoarDivIncl.name());
        }
    }

    debug!(
        username = %username,
        departments = ?student.departments(),
        "soar derivation complete"
    );
    Ok(())
}
