//! Athlete enrichment from the athletics roster.
//!
//! The roster is keyed by university ID, which matches the Handshake
//! username uppercased. A student absent from the roster is simply not an
//! athlete; a roster entry with no matching student is expected (alumni and
//! graduate athletes) and only logged.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::StudentRecord;

/// Sports per uppercased university ID, in roster order
pub type AthleteLookup = HashMap<String, Vec<String>>;

/// Mark roster students as athletes, adding each of their sports in roster
/// order. Students without a username are left untouched.
pub fn enrich_with_athlete_status(students: &mut [StudentRecord], roster: &AthleteLookup) {
    let mut matched = 0usize;
    for student in students.iter_mut() {
        let Some(username) = &student.handshake_username else {
            continue;
        };
        if let Some(sports) = roster.get(&username.to_uppercase()) {
            for sport in sports {
                student.add_sport(sport);
            }
            matched += 1;
        }
    }
    debug!(
        roster_size = roster.len(),
        matched, "athlete enrichment complete"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(username: &str) -> StudentRecord {
        let mut student = StudentRecord::new();
        student.handshake_username = Some(username.to_string());
        student
    }

    fn roster(entries: &[(&str, &[&str])]) -> AthleteLookup {
        entries
            .iter()
            .map(|(id, sports)| {
                (
                    id.to_string(),
                    sports.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_roster_match_is_case_insensitive_on_username() {
        let mut students = vec![student("astu1")];
        let roster = roster(&[("ASTU1", &["Soccer"])]);
        enrich_with_athlete_status(&mut students, &roster);
        assert!(students[0].is_athlete());
        assert_eq!(students[0].sports(), ["Soccer"]);
        assert_eq!(students[0].additional_departments(), ["soar_athletics"]);
    }

    #[test]
    fn test_multi_sport_athlete_keeps_roster_order() {
        let mut students = vec![student("bstu2")];
        let roster = roster(&[("BSTU2", &["Soccer", "Track & Field"])]);
        enrich_with_athlete_status(&mut students, &roster);
        assert_eq!(students[0].sports(), ["Soccer", "Track & Field"]);
    }

    #[test]
    fn test_student_missing_from_roster_is_not_an_athlete() {
        let mut students = vec![student("cstu3")];
        let roster = roster(&[("ASTU1", &["Soccer"])]);
        enrich_with_athlete_status(&mut students, &roster);
        assert!(!students[0].is_athlete());
        assert!(students[0].additional_departments().is_empty());
    }

    #[test]
    fn test_student_without_username_is_skipped() {
        let mut students = vec![StudentRecord::new()];
        let roster = roster(&[("ASTU1", &["Soccer"])]);
        enrich_with_athlete_status(&mut students, &roster);
        assert!(!students[0].is_athlete());
    }
}
