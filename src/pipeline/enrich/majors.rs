//! Major string classification.
//!
//! Raw majors from the portal carry a degree-type prefix ("B.S.: Computer
//! Science") that must be stripped for display and grouping. Graduate-degree
//! prefixes are semantically part of the major name ("M.S.E.: Computer
//! Science" is a different program than "Computer Science") and are kept.

const MASTERS_PREFIXES: [&str; 4] = ["M.S.E.", "M.A.", "M.S.", "M.F.A"];

/// True iff the major denotes a masters-level degree
pub fn is_masters_degree(major: &str) -> bool {
    MASTERS_PREFIXES
        .iter()
        .any(|prefix| major.starts_with(prefix))
}

/// True iff the major denotes any graduate degree. Broader than
/// `is_masters_degree`: any "M."-prefixed program plus doctorates.
pub fn is_graduate_degree(major: &str) -> bool {
    let lowercase = major.to_lowercase();
    lowercase.starts_with("m.") || lowercase.starts_with("ph.d")
}

/// Strip the degree-type prefix from a raw major string.
///
/// Majors with no colon and graduate-degree majors are returned unchanged;
/// everything else keeps only the substring after the first colon, trimmed.
pub fn clean_major(major: &str) -> String {
    match major.find(':') {
        Some(colon_loc) if !is_graduate_degree(major) => major[colon_loc + 1..].trim().to_string(),
        _ => major.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_major_strips_undergrad_prefix() {
        assert_eq!(
            clean_major("B.S. Comp. Sci.: Computer Science"),
            "Computer Science"
        );
        assert_eq!(clean_major("B.A.: English"), "English");
        assert_eq!(clean_major("B.S.:   Physics  "), "Physics");
    }

    #[test]
    fn test_clean_major_without_colon_is_unchanged() {
        assert_eq!(clean_major("Computer Science"), "Computer Science");
        assert_eq!(clean_major(""), "");
    }

    #[test]
    fn test_clean_major_keeps_graduate_prefixes() {
        assert_eq!(
            clean_major("M.S.E.: Computer Science"),
            "M.S.E.: Computer Science"
        );
        assert_eq!(clean_major("M.A.: Writing"), "M.A.: Writing");
        assert_eq!(clean_major("M.S.: Applied Math"), "M.S.: Applied Math");
        assert_eq!(clean_major("M.F.A: Film"), "M.F.A: Film");
        assert_eq!(clean_major("Ph.D: Biology"), "Ph.D: Biology");
    }

    #[test]
    fn test_clean_major_only_splits_on_first_colon() {
        assert_eq!(
            clean_major("B.S.: Neuroscience: Cellular Track"),
            "Neuroscience: Cellular Track"
        );
    }

    #[test]
    fn test_is_masters_degree() {
        assert!(is_masters_degree("M.S.E.: Computer Science"));
        assert!(is_masters_degree("M.A.: Writing"));
        assert!(is_masters_degree("M.S.: Applied Math"));
        assert!(is_masters_degree("M.F.A: Film"));
        assert!(!is_masters_degree("Ph.D: Biology"));
        assert!(!is_masters_degree("B.S.: Computer Science"));
    }

    #[test]
    fn test_is_graduate_degree_covers_doctorates() {
        assert!(is_graduate_degree("Ph.D: Biology"));
        assert!(is_graduate_degree("M.S.E.: Computer Science"));
        assert!(!is_graduate_degree("B.S.: Computer Science"));
    }
}
