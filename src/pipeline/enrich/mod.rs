// Enrichment stages: major classification, education-record derivation,
// athlete status, and synthetic SOAR departments.

pub mod athletes;
pub mod education;
pub mod majors;
pub mod soar;

pub use athletes::{enrich_with_athlete_status, AthleteLookup};
pub use education::{build_student_records, education_records_for_student, MajorLookup};
pub use soar::derive_soar_departments;
