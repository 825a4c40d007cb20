//! ETL drivers: wire extraction, enrichment, formatting, and writing into
//! the two batch runs the office schedules.

pub mod enrich;
pub mod extract;
pub mod output;
pub mod writer;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Config;
use crate::domain::StudentRecord;
use crate::error::Result;

/// Extract all inputs and run the full enrichment sequence. Athlete
/// enrichment runs before SOAR derivation because the SOAR rules consult
/// athlete status.
pub fn load_enriched_students(config: &Config) -> Result<Vec<StudentRecord>> {
    let major_lookup = extract::transform_major_data(&extract::read_csv(&config.inputs.major_data)?)?;
    let athlete_lookup =
        extract::transform_athlete_data(&extract::read_csv(&config.inputs.athlete_data)?)?;
    let demographics =
        extract::transform_demographic_data(&extract::read_csv(&config.inputs.demographic_data)?)?;
    let sli_roster = extract::transform_sli_data(&extract::read_csv(&config.inputs.sli_data)?)?;

    let mut rows = extract::transform_handshake_data(&extract::read_csv(&config.inputs.handshake_data)?)?;
    extract::apply_demographic_data(&mut rows, &demographics);
    extract::apply_sli_data(&mut rows, &sli_roster);

    let mut students = enrich::build_student_records(&rows, &major_lookup)?;
    enrich::enrich_with_athlete_status(&mut students, &athlete_lookup);
    for student in students.iter_mut() {
        enrich::derive_soar_departments(student)?;
    }

    info!(students = students.len(), "enrichment complete");
    Ok(students)
}

/// Produce the roster file and return its path.
pub fn run_roster_file_etl(config: &Config) -> Result<PathBuf> {
    let students = load_enriched_students(config)?;
    let rows = output::format_for_roster_file(&students);
    let path = Path::new(&config.output.dir).join(writer::dated_file_name("roster"));
    writer::write_csv(&path, &rows)?;
    Ok(path)
}

/// Produce the data-analysis file and return its path.
pub fn run_data_file_etl(config: &Config) -> Result<PathBuf> {
    let students = load_enriched_students(config)?;
    let rows = output::format_for_data_file(&students);
    let path = Path::new(&config.output.dir).join(writer::dated_file_name("student data"));
    writer::write_csv(&path, &rows)?;
    Ok(path)
}
