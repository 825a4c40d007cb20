// Output formatters: flatten enriched student records into serializable
// CSV row types.

pub mod data_file;
pub mod roster;

pub use data_file::{format_for_data_file, DataFileRow};
pub use roster::{format_for_roster_file, RosterRow};
