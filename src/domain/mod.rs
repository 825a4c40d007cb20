// Domain data shapes shared across the pipeline layers

pub mod department;
pub mod student;

pub use department::{Category, Department};
pub use student::{EducationRecord, StudentRecord};
