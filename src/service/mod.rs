//! Data access per entity plus shared validation helpers.

pub mod books;
pub mod references;
pub mod students;
pub mod validation;
