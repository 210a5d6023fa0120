//! Request handlers per entity.

pub mod books;
pub mod references;
pub mod students;
