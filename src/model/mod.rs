//! Row and payload types per entity.

pub mod book;
pub mod reference;
pub mod student;

pub use book::{Book, BookChanges, BookInsert, BookPatch, NewBook};
pub use reference::{Genre, GenrePatch, NewGenre, NewStudentId, StudentId, StudentIdPatch};
pub use student::{NewStudent, Student, StudentChanges, StudentInsert, StudentPatch};
