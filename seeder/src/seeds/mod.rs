pub mod session;
pub mod student;
pub mod subject;
pub mod teacher;
