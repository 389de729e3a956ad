pub mod attendance_record;
pub mod class_session;
pub mod student;
pub mod subject;
pub mod teacher;
