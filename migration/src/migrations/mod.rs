pub mod m202601120001_create_profesores;
pub mod m202601120002_create_estudiantes;
pub mod m202601120003_create_asignatura;
pub mod m202601120004_create_clases;
pub mod m202601120005_create_asistencia;
