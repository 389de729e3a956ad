use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbBackend, DbErr, FromQueryResult,
    JoinType, QueryFilter, QuerySelect, Set, Statement,
};

use super::student;

/// One student's presence (0/1) for one session (`asistencia` table).
///
/// The schema does not enforce uniqueness on (id_clase, id_estudiante);
/// duplicate rows for the same pair are possible and callers tolerate them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "asistencia")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_asistencia: i64,
    pub id_clase: i64,
    pub id_estudiante: i64,
    pub asistencia: i32,
    pub fecha_asistencia: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::class_session::Entity",
        from = "Column::IdClase",
        to = "super::class_session::Column::IdClase"
    )]
    Session,
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::IdEstudiante",
        to = "super::student::Column::IdEstudiante"
    )]
    Student,
}

impl Related<super::class_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Attendance percentage over a (present, total) count pair.
///
/// Defined as exactly 0 when total is 0.
pub fn attendance_percentage(present: i64, total: i64) -> f64 {
    if total == 0 {
        0.0
    } else {
        present as f64 * 100.0 / total as f64
    }
}

/// Distinct student id under a subject, used to know who to pre-populate
/// when a new session is generated.
#[derive(Debug, FromQueryResult, serde::Serialize)]
pub struct StudentIdRow {
    pub id_estudiante: i64,
}

/// One row of the subject × session × attendance join backing the teacher's
/// live-percentage view.
#[derive(Debug, FromQueryResult, serde::Serialize)]
pub struct SubjectSessionAttendanceRow {
    pub id_asignatura: i64,
    pub nombre_asignatura: String,
    pub siglas_asignatura: String,
    pub id_clase: i64,
    pub fecha_clase: Date,
    pub codigoqr_clase: String,
    pub id_asistencia: i64,
    pub id_estudiante: i64,
    pub asistencia: i32,
    pub fecha_asistencia: Date,
}

impl Model {
    /// Inserts an attendance row. `present` is forced by the caller: scans
    /// insert 1, session pre-population inserts 0.
    pub async fn record(
        db: &DatabaseConnection,
        id_clase: i64,
        id_estudiante: i64,
        fecha_asistencia: Date,
        present: bool,
    ) -> Result<Self, DbErr> {
        let row = ActiveModel {
            id_clase: Set(id_clase),
            id_estudiante: Set(id_estudiante),
            asistencia: Set(if present { 1 } else { 0 }),
            fecha_asistencia: Set(fecha_asistencia),
            ..Default::default()
        };
        row.insert(db).await
    }

    /// Flips existing rows matching (session, date, student) to present=1.
    ///
    /// Returns the number of rows updated; zero means there was no
    /// pre-populated row to flip.
    pub async fn mark_present(
        db: &DatabaseConnection,
        id_clase: i64,
        fecha_asistencia: Date,
        id_estudiante: i64,
    ) -> Result<u64, DbErr> {
        let res = Entity::update_many()
            .col_expr(Column::Asistencia, Expr::value(1))
            .filter(Column::IdClase.eq(id_clase))
            .filter(Column::FechaAsistencia.eq(fecha_asistencia))
            .filter(Column::IdEstudiante.eq(id_estudiante))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn for_student_and_session(
        db: &DatabaseConnection,
        id_estudiante: i64,
        id_clase: i64,
    ) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::IdEstudiante.eq(id_estudiante))
            .filter(Column::IdClase.eq(id_clase))
            .all(db)
            .await
    }

    pub async fn for_student_username(
        db: &DatabaseConnection,
        usuario: &str,
    ) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .join(JoinType::InnerJoin, Relation::Student.def())
            .filter(student::Column::UsuarioEstudiante.eq(usuario))
            .all(db)
            .await
    }

    /// Distinct student ids with any record under any session of the subject.
    pub async fn student_ids_for_subject(
        db: &DatabaseConnection,
        id_asignatura: i64,
    ) -> Result<Vec<StudentIdRow>, DbErr> {
        StudentIdRow::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            r#"
            SELECT asistencia.id_estudiante
            FROM asistencia
            INNER JOIN clases ON clases.id_clase = asistencia.id_clase
            INNER JOIN asignatura ON asignatura.id_asignatura = clases.id_asignatura
            WHERE asignatura.id_asignatura = ?
            GROUP BY asistencia.id_estudiante
            "#,
            [id_asignatura.into()],
        ))
        .all(db)
        .await
    }

    /// Full subject × session × attendance join scoped to one teacher and one
    /// subject.
    pub async fn subject_sessions_attendance(
        db: &DatabaseConnection,
        id_profesor: i64,
        id_asignatura: i64,
    ) -> Result<Vec<SubjectSessionAttendanceRow>, DbErr> {
        SubjectSessionAttendanceRow::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            r#"
            SELECT
                asignatura.id_asignatura,
                asignatura.nombre_asignatura,
                asignatura.siglas_asignatura,
                clases.id_clase,
                clases.fecha_clase,
                clases.codigoqr_clase,
                asistencia.id_asistencia,
                asistencia.id_estudiante,
                asistencia.asistencia,
                asistencia.fecha_asistencia
            FROM asignatura
            JOIN clases ON asignatura.id_asignatura = clases.id_asignatura
            JOIN asistencia ON clases.id_clase = asistencia.id_clase
            WHERE asignatura.id_profesor = ? AND asignatura.id_asignatura = ?
            "#,
            [id_profesor.into(), id_asignatura.into()],
        ))
        .all(db)
        .await
    }
}
