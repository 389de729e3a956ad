use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbBackend, DbErr, FromQueryResult,
    JoinType, QueryFilter, QuerySelect, Set, Statement, TransactionTrait,
};

use super::attendance_record::attendance_percentage;
use super::class_session::{self, ENROLLMENT_QR_CODE};
use super::teacher;

/// A course/section owned by one teacher (`asignatura` table).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "asignatura")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_asignatura: i64,
    pub id_profesor: i64,
    pub nombre_asignatura: String,
    pub siglas_asignatura: String,
    pub color_asignatura: String,
    pub color_seccion_asignatura: String,
    pub seccion_asignatura: String,
    pub modalidad_asignatura: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::IdProfesor",
        to = "super::teacher::Column::IdProfesor"
    )]
    Teacher,
    #[sea_orm(has_many = "super::class_session::Entity")]
    Sessions,
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl Related<super::class_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sessions.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Per-subject attendance aggregation for one student: raw counts plus the
/// derived percentage.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SubjectAttendanceSummary {
    pub usuario_estudiante: String,
    pub id_estudiante: i64,
    pub id_asignatura: i64,
    pub nombre_asignatura: String,
    pub color_asignatura: String,
    pub color_seccion_asignatura: String,
    pub siglas_asignatura: String,
    pub seccion_asignatura: String,
    pub modalidad_asignatura: String,
    pub count_asistencias: i64,
    pub count_total_asistencias: i64,
    pub porcentaje_asistencia: f64,
}

#[derive(Debug, FromQueryResult)]
struct SubjectAttendanceCounts {
    usuario_estudiante: String,
    id_estudiante: i64,
    id_asignatura: i64,
    nombre_asignatura: String,
    color_asignatura: String,
    color_seccion_asignatura: String,
    siglas_asignatura: String,
    seccion_asignatura: String,
    modalidad_asignatura: String,
    count_asistencias: i64,
    count_total_asistencias: i64,
}

/// One row of the enrolled-student roster of a subject.
#[derive(Debug, FromQueryResult, serde::Serialize)]
pub struct EnrolledStudent {
    pub id_estudiante: i64,
    pub usuario_estudiante: String,
}

impl Model {
    /// Creates a subject together with its enrollment session in one
    /// transaction, so the bootstrap session can never be missing.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_with_enrollment(
        db: &DatabaseConnection,
        id_profesor: i64,
        nombre: &str,
        siglas: &str,
        color: &str,
        color_seccion: &str,
        seccion: &str,
        modalidad: &str,
    ) -> Result<(Self, class_session::Model), DbErr> {
        let txn = db.begin().await?;

        let subject = ActiveModel {
            id_profesor: Set(id_profesor),
            nombre_asignatura: Set(nombre.to_string()),
            siglas_asignatura: Set(siglas.to_string()),
            color_asignatura: Set(color.to_string()),
            color_seccion_asignatura: Set(color_seccion.to_string()),
            seccion_asignatura: Set(seccion.to_string()),
            modalidad_asignatura: Set(modalidad.to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let enrollment = class_session::Model::create(
            &txn,
            subject.id_asignatura,
            Utc::now().date_naive(),
            ENROLLMENT_QR_CODE,
        )
        .await?;

        txn.commit().await?;
        Ok((subject, enrollment))
    }

    pub async fn get_all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        Entity::find().all(db).await
    }

    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn list_by_teacher(
        db: &DatabaseConnection,
        id_profesor: i64,
    ) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::IdProfesor.eq(id_profesor))
            .all(db)
            .await
    }

    pub async fn list_by_teacher_username(
        db: &DatabaseConnection,
        usuario: &str,
    ) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .join(JoinType::InnerJoin, Relation::Teacher.def())
            .filter(teacher::Column::UsuarioProfesor.eq(usuario))
            .all(db)
            .await
    }

    /// Deletes a subject and everything under it (attendance rows, then
    /// sessions, then the subject row) in a single transaction.
    ///
    /// Returns `false` when the subject id matched nothing.
    pub async fn delete_cascade(db: &DatabaseConnection, id: i64) -> Result<bool, DbErr> {
        let txn = db.begin().await?;

        class_session::delete_subject_sessions(&txn, id).await?;
        let deleted = Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(deleted.rows_affected > 0)
    }

    /// Per-subject attendance counts for one student, optionally scoped to a
    /// single subject. The percentage is derived in Rust so an empty group
    /// can never divide by zero.
    pub async fn attendance_summary_for_student(
        db: &DatabaseConnection,
        usuario: &str,
        id_asignatura: Option<i64>,
    ) -> Result<Vec<SubjectAttendanceSummary>, DbErr> {
        let mut sql = String::from(
            r#"
            SELECT
                estudiantes.usuario_estudiante,
                estudiantes.id_estudiante,
                asignatura.id_asignatura,
                asignatura.nombre_asignatura,
                asignatura.color_asignatura,
                asignatura.color_seccion_asignatura,
                asignatura.siglas_asignatura,
                asignatura.seccion_asignatura,
                asignatura.modalidad_asignatura,
                COUNT(CASE WHEN asistencia.asistencia = 1 THEN 1 END) AS count_asistencias,
                COUNT(asistencia.asistencia) AS count_total_asistencias
            FROM asignatura
            INNER JOIN clases ON clases.id_asignatura = asignatura.id_asignatura
            INNER JOIN asistencia ON asistencia.id_clase = clases.id_clase
            INNER JOIN estudiantes ON estudiantes.id_estudiante = asistencia.id_estudiante
            WHERE estudiantes.usuario_estudiante = ?
            "#,
        );
        let mut values: Vec<sea_orm::Value> = vec![usuario.into()];

        if let Some(id) = id_asignatura {
            sql.push_str(" AND asignatura.id_asignatura = ?");
            values.push(id.into());
        }
        sql.push_str(" GROUP BY asignatura.id_asignatura");

        let rows = SubjectAttendanceCounts::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            sql,
            values,
        ))
        .all(db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let porcentaje =
                    attendance_percentage(row.count_asistencias, row.count_total_asistencias);
                SubjectAttendanceSummary {
                    usuario_estudiante: row.usuario_estudiante,
                    id_estudiante: row.id_estudiante,
                    id_asignatura: row.id_asignatura,
                    nombre_asignatura: row.nombre_asignatura,
                    color_asignatura: row.color_asignatura,
                    color_seccion_asignatura: row.color_seccion_asignatura,
                    siglas_asignatura: row.siglas_asignatura,
                    seccion_asignatura: row.seccion_asignatura,
                    modalidad_asignatura: row.modalidad_asignatura,
                    count_asistencias: row.count_asistencias,
                    count_total_asistencias: row.count_total_asistencias,
                    porcentaje_asistencia: porcentaje,
                }
            })
            .collect())
    }

    /// Distinct students holding at least one attendance record under any
    /// session of the subject.
    pub async fn enrolled_students(
        db: &DatabaseConnection,
        id_asignatura: i64,
    ) -> Result<Vec<EnrolledStudent>, DbErr> {
        EnrolledStudent::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            r#"
            SELECT estudiantes.id_estudiante, estudiantes.usuario_estudiante
            FROM asignatura
            INNER JOIN clases ON asignatura.id_asignatura = clases.id_asignatura
            INNER JOIN asistencia ON clases.id_clase = asistencia.id_clase
            INNER JOIN estudiantes ON estudiantes.id_estudiante = asistencia.id_estudiante
            WHERE asignatura.id_asignatura = ?
            GROUP BY estudiantes.id_estudiante
            "#,
            [id_asignatura.into()],
        ))
        .all(db)
        .await
    }
}
