use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

/// QR payload of the bootstrap session created alongside every subject.
///
/// A session carrying this payload is never scanned; it exists as the target
/// of manual roster inserts. Unique per subject by convention only — lookups
/// must tolerate zero or many matching rows.
pub const ENROLLMENT_QR_CODE: &str = "Clase de inscripción";

/// One dated meeting of a subject (`clases` table), carrying the QR payload
/// students scan to register presence.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "clases")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_clase: i64,
    pub id_asignatura: i64,
    pub fecha_clase: Date,
    pub codigoqr_clase: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subject::Entity",
        from = "Column::IdAsignatura",
        to = "super::subject::Column::IdAsignatura"
    )]
    Subject,
    #[sea_orm(has_many = "super::attendance_record::Entity")]
    Records,
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl Related<super::attendance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Records.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a session for a subject. Works on a plain connection or an
    /// open transaction.
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        id_asignatura: i64,
        fecha_clase: Date,
        codigoqr_clase: &str,
    ) -> Result<Self, DbErr> {
        let session = ActiveModel {
            id_asignatura: Set(id_asignatura),
            fecha_clase: Set(fecha_clase),
            codigoqr_clase: Set(codigoqr_clase.to_string()),
            ..Default::default()
        };
        session.insert(db).await
    }

    pub async fn get_all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        Entity::find().all(db).await
    }

    pub async fn list_by_subject(
        db: &DatabaseConnection,
        id_asignatura: i64,
    ) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::IdAsignatura.eq(id_asignatura))
            .all(db)
            .await
    }

    /// Deletes every session of a subject together with the attendance rows
    /// hanging off them, in one transaction. Returns the number of sessions
    /// removed; zero matches is not an error.
    pub async fn delete_by_subject(
        db: &DatabaseConnection,
        id_asignatura: i64,
    ) -> Result<u64, DbErr> {
        let txn = db.begin().await?;
        let deleted = delete_subject_sessions(&txn, id_asignatura).await?;
        txn.commit().await?;
        Ok(deleted)
    }

    /// Finds the enrollment session of a subject.
    ///
    /// Takes the first matching row (ordered by id) so that stray duplicate
    /// sentinel rows don't make the lookup fail.
    pub async fn enrollment_session(
        db: &DatabaseConnection,
        id_asignatura: i64,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::IdAsignatura.eq(id_asignatura))
            .filter(Column::CodigoqrClase.eq(ENROLLMENT_QR_CODE))
            .order_by_asc(Column::IdClase)
            .one(db)
            .await
    }

    pub async fn list_by_date(db: &DatabaseConnection, fecha: Date) -> Result<Vec<Self>, DbErr> {
        Entity::find().filter(Column::FechaClase.eq(fecha)).all(db).await
    }

    /// Sessions of a subject on a given date. The scan flow expects at most
    /// one, but nothing in the schema enforces that.
    pub async fn find_by_subject_and_date(
        db: &DatabaseConnection,
        id_asignatura: i64,
        fecha: Date,
    ) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::IdAsignatura.eq(id_asignatura))
            .filter(Column::FechaClase.eq(fecha))
            .order_by_asc(Column::IdClase)
            .all(db)
            .await
    }

    /// Literal string equality between a scanned payload and the stored one.
    ///
    /// This comparison is the entire authorization mechanism for marking
    /// attendance: no normalization, no fuzzy matching, no hashing.
    pub fn matches_payload(&self, scanned: &str) -> bool {
        self.codigoqr_clase == scanned
    }
}

/// Removes a subject's attendance rows and then its sessions on whatever
/// connection or open transaction the caller holds. Returns the number of
/// sessions removed.
pub(crate) async fn delete_subject_sessions<C: ConnectionTrait>(
    db: &C,
    id_asignatura: i64,
) -> Result<u64, DbErr> {
    use super::attendance_record::{Column as RecordCol, Entity as RecordEntity};

    let session_ids: Vec<i64> = Entity::find()
        .filter(Column::IdAsignatura.eq(id_asignatura))
        .all(db)
        .await?
        .into_iter()
        .map(|s| s.id_clase)
        .collect();

    if !session_ids.is_empty() {
        RecordEntity::delete_many()
            .filter(RecordCol::IdClase.is_in(session_ids))
            .exec(db)
            .await?;
    }

    let res = Entity::delete_many()
        .filter(Column::IdAsignatura.eq(id_asignatura))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}
