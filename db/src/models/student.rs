use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, QueryFilter, Set};

use super::teacher::hash_password;

/// A student account (`estudiantes` table).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "estudiantes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_estudiante: i64,
    pub usuario_estudiante: String,
    #[serde(skip_serializing)]
    pub contrasena_estudiante: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::attendance_record::Entity")]
    Records,
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
    /// Creates a student account, hashing the password before insert.
    pub async fn create(
        db: &DatabaseConnection,
        usuario: &str,
        contrasena: &str,
    ) -> Result<Self, DbErr> {
        let hash = hash_password(contrasena)?;
        let account = ActiveModel {
            usuario_estudiante: Set(usuario.to_string()),
            contrasena_estudiante: Set(hash),
            ..Default::default()
        };
        account.insert(db).await
    }

    pub async fn get_all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        Entity::find().all(db).await
    }

    pub async fn get_by_username(
        db: &DatabaseConnection,
        usuario: &str,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::UsuarioEstudiante.eq(usuario))
            .one(db)
            .await
    }

    /// Verifies a candidate password against the stored hash.
    pub fn verify_password(&self, contrasena: &str) -> bool {
        PasswordHash::new(&self.contrasena_estudiante)
            .map(|hash| {
                Argon2::default()
                    .verify_password(contrasena.as_bytes(), &hash)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}
