use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::rngs::OsRng;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, QueryFilter, Set};

/// A teacher account (`profesores` table).
///
/// Passwords are stored as argon2 PHC hash strings, never as plaintext, and
/// the hash column is excluded from serialization.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "profesores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_profesor: i64,
    pub usuario_profesor: String,
    #[serde(skip_serializing)]
    pub contrasena_profesor: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::subject::Entity")]
    Subjects,
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subjects.def()
    }
    fn via() -> Option<RelationDef> {
        None
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Creates a teacher account, hashing the password before insert.
    ///
    /// Usernames carry no uniqueness constraint; duplicate usernames are
    /// permitted at the store level.
    pub async fn create(
        db: &DatabaseConnection,
        usuario: &str,
        contrasena: &str,
    ) -> Result<Self, DbErr> {
        let hash = hash_password(contrasena)?;
        let account = ActiveModel {
            usuario_profesor: Set(usuario.to_string()),
            contrasena_profesor: Set(hash),
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
            .filter(Column::UsuarioProfesor.eq(usuario))
            .one(db)
            .await
    }

    /// Verifies a candidate password against the stored hash.
    pub fn verify_password(&self, contrasena: &str) -> bool {
        PasswordHash::new(&self.contrasena_profesor)
            .map(|hash| {
                Argon2::default()
                    .verify_password(contrasena.as_bytes(), &hash)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}

pub(crate) fn hash_password(contrasena: &str) -> Result<String, DbErr> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(contrasena.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DbErr::Custom(format!("Failed to hash password: {e}")))
}
