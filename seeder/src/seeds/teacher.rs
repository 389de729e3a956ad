use crate::seed::Seeder;
use db::models::teacher::Model as TeacherModel;
use sea_orm::{DatabaseConnection, DbErr};
use std::future::Future;
use std::pin::Pin;

pub struct TeacherSeeder;

impl Seeder for TeacherSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), DbErr>> + Send + 'a>> {
        Box::pin(async move {
            for usuario in ["profe_gonzalez", "profe_martinez", "profe_rojas"] {
                TeacherModel::create(db, usuario, "password123").await?;
            }
            Ok(())
        })
    }
}
