use crate::seed::Seeder;
use db::models::student::Model as StudentModel;
use sea_orm::{DatabaseConnection, DbErr};
use std::future::Future;
use std::pin::Pin;

pub struct StudentSeeder;

impl Seeder for StudentSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), DbErr>> + Send + 'a>> {
        Box::pin(async move {
            for i in 1..=12 {
                let usuario = format!("alumno{:02}", i);
                StudentModel::create(db, &usuario, "password123").await?;
            }
            Ok(())
        })
    }
}
