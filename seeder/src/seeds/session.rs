use crate::seed::Seeder;
use chrono::{Duration, Utc};
use db::models::{
    attendance_record::Model as RecordModel, class_session::Model as SessionModel,
    student::Model as StudentModel, subject::Model as SubjectModel,
};
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};
use sea_orm::{DatabaseConnection, DbErr};
use std::future::Future;
use std::pin::Pin;
use uuid::Uuid;

pub struct SessionSeeder;

impl Seeder for SessionSeeder {
    /// Three past weekly sessions per subject, each pre-populated with a row
    /// per student and roughly three quarters of them flipped to present.
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), DbErr>> + Send + 'a>> {
        Box::pin(async move {
            let mut rng = StdRng::from_rng(OsRng).expect("Failed to seed RNG");

            let subjects = SubjectModel::get_all(db).await?;
            let students = StudentModel::get_all(db).await?;
            let today = Utc::now().date_naive();

            for subject in &subjects {
                for week in 1..=3 {
                    let fecha = today - Duration::weeks(week);
                    let payload = Uuid::new_v4().to_string();
                    let session =
                        SessionModel::create(db, subject.id_asignatura, fecha, &payload).await?;

                    for student in &students {
                        let present = rng.gen_bool(0.75);
                        RecordModel::record(
                            db,
                            session.id_clase,
                            student.id_estudiante,
                            fecha,
                            present,
                        )
                        .await?;
                    }
                }
            }
            Ok(())
        })
    }
}
