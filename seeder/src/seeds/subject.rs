use crate::seed::Seeder;
use db::models::{subject::Model as SubjectModel, teacher::Model as TeacherModel};
use rand::rngs::{OsRng, StdRng};
use rand::{SeedableRng, seq::SliceRandom};
use sea_orm::{DatabaseConnection, DbErr};
use std::future::Future;
use std::pin::Pin;

const SUBJECTS: &[(&str, &str)] = &[
    ("Redes de Computadores", "RDC"),
    ("Bases de Datos", "BD"),
    ("Programación Avanzada", "PA"),
    ("Sistemas Operativos", "SO"),
    ("Ingeniería de Software", "IS"),
    ("Arquitectura de Computadores", "AC"),
];

const COLORS: &[(&str, &str)] = &[
    ("#1e88e5", "#bbdefb"),
    ("#43a047", "#c8e6c9"),
    ("#e53935", "#ffcdd2"),
    ("#8e24aa", "#e1bee7"),
    ("#fb8c00", "#ffe0b2"),
];

pub struct SubjectSeeder;

impl Seeder for SubjectSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), DbErr>> + Send + 'a>> {
        Box::pin(async move {
            // Use a Send-compatible RNG
            let mut rng = StdRng::from_rng(OsRng).expect("Failed to seed RNG");

            let teachers = TeacherModel::get_all(db).await?;
            for (i, (nombre, siglas)) in SUBJECTS.iter().enumerate() {
                let teacher = &teachers[i % teachers.len()];
                let (color, color_seccion) = *COLORS.choose(&mut rng).unwrap();
                let seccion = *["A-1", "B-1", "C-2"].choose(&mut rng).unwrap();
                let modalidad = *["presencial", "online"].choose(&mut rng).unwrap();

                SubjectModel::create_with_enrollment(
                    db,
                    teacher.id_profesor,
                    nombre,
                    siglas,
                    color,
                    color_seccion,
                    seccion,
                    modalidad,
                )
                .await?;
            }
            Ok(())
        })
    }
}
