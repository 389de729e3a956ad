use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    session::SessionSeeder, student::StudentSeeder, subject::SubjectSeeder,
    teacher::TeacherSeeder,
};

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let db = db::connect().await;

    for (seeder, name) in [
        (Box::new(TeacherSeeder) as Box<dyn Seeder + Send + Sync>, "Teacher"),
        (Box::new(StudentSeeder), "Student"),
        (Box::new(SubjectSeeder), "Subject"),
        (Box::new(SessionSeeder), "Session"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
