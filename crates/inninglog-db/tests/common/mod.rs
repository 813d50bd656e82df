pub mod member;

use inninglog_db::{migration, stadium, team};
use inninglog_entity::stadium::Model as StadiumModel;
use inninglog_entity::team::Model as TeamModel;
use sea_orm::{Database, DatabaseConnection, DbErr};

pub async fn setup_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    migration::run(&db).await?;
    Ok(db)
}

#[allow(dead_code)]
pub async fn create_reference_data(db: &DatabaseConnection) -> (TeamModel, StadiumModel) {
    let team = team::Mutation::create_or_update_team(db, "KIA".to_owned(), "KIA Tigers".to_owned())
        .await
        .unwrap();
    let stadium = stadium::Mutation::create_or_update_stadium(db, "JAM".to_owned(), "Jamsil Baseball Stadium".to_owned())
        .await
        .unwrap();
    (team, stadium)
}
