use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use inninglog_core::journal::store::VisitedGameRegistrar;
use inninglog_db::{migration, stadium, team};
use inninglog_entity::member::{Entity as Member, Model as MemberModel};
use inninglog_model::journal::NewJournal;
use sea_orm::{Database, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel};
use uuid::Uuid;

pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::run(&db).await.unwrap();
    team::Mutation::create_or_update_team(&db, "LG".to_owned(), "LG Twins".to_owned())
        .await
        .unwrap();
    stadium::Mutation::create_or_update_stadium(&db, "JAM".to_owned(), "Jamsil Baseball Stadium".to_owned())
        .await
        .unwrap();
    db
}

pub async fn create_member(db: &DatabaseConnection) -> MemberModel {
    let member = MemberModel {
        id: Uuid::new_v4(),
        nickname: None,
        created_at: chrono::Utc::now().fixed_offset(),
    };
    Member::insert(member.clone().into_active_model()).exec(db).await.unwrap();
    member
}

#[allow(dead_code)]
pub fn game_date(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, day)
        .unwrap()
        .and_hms_opt(18, 30, 0)
        .unwrap()
}

pub fn new_journal(game_id: Option<&str>, (our_score, their_score): (i32, i32), day: u32) -> NewJournal {
    NewJournal {
        game_id: game_id.map(ToOwned::to_owned),
        media_url: "https://cdn.example.com/journals/a.jpg".to_owned(),
        our_score,
        their_score,
        opponent_team_short_code: "LG".to_owned(),
        stadium_short_code: "JAM".to_owned(),
        date: game_date(day),
        emotion: "excited".to_owned(),
        review_text: "walk-off in the ninth".to_owned(),
        is_public: false,
    }
}

/// Registrar whose backend is always down
#[allow(dead_code)]
pub struct FailingRegistrar;

#[async_trait]
impl VisitedGameRegistrar for FailingRegistrar {
    async fn register(&self, _member_id: Uuid, _game_id: String, _journal_id: Uuid) -> Result<Uuid, DbErr> {
        Err(DbErr::Custom("game report service unavailable".to_owned()))
    }
}
