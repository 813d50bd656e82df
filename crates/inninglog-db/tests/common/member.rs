use chrono::{NaiveDate, NaiveDateTime};
use inninglog_db::journal::{self, NewJournal};
use inninglog_entity::journal::Model as JournalModel;
use inninglog_entity::member::{Entity as Member, Model as MemberModel};
use inninglog_entity::stadium::Model as StadiumModel;
use inninglog_entity::team::Model as TeamModel;
use sea_orm::{DatabaseConnection, EntityTrait, IntoActiveModel};
use uuid::Uuid;

#[allow(dead_code)]
pub async fn create_test_member(db: &DatabaseConnection) -> MemberModel {
    let member = MemberModel {
        id: Uuid::new_v4(),
        nickname: Some("test".to_owned()),
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

#[allow(dead_code)]
pub async fn create_test_journal(
    db: &DatabaseConnection,
    member: &MemberModel,
    (team, stadium): &(TeamModel, StadiumModel),
    (our_score, their_score): (i32, i32),
    date: NaiveDateTime,
) -> JournalModel {
    journal::Mutation::create_journal(
        db,
        NewJournal {
            member_id: member.id,
            game_id: None,
            media_url: "https://bucket.example/image.jpg".to_owned(),
            our_score,
            their_score,
            opponent_team_id: team.id,
            stadium_id: stadium.id,
            date,
            emotion: "joy".to_owned(),
            review_text: "what a comeback".to_owned(),
            is_public: true,
        },
    )
    .await
    .unwrap()
}
