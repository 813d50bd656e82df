use inninglog_entity::team::{self, Entity as Team, Model as TeamModel};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, QueryFilter};

pub struct Mutation;

impl Mutation {
    /// Inserts the team or renames the existing one with the same short code
    pub async fn create_or_update_team<C: ConnectionTrait>(
        conn: &C,
        short_code: String,
        name: String,
    ) -> Result<TeamModel, DbErr> {
        let model = team::ActiveModel {
            id: NotSet,
            short_code: ActiveValue::Set(short_code.clone()),
            name: ActiveValue::Set(name),
        };
        Team::insert(model)
            .on_conflict(
                OnConflict::column(team::Column::ShortCode)
                    .update_column(team::Column::Name)
                    .to_owned(),
            )
            .exec(conn)
            .await?;

        Team::find()
            .filter(team::Column::ShortCode.eq(&short_code))
            .one(conn)
            .await?
            .ok_or_else(|| {
                tracing::error!(%short_code, "team not found after insertion");
                DbErr::RecordNotFound(format!("Team {short_code} not found after insertion"))
            })
    }
}
