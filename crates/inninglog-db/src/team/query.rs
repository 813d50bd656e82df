use inninglog_entity::team::{self, Entity as Team, Model as TeamModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn find_by_short_code<C: ConnectionTrait>(
        conn: &C,
        short_code: &str,
    ) -> Result<Option<TeamModel>, DbErr> {
        Team::find()
            .filter(team::Column::ShortCode.eq(short_code))
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, short_code, "failed to load team"))
    }

    pub async fn find_by_ids<C: ConnectionTrait>(conn: &C, ids: Vec<i32>) -> Result<Vec<TeamModel>, DbErr> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        Team::find()
            .filter(team::Column::Id.is_in(ids))
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load teams"))
    }
}
