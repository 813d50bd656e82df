use inninglog_entity::stadium::{self, Entity as Stadium, Model as StadiumModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn find_by_short_code<C: ConnectionTrait>(
        conn: &C,
        short_code: &str,
    ) -> Result<Option<StadiumModel>, DbErr> {
        Stadium::find()
            .filter(stadium::Column::ShortCode.eq(short_code))
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, short_code, "failed to load stadium"))
    }

    pub async fn find_by_ids<C: ConnectionTrait>(conn: &C, ids: Vec<i32>) -> Result<Vec<StadiumModel>, DbErr> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        Stadium::find()
            .filter(stadium::Column::Id.is_in(ids))
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load stadiums"))
    }
}
