use inninglog_entity::access_token::{Column as AccessTokenColumn, Entity as AccessToken};
use inninglog_entity::member::{Entity as Member, Model as MemberModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find_member_by_id<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Option<MemberModel>, DbErr> {
        Member::find_by_id(id)
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "error loading member"))
    }

    pub async fn find_by_token<C: ConnectionTrait>(conn: &C, token: &str) -> Result<Option<MemberModel>, DbErr> {
        Member::find()
            .inner_join(AccessToken)
            .filter(AccessTokenColumn::AccessToken.eq(token))
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "error finding member by token"))
    }
}
