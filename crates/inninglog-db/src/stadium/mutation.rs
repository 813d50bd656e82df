use inninglog_entity::stadium::{self, Entity as Stadium, Model as StadiumModel};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, QueryFilter};

pub struct Mutation;

impl Mutation {
    /// Inserts the stadium or renames the existing one with the same short code
    pub async fn create_or_update_stadium<C: ConnectionTrait>(
        conn: &C,
        short_code: String,
        name: String,
    ) -> Result<StadiumModel, DbErr> {
        let model = stadium::ActiveModel {
            id: NotSet,
            short_code: ActiveValue::Set(short_code.clone()),
            name: ActiveValue::Set(name),
        };
        Stadium::insert(model)
            .on_conflict(
                OnConflict::column(stadium::Column::ShortCode)
                    .update_column(stadium::Column::Name)
                    .to_owned(),
            )
            .exec(conn)
            .await?;

        Stadium::find()
            .filter(stadium::Column::ShortCode.eq(&short_code))
            .one(conn)
            .await?
            .ok_or_else(|| {
                tracing::error!(%short_code, "stadium not found after insertion");
                DbErr::RecordNotFound(format!("Stadium {short_code} not found after insertion"))
            })
    }
}
