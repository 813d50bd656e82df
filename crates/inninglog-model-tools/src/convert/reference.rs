use crate::convert::FromDbModel;
use inninglog_entity::stadium::Model as StadiumModel;
use inninglog_entity::team::Model as TeamModel;
use inninglog_model::reference::{StadiumRef, TeamRef};

impl FromDbModel<TeamModel> for TeamRef {
    fn from_db_model(model: TeamModel) -> Self {
        Self {
            short_code: model.short_code,
            name: model.name,
        }
    }
}

impl FromDbModel<StadiumModel> for StadiumRef {
    fn from_db_model(model: StadiumModel) -> Self {
        Self {
            short_code: model.short_code,
            name: model.name,
        }
    }
}
