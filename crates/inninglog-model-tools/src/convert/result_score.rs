use crate::convert::{FromDbModel, FromModel};
use inninglog_entity::result_score::ResultScore as DbResultScore;
use inninglog_model::journal::ResultScore;

impl FromDbModel<DbResultScore> for ResultScore {
    fn from_db_model(model: DbResultScore) -> Self {
        match model {
            DbResultScore::Win => Self::Win,
            DbResultScore::Lose => Self::Lose,
            DbResultScore::Draw => Self::Draw,
        }
    }
}

impl FromModel<ResultScore> for DbResultScore {
    fn from_model(model: ResultScore) -> Self {
        match model {
            ResultScore::Win => Self::Win,
            ResultScore::Lose => Self::Lose,
            ResultScore::Draw => Self::Draw,
        }
    }
}
