use crate::convert::{FromDbModel, IntoModel};
use inninglog_db::journal::Page as DbPage;
use inninglog_model::page::Page;

impl<T, U> FromDbModel<DbPage<T>> for Page<U>
where
    U: FromDbModel<T>,
{
    fn from_db_model(model: DbPage<T>) -> Self {
        let last = model.is_last();
        Self {
            content: model.items.into_iter().map(IntoModel::into_model).collect(),
            page: model.page,
            size: model.page_size,
            total_elements: model.total_elements,
            total_pages: model.total_pages,
            last,
        }
    }
}
