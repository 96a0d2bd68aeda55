use sea_orm::entity::prelude::*;

use super::fields::{timestamped_behavior, FieldMap, FieldValue};

/// SeaORM entity for default_model table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "default_model")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub creation_date: DateTimeUtc,
    pub update_date: DateTimeUtc,
    pub query_parameter: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

timestamped_behavior!();

impl FieldMap for Model {
    fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("id", self.id.into()),
            ("creation_date", self.creation_date.into()),
            ("update_date", self.update_date.into()),
            ("query_parameter", self.query_parameter.clone().into()),
        ]
    }
}
