use sea_orm::entity::prelude::*;

use super::fields::{timestamped_behavior, FieldMap, FieldValue};

/// Severity stored in the app_logs.level column
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum LogLevel {
    #[sea_orm(string_value = "INFO")]
    Info,
    #[sea_orm(string_value = "WARNING")]
    Warning,
    #[sea_orm(string_value = "ERROR")]
    Error,
    #[sea_orm(string_value = "DEBUG")]
    Debug,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// SeaORM entity for app_logs table
// Not written by any request path yet.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "app_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub creation_date: DateTimeUtc,
    pub update_date: DateTimeUtc,
    pub message: String,
    pub level: LogLevel,
    pub context: String,
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
            ("message", self.message.clone().into()),
            ("level", FieldValue::Text(self.level.as_str().to_string())),
            ("context", self.context.clone().into()),
        ]
    }
}
