use sea_orm::entity::prelude::*;

use super::fields::{timestamped_behavior, FieldMap, FieldValue};

/// SeaORM entity for request_logs table
///
/// One row per inbound HTTP request, written after the response is produced.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "request_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub creation_date: DateTimeUtc,
    pub update_date: DateTimeUtc,
    pub method: String,
    pub endpoint: String,
    pub status_code: i32,
    pub client_ip: Option<String>,
    pub proxy_ip: Option<String>,
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
            ("method", self.method.clone().into()),
            ("endpoint", self.endpoint.clone().into()),
            ("status_code", self.status_code.into()),
            ("client_ip", self.client_ip.clone().into()),
            ("proxy_ip", self.proxy_ip.clone().into()),
        ]
    }
}
