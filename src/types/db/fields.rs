use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

/// A single column value as exposed by [`FieldMap::fields`]
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
    Timestamp(DateTime<Utc>),
    Null,
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Integer(i) => Value::from(i),
            FieldValue::Text(s) => Value::String(s),
            FieldValue::Timestamp(ts) => Value::String(ts.to_rfc3339_opts(SecondsFormat::Micros, true)),
            FieldValue::Null => Value::Null,
        }
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Explicit field listing for entity models
///
/// Each entity lists its columns in declaration order; `serialize` turns that
/// listing into a JSON object without any runtime reflection.
pub trait FieldMap {
    /// Column name and value pairs, in declaration order
    fn fields(&self) -> Vec<(&'static str, FieldValue)>;

    /// Convert the model to a JSON object, skipping any field named in `exclude`
    ///
    /// Timestamps are rendered as RFC 3339 strings; other scalars pass through.
    fn serialize(&self, exclude: &[&str]) -> Map<String, Value> {
        self.fields()
            .into_iter()
            .filter(|(name, _)| !exclude.contains(name))
            .map(|(name, value)| (name.to_string(), value.into()))
            .collect()
    }
}

/// Implements `ActiveModelBehavior` for an entity with the shared
/// `creation_date` / `update_date` columns.
///
/// `creation_date` is stamped on insert when the caller left it unset;
/// `update_date` is refreshed on every save.
macro_rules! timestamped_behavior {
    () => {
        #[async_trait::async_trait]
        impl sea_orm::ActiveModelBehavior for ActiveModel {
            async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, sea_orm::DbErr>
            where
                C: sea_orm::ConnectionTrait,
            {
                let now = chrono::Utc::now();
                if insert && self.creation_date.is_not_set() {
                    self.creation_date = sea_orm::ActiveValue::Set(now);
                }
                self.update_date = sea_orm::ActiveValue::Set(now);
                Ok(self)
            }
        }
    };
}

pub(crate) use timestamped_behavior;
