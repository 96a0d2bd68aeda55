use sea_orm::{ColumnTrait, Set};

use crate::config::Session;
use crate::errors::InternalError;
use crate::stores::Repository;
use crate::types::db::stored_parameter::{self, Column};
use crate::types::db::FieldMap;
use crate::types::dto::default::{CreateParameterRequest, DefaultResponse};

const NO_PARAMETER: &str = "No parameter passed";

/// Store `value` as a new parameter
///
/// An absent or empty value is answered with 404 without touching storage.
pub async fn save_parameter(session: Session, value: Option<&str>) -> Result<DefaultResponse, InternalError> {
    match value.filter(|v| !v.is_empty()) {
        Some(value) => insert_parameter(session, value).await,
        None => Ok(DefaultResponse::not_found(NO_PARAMETER)),
    }
}

/// Look up the stored parameter whose value equals `value`
///
/// An absent or empty value is answered with 422 without querying storage.
pub async fn get_parameter(mut session: Session, value: Option<&str>) -> Result<DefaultResponse, InternalError> {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return Ok(DefaultResponse::unprocessable(NO_PARAMETER));
    };

    let found = Repository::<stored_parameter::Entity>::returning_empty()
        .fetch_one(session.connection().await?, vec![Column::QueryParameter.eq(value)])
        .await?;
    session.commit().await?;

    Ok(match found {
        Some(parameter) => DefaultResponse::found(parameter.serialize(&["update_date"])),
        None => {
            tracing::debug!("Parameter {} not found", value);
            DefaultResponse::not_found(format!("Parameter {} not found", value))
        }
    })
}

/// Store a parameter from a validated request body
///
/// `input.query_parameter` is guaranteed non-empty by the request schema.
pub async fn create_parameter(session: Session, input: CreateParameterRequest) -> Result<DefaultResponse, InternalError> {
    insert_parameter(session, &input.query_parameter).await
}

async fn insert_parameter(mut session: Session, value: &str) -> Result<DefaultResponse, InternalError> {
    let row = stored_parameter::ActiveModel {
        query_parameter: Set(Some(value.to_string())),
        ..Default::default()
    };

    let stored = Repository::<stored_parameter::Entity>::returning_empty()
        .add(session.connection().await?, row)
        .await?;
    session.commit().await?;

    tracing::info!("Saved parameter with ID {}", stored.id);

    Ok(DefaultResponse::saved(value, stored.id))
}
