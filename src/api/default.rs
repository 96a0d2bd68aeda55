use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::app_data::AppData;
use crate::config::GetMode;
use crate::errors::DefaultError;
use crate::keepers;
use crate::types::dto::default::{CreateParameterRequest, DefaultResponse};

/// Default parameter endpoints
pub struct DefaultApi {
    app_data: Arc<AppData>,
}

impl DefaultApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }

    async fn dispatch_get(&self, value: Option<&str>) -> Result<DefaultResponse, DefaultError> {
        let session = self.app_data.sessions.session();

        let response = match self.app_data.settings.get_mode() {
            GetMode::Lookup => keepers::get_parameter(session, value).await?,
            GetMode::Store => keepers::save_parameter(session, value).await?,
        };

        Ok(response)
    }
}

/// API tags for default parameter endpoints
#[derive(Tags)]
enum DefaultTags {
    /// Default parameter endpoints
    Default,
}

#[OpenApi(prefix_path = "/default")]
impl DefaultApi {
    /// Look up (or, in store mode, save) a parameter by value
    #[oai(path = "/:value", method = "get", tag = "DefaultTags::Default")]
    async fn get_default(&self, value: Path<String>) -> Result<DefaultResponse, DefaultError> {
        self.dispatch_get(Some(value.0.as_str())).await
    }

    /// Same route with the value segment missing
    #[oai(path = "/", method = "get", tag = "DefaultTags::Default")]
    async fn get_default_without_value(&self) -> Result<DefaultResponse, DefaultError> {
        self.dispatch_get(None).await
    }

    /// Create a parameter from a JSON body
    #[oai(path = "/", method = "post", tag = "DefaultTags::Default")]
    async fn create_default(&self, body: Json<CreateParameterRequest>) -> Result<DefaultResponse, DefaultError> {
        let session = self.app_data.sessions.session();

        Ok(keepers::create_parameter(session, body.0).await?)
    }
}
