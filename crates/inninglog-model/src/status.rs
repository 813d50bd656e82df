use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::openapi::{RefOr, Schema};
use utoipa::{PartialSchema, ToSchema, schema};

/// Health report of the service, one entry per backing component.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceStatus {
    pub database: Value,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentState {
    Ok,
    Error,
}

/// Serializes as the bare state (`"ok"`/`"error"`) unless a detail message is attached.
#[derive(Debug, Clone)]
pub struct ComponentStatus {
    state: ComponentState,
    detail: Option<String>,
}

impl PartialSchema for ComponentStatus {
    fn schema() -> RefOr<Schema> {
        schema!(String).into()
    }
}

impl ToSchema for ComponentStatus {}

impl Serialize for ComponentStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match &self.detail {
            Some(detail) => detail.serialize(serializer),
            None => self.state.serialize(serializer),
        }
    }
}

impl ComponentStatus {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            state: ComponentState::Ok,
            detail: None,
        }
    }

    #[must_use]
    pub fn error() -> Self {
        Self {
            state: ComponentState::Error,
            detail: None,
        }
    }

    #[must_use]
    pub fn error_with(detail: impl Into<String>) -> Self {
        Self {
            state: ComponentState::Error,
            detail: Some(detail.into()),
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.state == ComponentState::Ok
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        match self.detail {
            Some(detail) => Value::String(detail),
            None => match self.state {
                ComponentState::Ok => json!("ok"),
                ComponentState::Error => json!("error"),
            },
        }
    }
}
