use serde::Serialize;

/// Returned when an action body cannot be deserialized at all.
pub const MALFORMED_BODY_MESSAGE: &str =
    "The request could not be read. Please check the form and try again.";

/// Result envelope returned by the model-backed actions.
///
/// Exactly one of `data` / `error` is set; both keys are always present on
/// the wire (`null` when absent) so the UI can destructure `{data, error}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionResult<T>
where
    T: Serialize,
{
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ActionResult<T>
where
    T: Serialize,
{
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }

    #[cfg(test)]
    pub fn is_success(&self) -> bool {
        self.data.is_some()
    }
}
