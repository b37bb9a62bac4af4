use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use shared::errors::ErrorResponse;
use validator::{Validate, ValidationErrors};

/// Json extractor that runs `validator` rules and rejects with the standard
/// `{"detail": ...}` body on malformed JSON or failed validation.
pub struct SimpleValidatedJson<T>(pub T);

fn rejection(status: StatusCode, detail: String) -> (StatusCode, axum::Json<ErrorResponse>) {
    (status, axum::Json(ErrorResponse { detail }))
}

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<ErrorResponse>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(body) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|err| rejection(err.status(), err.body_text()))?;

        body.validate()
            .map_err(|errs| rejection(StatusCode::BAD_REQUEST, describe_failures(&errs)))?;

        Ok(Self(body))
    }
}

/// Flattens every field failure into one `field: message` line, preferring
/// the message declared on the rule over the rule code.
fn describe_failures(errors: &ValidationErrors) -> String {
    let lines: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, failures)| {
            failures.iter().map(move |failure| {
                let message = match &failure.message {
                    Some(message) => message.to_string(),
                    None => match failure.code.as_ref() {
                        "length" => format!("{field} has an invalid length"),
                        "range" => format!("{field} is out of range"),
                        code => format!("{field} failed the {code} check"),
                    },
                };
                format!("{field}: {message}")
            })
        })
        .collect();

    if lines.is_empty() {
        "Validation failed".to_string()
    } else {
        lines.join("; ")
    }
}
