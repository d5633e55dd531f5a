//! API response helpers

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use serde::Serialize;

/// Key the payload of a successful response is wrapped in
enum Envelope {
    /// `{ "data": ... }`
    Data,

    /// `{ "message": ... }`
    Message,
}

/// Hold data for a successful API interaction
pub struct Success<V>
where
    V: Serialize,
{
    status_code: StatusCode,
    envelope: Envelope,
    data: V,
}

impl<V> Success<V>
where
    V: Serialize,
{
    pub fn ok(data: V) -> Self {
        Self {
            status_code: StatusCode::OK,
            envelope: Envelope::Data,
            data,
        }
    }

    /// Successful response with the payload under `message` instead of `data`
    pub fn message(message: V) -> Self {
        Self {
            status_code: StatusCode::OK,
            envelope: Envelope::Message,
            data: message,
        }
    }
}

#[derive(Serialize)]
struct DataWrapper<D>
where
    D: Serialize,
{
    data: D,
}

#[derive(Serialize)]
struct MessageWrapper<D>
where
    D: Serialize,
{
    message: D,
}

impl<V> IntoResponse for Success<V>
where
    V: Serialize,
{
    fn into_response(self) -> Response {
        match self.envelope {
            Envelope::Data => {
                (self.status_code, Json(DataWrapper { data: self.data })).into_response()
            }
            Envelope::Message => (
                self.status_code,
                Json(MessageWrapper {
                    message: self.data,
                }),
            )
                .into_response(),
        }
    }
}

/// Hold data for a failed API interaction
///
/// Every failure leaves the API with this shape
#[derive(Debug)]
pub struct Error {
    status_code: StatusCode,
    message: String,
    description: Option<String>,
}

impl Error {
    pub fn bad_request<M>(message: M) -> Self
    where
        M: ToString,
    {
        Self {
            status_code: StatusCode::BAD_REQUEST,
            message: message.to_string(),
            description: None,
        }
    }

    pub fn with_description<M>(self, description: M) -> Self
    where
        M: ToString,
    {
        Self {
            description: Some(description.to_string()),
            ..self
        }
    }
}

#[derive(Serialize)]
struct ErrorWrapper<D>
where
    D: Serialize,
{
    error: D,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<D>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (
            self.status_code,
            Json(ErrorWrapper {
                error: self.message,
                description: self.description,
            }),
        )
            .into_response()
    }
}
