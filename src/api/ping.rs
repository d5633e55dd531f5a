//! Health check

use super::Success;

/// Always answers, no storage involved
///
/// Request:
/// ```sh
/// curl -v http://localhost:3000/ping
/// ```
///
/// Response:
/// ```json
/// { "message": "ping" }
/// ```
#[allow(clippy::unused_async)]
pub async fn ping() -> Success<&'static str> {
    Success::message("ping")
}
