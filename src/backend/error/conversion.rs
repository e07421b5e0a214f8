//! Error Conversion
//!
//! `IntoResponse` for [`AuthError`], so handlers can return it directly.
//! The body is the wire error shape:
//!
//! ```json
//! {
//!   "statusCode": 401,
//!   "message": "Invalid credentials"
//! }
//! ```

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::AuthError;
use crate::shared::types::ErrorBody;

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("request failed: {self}");
        }

        let body = ErrorBody {
            status_code: status.as_u16(),
            message: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}
