use actix_web::{error::JsonPayloadError, HttpRequest, HttpResponse};

use crate::errors::ApiError;

pub async fn path_not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound(format!("Path not found: {}", req.path())))
}

pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed(format!(
        "{} not allowed for {}",
        req.method(),
        req.path()
    )))
}

/// Malformed bodies get the same error shape as guard failures.
pub fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("Invalid JSON body: {err}")).into()
}
