use serde_json::{json, Value};
use vercel_runtime::{Body, Response, StatusCode};

use crate::error::AppError;

pub fn error_response(err: &AppError) -> (StatusCode, Value) {
    match err {
        AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, json!({"error":"Method not allowed"})),
        AppError::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, json!({"error":"Server misconfigured","detail":msg})),
        AppError::InvalidBody(msg) => (StatusCode::BAD_REQUEST, json!({"error":"Invalid JSON body","detail":msg})),
        AppError::Upstream { status, detail } => {
            let code = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            match detail {
                Some(d) => (code, json!({"error":"AI request failed","detail":d})),
                None => (code, json!({"error":"AI request failed"})),
            }
        }
        // Detail stays in the logs.
        AppError::Other(_) => (StatusCode::INTERNAL_SERVER_ERROR, json!({"error":"Server error"})),
    }
}

pub fn json_response<T: serde::Serialize>(status: StatusCode, value: &T) -> anyhow::Result<Response<Body>> {
    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", "application/json");
    if status == StatusCode::METHOD_NOT_ALLOWED {
        builder = builder.header("Allow", "POST");
    }
    Ok(builder.body(serde_json::to_string(value)?.into())?)
}
