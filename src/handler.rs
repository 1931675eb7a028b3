use vercel_runtime::{Body, Error, Request, Response, StatusCode};

use crate::{
    clients::openai::OpenAiClient,
    config::OpenAiSettings,
    error::{AppError, Result},
    http::response::{error_response, json_response},
    models::mood::{MoodRequest, MoodResponse},
    services::mood_classifier,
};

/// Vercel entrypoint for `/api/ai`. Settings come from the process environment.
pub async fn handler(req: Request) -> std::result::Result<Response<Body>, Error> {
    respond(req.method().as_str(), req.body(), OpenAiSettings::from_env).await
}

/// Runs one request and renders either the classification or a JSON error body.
pub async fn respond<F>(method: &str, body: &[u8], load_settings: F) -> std::result::Result<Response<Body>, Error>
where
    F: FnOnce() -> Result<OpenAiSettings>,
{
    match process(method, body, load_settings).await {
        Ok(resp) => Ok(json_response(StatusCode::OK, &resp)?),
        Err(err) => {
            log_failure(&err);
            let (status, value) = error_response(&err);
            Ok(json_response(status, &value)?)
        }
    }
}

pub async fn process<F>(method: &str, body: &[u8], load_settings: F) -> Result<MoodResponse>
where
    F: FnOnce() -> Result<OpenAiSettings>,
{
    if method != "POST" {
        return Err(AppError::MethodNotAllowed);
    }
    let settings = load_settings()?;
    let req = MoodRequest::from_body(body)?;

    let client = OpenAiClient::new(settings);
    let resp = mood_classifier::classify(&client, &req).await?;
    tracing::info!(
        moods = req.moods.len(),
        story_len = req.story.len(),
        inferred = resp.inferred_moods.len(),
        "mood classified"
    );
    Ok(resp)
}

fn log_failure(err: &AppError) {
    match err {
        AppError::MethodNotAllowed => tracing::debug!("rejected non-POST request"),
        AppError::InvalidBody(msg) => tracing::warn!(detail = %msg, "invalid request body"),
        AppError::Config(msg) => tracing::error!(detail = %msg, "server misconfigured"),
        AppError::Upstream { status, detail } => {
            tracing::error!(status, detail = ?detail, "OpenAI error")
        }
        AppError::Other(e) => tracing::error!(error = ?e, "unexpected failure"),
    }
}
