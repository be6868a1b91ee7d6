use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::PredictionResult;
use thiserror::Error;

/// Classifier endpoint, resolved once from the build environment.
const API_ENDPOINT: &str = match option_env!("PREDICT_API_ENDPOINT") {
    Some(url) => url,
    None => "/predict",
};

/// Failure of a single prediction round trip.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Network error: {0}")]
    Network(gloo_net::Error),
    #[error("Server error: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Malformed(gloo_net::Error),
}

/// Sends the leaf image to the classifier and parses its verdict.
///
/// One multipart POST with the raw bytes under the `file` field, then wait
/// for resolution. No retries, no timeout, no cancellation.
pub async fn predict(file: &GlooFile) -> Result<PredictionResult, PredictionError> {
    let form_data = web_sys::FormData::new().expect("failed to create form data");
    form_data
        .append_with_blob("file", file.as_ref())
        .expect("failed to attach file to form data");

    let response = Request::post(API_ENDPOINT)
        .body(form_data)
        .map_err(PredictionError::Network)?
        .send()
        .await
        .map_err(PredictionError::Network)?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(PredictionError::Status { status, body });
    }

    response
        .json::<PredictionResult>()
        .await
        .map_err(PredictionError::Malformed)
}
