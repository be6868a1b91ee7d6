use serde::{Deserialize, Serialize};

pub mod presenter;
pub mod workflow;

/// Successful response body of the classifier endpoint.
///
/// The service answers `{ "class": "<label>", "confidence": <0..1> }`;
/// anything else is treated as a failed prediction.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PredictionResult {
    #[serde(rename = "class")]
    pub class_label: String,
    pub confidence: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_classifier_response_body() {
        let result: PredictionResult =
            serde_json::from_str(r#"{ "class": "Late Blight", "confidence": 0.93 }"#).unwrap();
        assert_eq!(result.class_label, "Late Blight");
        assert!((result.confidence - 0.93).abs() < 1e-6);
    }

    #[test]
    fn rejects_body_without_confidence() {
        let result = serde_json::from_str::<PredictionResult>(r#"{ "class": "Healthy" }"#);
        assert!(result.is_err());
    }
}
