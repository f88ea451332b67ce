//! Prediction result types returned by `/api/predict/kr`.

use serde::{Deserialize, Serialize};

/// Risk summary for the values as submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentRisk {
    pub label: String,
    pub probability_percent: f64,
    pub threshold_percent: f64,
}

/// Risk summary after the suggested lifestyle improvements are applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovedRisk {
    pub label: String,
    pub probability_percent: f64,
}

/// One row of the patient-info echo table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientInfoRow {
    pub label: String,
    pub value: String,
}

/// Structured response rendered after submission.
///
/// `improved` and `recommendations` are nullable and gate whether the
/// improved card and the recommendation list are shown at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub current: CurrentRisk,
    #[serde(default)]
    pub improved: Option<ImprovedRisk>,
    #[serde(default)]
    pub recommendations: Option<Vec<String>>,
    #[serde(default)]
    pub patient_info: Option<Vec<PatientInfoRow>>,
}

impl PredictionResult {
    /// Recommendations to display, treating null and empty alike.
    pub fn recommendations(&self) -> &[String] {
        self.recommendations.as_deref().unwrap_or_default()
    }

    /// Patient-info rows to display.
    pub fn patient_info(&self) -> &[PatientInfoRow] {
        self.patient_info.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_result_parses() {
        let json = r#"{
            "current": {"label": "원형탈모", "probability_percent": 61.27, "threshold_percent": 42.0},
            "improved": {"label": "정상", "probability_percent": 33.9},
            "recommendations": ["혈압을 120/80 mmHg 이하로 낮추기", "운동 빈도 늘리기"],
            "patient_info": [{"id": "uv_value2", "label": "나이", "value": "34"}]
        }"#;
        let result: PredictionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.current.label, "원형탈모");
        assert_eq!(result.current.threshold_percent, 42.0);
        assert_eq!(result.improved.as_ref().unwrap().probability_percent, 33.9);
        assert_eq!(result.recommendations().len(), 2);
        assert_eq!(result.patient_info()[0].label, "나이");
    }

    #[test]
    fn null_improved_and_recommendations_parse_as_absent() {
        let json = r#"{
            "current": {"label": "정상", "probability_percent": 12.34, "threshold_percent": 42.0},
            "improved": null,
            "recommendations": null,
            "patient_info": []
        }"#;
        let result: PredictionResult = serde_json::from_str(json).unwrap();
        assert!(result.improved.is_none());
        assert!(result.recommendations().is_empty());
        assert!(result.patient_info().is_empty());
    }

    #[test]
    fn minimal_result_parses() {
        let json = r#"{"current": {"label": "Low risk", "probability_percent": 12.345, "threshold_percent": 50}}"#;
        let result: PredictionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.current.label, "Low risk");
        assert!(result.improved.is_none());
        assert!(result.recommendations().is_empty());
        assert!(result.patient_info().is_empty());
    }
}
