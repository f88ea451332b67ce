//! Schema listing and vertical result card rendering.
//!
//! Renders a prediction result as a grouped, human-readable card. Sections
//! with nothing to show (no improved risk, no recommendations) are omitted
//! entirely.

use std::fmt::Write;

use talmo_core::{FieldDescriptor, FieldKind, PredictionResult, format_probability};

/// Print-ready listing of the form definition, one field per entry.
pub fn schema_listing(fields: &[FieldDescriptor]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} fields", fields.len());
    for field in fields {
        let _ = write!(out, "  {:<12} {}", field.id, field.label);
        if let Some(unit) = &field.unit {
            let _ = write!(out, " ({unit})");
        }
        match field.kind {
            FieldKind::Input => {
                let _ = writeln!(out, "  [number]");
            }
            FieldKind::Select => {
                let choices: Vec<String> = field
                    .options
                    .iter()
                    .map(|opt| format!("{}={}", opt.value, opt.label))
                    .collect();
                let _ = writeln!(out, "  [select: {}]", choices.join(", "));
            }
        }
        if let Some(desc) = &field.description {
            let _ = writeln!(out, "{:<14} {desc}", "");
        }
    }
    out
}

/// Render a prediction result as a vertical card.
pub fn result_card(result: &PredictionResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Prediction ===");
    let _ = writeln!(out);

    let _ = writeln!(out, "Current");
    let _ = writeln!(out, "  {:<14} {}", "label", result.current.label);
    let _ = writeln!(
        out,
        "  {:<14} {} (threshold {}%)",
        "probability",
        format_probability(result.current.probability_percent),
        result.current.threshold_percent
    );

    if let Some(improved) = &result.improved {
        let _ = writeln!(out);
        let _ = writeln!(out, "After improvements");
        let _ = writeln!(out, "  {:<14} {}", "label", improved.label);
        let _ = writeln!(
            out,
            "  {:<14} {}",
            "probability",
            format_probability(improved.probability_percent)
        );
    }

    let recommendations = result.recommendations();
    if !recommendations.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Recommendations ({}):", recommendations.len());
        for rec in recommendations {
            let _ = writeln!(out, "  - {rec}");
        }
    }

    let patient_info = result.patient_info();
    if !patient_info.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Patient info");
        for row in patient_info {
            let _ = writeln!(out, "  {:<14} {}", row.label, row.value);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use talmo_core::{CurrentRisk, FieldOption, ImprovedRisk, PatientInfoRow};

    fn minimal_result() -> PredictionResult {
        PredictionResult {
            current: CurrentRisk {
                label: "Low risk".into(),
                probability_percent: 12.3456,
                threshold_percent: 50.0,
            },
            improved: None,
            recommendations: None,
            patient_info: None,
        }
    }

    #[test]
    fn card_shows_label_and_rounded_probability() {
        let card = result_card(&minimal_result());
        assert!(card.contains("Low risk"));
        assert!(card.contains("12.35%"));
        assert!(card.contains("threshold 50%"));
    }

    #[test]
    fn card_omits_improved_section_when_absent() {
        let card = result_card(&minimal_result());
        assert!(!card.contains("After improvements"));
    }

    #[test]
    fn card_omits_recommendations_when_empty() {
        let mut result = minimal_result();
        result.recommendations = Some(Vec::new());
        let card = result_card(&result);
        assert!(!card.contains("Recommendations"));
    }

    #[test]
    fn card_shows_improved_and_recommendations_when_present() {
        let mut result = minimal_result();
        result.improved = Some(ImprovedRisk {
            label: "정상".into(),
            probability_percent: 33.9,
        });
        result.recommendations = Some(vec!["운동 빈도 늘리기".into()]);
        result.patient_info = Some(vec![PatientInfoRow {
            label: "나이".into(),
            value: "34".into(),
        }]);

        let card = result_card(&result);
        assert!(card.contains("After improvements"));
        assert!(card.contains("33.90%"));
        assert!(card.contains("- 운동 빈도 늘리기"));
        assert!(card.contains("나이"));
    }

    #[test]
    fn schema_listing_has_one_entry_per_field() {
        let fields = vec![
            FieldDescriptor {
                id: "uv_value2".into(),
                label: "나이".into(),
                kind: FieldKind::Input,
                unit: Some("세".into()),
                description: None,
                options: Vec::new(),
            },
            FieldDescriptor {
                id: "uv_value1".into(),
                label: "성별".into(),
                kind: FieldKind::Select,
                unit: None,
                description: Some("주민등록 기준".into()),
                options: vec![
                    FieldOption {
                        value: "0".into(),
                        label: "여성".into(),
                    },
                    FieldOption {
                        value: "1".into(),
                        label: "남성".into(),
                    },
                ],
            },
        ];
        let listing = schema_listing(&fields);
        assert!(listing.starts_with("2 fields"));
        assert!(listing.contains("uv_value2"));
        assert!(listing.contains("(세)"));
        assert!(listing.contains("[select: 0=여성, 1=남성]"));
        assert!(listing.contains("주민등록 기준"));
    }
}
