//! Structural checks on the `POST /predict` body, run before the model.

use inferences::{Features, FEATURE_COUNT};
use serde_json::Value;
use thiserror::Error;

use crate::models::PredictionRequest;

/// Why a body was refused. The messages are part of the public API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Les données doivent contenir la clé 'features'.")]
    MissingFeatures,
    #[error("Les 'features' doivent être une liste de 4 éléments.")]
    InvalidLength,
    #[error("Les 'features' doivent être des valeurs numériques.")]
    NonNumeric,
}

/// Checks the decoded body in order: key present, list of four, all numeric.
/// The first failing rule wins.
pub fn validate(body: &Value) -> Result<PredictionRequest, ValidationError> {
    let features = body
        .as_object()
        .filter(|map| !map.is_empty())
        .and_then(|map| map.get("features"))
        .ok_or(ValidationError::MissingFeatures)?;

    let items = features
        .as_array()
        .filter(|items| items.len() == FEATURE_COUNT)
        .ok_or(ValidationError::InvalidLength)?;

    let mut values = [0f32; FEATURE_COUNT];
    for (slot, item) in values.iter_mut().zip(items) {
        // finite values beyond f32::MAX become infinite; the model rejects them
        *slot = to_number(item).ok_or(ValidationError::NonNumeric)? as f32;
    }

    Ok(PredictionRequest {
        features: Features::new(values),
    })
}

// Numbers and numeric strings; booleans, null and containers are refused.
fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

impl TryFrom<&Value> for PredictionRequest {
    type Error = ValidationError;

    fn try_from(body: &Value) -> Result<Self, Self::Error> {
        validate(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_features_keep_order() {
        let request = validate(&json!({ "features": [5.1, 3.5, 1.4, 0.2] })).unwrap();
        assert_eq!(request.features, Features::new([5.1, 3.5, 1.4, 0.2]));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let body = json!({ "features": [1, 2, 3, 4], "id": "abc", "debug": true });
        let request = PredictionRequest::try_from(&body).unwrap();
        assert_eq!(request.features.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_missing_features_key() {
        for body in [
            json!(null),
            json!({}),
            json!({ "feature": [1, 2, 3, 4] }),
            json!([5.1, 3.5, 1.4, 0.2]),
            json!("features"),
            json!(42),
        ] {
            assert_eq!(validate(&body), Err(ValidationError::MissingFeatures), "{}", body);
        }
    }

    #[test]
    fn test_features_must_be_a_list_of_four() {
        for features in [
            json!([5.1, 3.5]),
            json!([1, 2, 3, 4, 5]),
            json!([]),
            json!(5.1),
            json!("5.1, 3.5, 1.4, 0.2"),
            json!({ "a": 1, "b": 2, "c": 3, "d": 4 }),
            json!(null),
        ] {
            let body = json!({ "features": features });
            assert_eq!(validate(&body), Err(ValidationError::InvalidLength), "{}", body);
        }
    }

    #[test]
    fn test_features_must_be_numeric() {
        for features in [
            json!(["a", "b", "c", "d"]),
            json!([5.1, 3.5, 1.4, "x"]),
            json!([5.1, 3.5, 1.4, null]),
            json!([5.1, 3.5, 1.4, true]),
            json!([5.1, 3.5, 1.4, [0.2]]),
            json!([5.1, 3.5, 1.4, { "v": 0.2 }]),
            json!([5.1, 3.5, 1.4, ""]),
        ] {
            let body = json!({ "features": features });
            assert_eq!(validate(&body), Err(ValidationError::NonNumeric), "{}", body);
        }
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let request = validate(&json!({ "features": ["5.1", " 3.5 ", "1.4", 0.2] })).unwrap();
        assert_eq!(request.features, Features::new([5.1, 3.5, 1.4, 0.2]));
    }

    #[test]
    fn test_nan_string_passes_validation() {
        let request = validate(&json!({ "features": ["nan", 3.5, 1.4, 0.2] })).unwrap();
        assert!(request.features.0[0].is_nan());
    }

    #[test]
    fn test_values_beyond_f32_range_become_infinite() {
        let request = validate(&json!({ "features": [1e39, 3.5, 1.4, -1e39] })).unwrap();
        assert_eq!(request.features.0[0], f32::INFINITY);
        assert_eq!(request.features.0[3], f32::NEG_INFINITY);
        assert_eq!(request.features.0[1], 3.5);
    }

    #[test]
    fn test_length_is_checked_before_types() {
        let body = json!({ "features": ["a", "b"] });
        assert_eq!(validate(&body), Err(ValidationError::InvalidLength));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::MissingFeatures.to_string(),
            "Les données doivent contenir la clé 'features'."
        );
        assert_eq!(
            ValidationError::InvalidLength.to_string(),
            "Les 'features' doivent être une liste de 4 éléments."
        );
        assert_eq!(
            ValidationError::NonNumeric.to_string(),
            "Les 'features' doivent être des valeurs numériques."
        );
    }
}
