//! Crop-yield prediction on top of the advisory call.
//!
//! The model is asked for a strict JSON object; whatever comes back is
//! coerced into a [`YieldPrediction`] rather than trusted.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use kisan_types::error::PredictionError;
use kisan_types::prediction::{canonical_state, FarmParameters, YieldFactors, YieldPrediction};

/// Greedy, multi-line match of the outermost `{...}` block.
static JSON_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("valid JSON block regex"));

/// Validate farm parameters and normalize the state name.
pub fn validate_parameters(params: &FarmParameters) -> Result<FarmParameters, PredictionError> {
    for (field, value) in [
        ("nitrogen", params.nitrogen),
        ("phosphorus", params.phosphorus),
        ("potassium", params.potassium),
        ("rainfall", params.rainfall_mm),
        ("area", params.area_hectares),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(PredictionError::InvalidValue {
                field,
                value: value.to_string(),
            });
        }
    }

    if params.state.trim().is_empty() {
        return Err(PredictionError::MissingField("state"));
    }
    let state = canonical_state(&params.state)
        .ok_or_else(|| PredictionError::UnknownState(params.state.clone()))?;

    Ok(FarmParameters {
        state: state.to_string(),
        ..params.clone()
    })
}

/// Build the strict-JSON yield prompt for validated parameters.
pub fn build_prompt(params: &FarmParameters) -> Result<String, PredictionError> {
    let params = validate_parameters(params)?;
    Ok(format!(
        "You are an agriculture assistant. Return a STRICT JSON object (no prose) with keys: \
         expectedYield (number, tons per hectare), confidence (number 0-100), explanation \
         (short string, 1-3 sentences explaining the predicted yield), recommendations \
         (array of 3-5 short strings), factors (object with weather, soil, irrigation as \
         numbers 0-100).\n\nInput:\n\
         - Nitrogen (N): {}\n\
         - Phosphorus (P): {}\n\
         - Potassium (K): {}\n\
         - State: {}\n\
         - Rainfall (mm): {}\n\
         - Area (hectares): {}",
        params.nitrogen,
        params.phosphorus,
        params.potassium,
        params.state,
        params.rainfall_mm,
        params.area_hectares,
    ))
}

/// Parse model output into a prediction.
///
/// The whole content is tried as a JSON object first, then the outermost
/// `{...}` block inside it (models often wrap JSON in prose or fences).
pub fn parse_prediction(content: &str) -> Result<YieldPrediction, PredictionError> {
    let object = match serde_json::from_str::<Value>(content) {
        Ok(value) if value.is_object() => value,
        _ => JSON_BLOCK
            .find(content)
            .and_then(|m| serde_json::from_str::<Value>(m.as_str()).ok())
            .filter(Value::is_object)
            .ok_or(PredictionError::InvalidJson)?,
    };

    let factors = object.get("factors");
    let factor = |name: &str| percentage(factors.and_then(|f| f.get(name)));

    Ok(YieldPrediction {
        expected_yield: number(object.get("expectedYield")),
        confidence: percentage(object.get("confidence")),
        explanation: match object.get("explanation") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        },
        recommendations: match object.get("recommendations") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
            _ => Vec::new(),
        },
        factors: YieldFactors {
            weather: factor("weather"),
            soil: factor("soil"),
            irrigation: factor("irrigation"),
        },
    })
}

/// Lenient numeric coercion; anything unusable becomes 0.
fn number(value: Option<&Value>) -> f64 {
    let n = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    };
    if n.is_finite() { n } else { 0.0 }
}

fn percentage(value: Option<&Value>) -> f64 {
    number(value).clamp(0.0, 100.0)
}
