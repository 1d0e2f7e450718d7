//! # Request Boundary
//!
//! Turns a loosely-typed takeoff request into validated calculation input
//! and wraps the result in the response shape clients expect.
//!
//! Request fields arrive as whatever the client sent: HTML forms post
//! numbers as strings, checkboxes as `"on"`. Each field is coerced on its
//! own so a failure names the field. Absent fields take an explicit
//! default (0 or `false`) *before* validation, so a missing dimension is
//! reported as non-positive rather than silently computed.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::api::generate_json;
//!
//! let body = r#"{
//!     "scaffold_type": "facade",
//!     "length": "14", "width": 5, "height": 13,
//!     "working_levels": "2", "include_ladder": true
//! }"#;
//!
//! let response = generate_json(body).unwrap();
//! assert_eq!(response.summary.bay_configuration, "2 bay(s) @ 7.0ft x 5.0ft");
//! assert_eq!(response.materials.quantity("7.0 ft Ledgers"), Some(18));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::calculations::{CalculationItem, FacadeInput, FacadeResult, ScaffoldType, SummaryRecord};
use crate::errors::{CalcError, CalcResult};
use crate::materials::MaterialTable;

/// Raw takeoff request.
///
/// ## JSON Example
///
/// ```json
/// {
///   "scaffold_type": "facade",
///   "length": "14",
///   "width": "5",
///   "height": "13",
///   "working_levels": "2",
///   "include_ladder": true
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub scaffold_type: Option<String>,
    #[serde(default)]
    pub length: Option<Value>,
    #[serde(default)]
    pub width: Option<Value>,
    #[serde(default)]
    pub height: Option<Value>,
    #[serde(default)]
    pub working_levels: Option<Value>,
    #[serde(default)]
    pub include_ladder: Option<Value>,
}

impl GenerateRequest {
    /// Apply defaults, coerce every field and validate.
    ///
    /// # Errors
    ///
    /// * `MissingField` - no `scaffold_type`
    /// * `UnsupportedScaffoldType` - a type with no calculator
    /// * `InvalidInput` - a value that cannot be coerced, or one outside the
    ///   limits of [`FacadeInput::validate`]
    pub fn to_input(&self) -> CalcResult<CalculationItem> {
        let scaffold_type = match self.scaffold_type.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => ScaffoldType::parse(name)?,
            _ => return Err(CalcError::missing_field("scaffold_type")),
        };

        match scaffold_type {
            ScaffoldType::Facade => {
                let input = FacadeInput {
                    length_ft: number("length", self.length.as_ref())?,
                    width_ft: number("width", self.width.as_ref())?,
                    height_ft: number("height", self.height.as_ref())?,
                    working_levels: level_count("working_levels", self.working_levels.as_ref())?,
                    include_ladder: flag("include_ladder", self.include_ladder.as_ref())?,
                };
                input.validate()?;
                Ok(CalculationItem::Facade(input))
            }
        }
    }
}

/// Takeoff response.
///
/// ## JSON Example
///
/// ```json
/// {
///   "summary": {
///     "Scaffold Type": "Facade Scaffold",
///     "Bay Configuration": "2 bay(s) @ 7.0ft x 5.0ft",
///     "Overall Dimensions": "~14.0ft L x 5.0ft W x 13.0ft H"
///   },
///   "materials": {
///     "Base Jacks / Collars (Starter)": 6,
///     "--- LADDERS ---": "",
///     "5 ft Ladder Section": 2
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub summary: SummaryRecord,
    pub materials: MaterialTable,
}

impl From<FacadeResult> for GenerateResponse {
    fn from(result: FacadeResult) -> Self {
        GenerateResponse {
            summary: result.summary,
            materials: result.materials,
        }
    }
}

/// Validate a request and run its takeoff.
pub fn generate(request: &GenerateRequest) -> CalcResult<GenerateResponse> {
    let item = request.to_input()?;
    debug!(?item, "validated takeoff request");

    let result = item.compute();
    info!(
        scaffold = item.scaffold_type().as_str(),
        bays = result.grid.num_bays,
        lines = result.materials.len(),
        "generated takeoff"
    );
    Ok(result.into())
}

/// Parse a JSON request body and run its takeoff.
pub fn generate_json(body: &str) -> CalcResult<GenerateResponse> {
    let request: GenerateRequest = serde_json::from_str(body)?;
    generate(&request)
}

fn invalid(field: &str, value: &Value, reason: &str) -> CalcError {
    CalcError::invalid_input(field, value.to_string(), reason)
}

/// Coerce a number or numeric string; absent, null and blank give 0.
fn number(field: &str, value: Option<&Value>) -> CalcResult<f64> {
    match value {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| invalid(field, &Value::Number(n.clone()), "Not representable as a number")),
        Some(v @ Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(0.0);
            }
            s.parse::<f64>().map_err(|_| invalid(field, v, "Expected a number"))
        }
        Some(v) => Err(invalid(field, v, "Expected a number")),
    }
}

/// Coerce a whole, non-negative count; absent, null and blank give 0.
fn level_count(field: &str, value: Option<&Value>) -> CalcResult<u32> {
    let count = match value {
        None | Some(Value::Null) => return Ok(0),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(0),
        Some(v) => number(field, Some(v))?,
    };
    let raw = value.cloned().unwrap_or(Value::Null);
    if !count.is_finite() || count.fract() != 0.0 {
        return Err(invalid(field, &raw, "Expected a whole number of levels"));
    }
    if count < 0.0 {
        return Err(invalid(field, &raw, "Level count cannot be negative"));
    }
    if count > f64::from(u32::MAX) {
        return Err(invalid(field, &raw, "Level count is too large"));
    }
    Ok(count as u32)
}

/// Coerce a boolean flag; absent, null and blank give `false`.
fn flag(field: &str, value: Option<&Value>) -> CalcResult<bool> {
    match value {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(v @ Value::Number(n)) => match n.as_f64() {
            Some(x) if x == 0.0 => Ok(false),
            Some(x) if x == 1.0 => Ok(true),
            _ => Err(invalid(field, v, "Expected 0 or 1")),
        },
        Some(v @ Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => Ok(true),
            "false" | "off" | "no" | "0" | "" => Ok(false),
            _ => Err(invalid(field, v, "Expected true or false")),
        },
        Some(v) => Err(invalid(field, v, "Expected true or false")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: Value) -> GenerateRequest {
        serde_json::from_value(value).unwrap()
    }

    fn scenario_b() -> Value {
        json!({
            "scaffold_type": "facade",
            "length": 14, "width": 5, "height": 13,
            "working_levels": 2, "include_ladder": true
        })
    }

    fn facade_input(value: Value) -> CalcResult<FacadeInput> {
        request(value).to_input().map(|item| match item {
            CalculationItem::Facade(input) => input,
        })
    }

    #[test]
    fn test_string_fields_are_coerced() {
        let input = facade_input(json!({
            "scaffold_type": "facade",
            "length": "14", "width": " 5.5 ", "height": "13",
            "working_levels": "2", "include_ladder": "on"
        }))
        .unwrap();
        assert_eq!(input.length_ft, 14.0);
        assert_eq!(input.width_ft, 5.5);
        assert_eq!(input.working_levels, 2);
        assert!(input.include_ladder);
    }

    #[test]
    fn test_optional_fields_default() {
        let input = facade_input(json!({
            "scaffold_type": "facade",
            "length": 14, "width": 5, "height": 13
        }))
        .unwrap();
        assert_eq!(input.working_levels, 0);
        assert!(!input.include_ladder);
    }

    #[test]
    fn test_missing_dimension_is_rejected() {
        let err = facade_input(json!({
            "scaffold_type": "facade",
            "length": 14, "height": 13
        }))
        .unwrap_err();
        assert_eq!(
            err,
            CalcError::invalid_input("width", "0", "Dimension must be positive")
        );
    }

    #[test]
    fn test_negative_dimension_is_rejected() {
        let err = facade_input(json!({
            "scaffold_type": "facade",
            "length": -14, "width": 5, "height": 13
        }))
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_non_numeric_dimension_is_rejected() {
        let err = facade_input(json!({
            "scaffold_type": "facade",
            "length": "fourteen", "width": 5, "height": 13
        }))
        .unwrap_err();
        match err {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "length"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_huge_dimensions_are_rejected() {
        for body in [
            json!({ "scaffold_type": "facade", "length": 1e300, "width": 5, "height": 13 }),
            json!({
                "scaffold_type": "facade",
                "length": 14, "width": 5, "height": 1e300,
                "working_levels": 2, "include_ladder": true
            }),
            json!({ "scaffold_type": "facade", "length": 14, "width": "1e300", "height": 13 }),
        ] {
            let err = generate(&request(body.clone())).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT", "body = {}", body);
        }
    }

    #[test]
    fn test_huge_level_count_is_rejected() {
        let err = generate(&request(json!({
            "scaffold_type": "facade",
            "length": 1e12, "width": 1e6, "height": 13,
            "working_levels": 4_000_000_000u64
        })))
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let err = facade_input(json!({
            "scaffold_type": "facade",
            "length": 14, "width": 5, "height": 13,
            "working_levels": 4_000_000_000u64
        }))
        .unwrap_err();
        match err {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "working_levels"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_infinite_dimension_string_is_rejected() {
        let err = facade_input(json!({
            "scaffold_type": "facade",
            "length": "inf", "width": 5, "height": 13
        }))
        .unwrap_err();
        match err {
            CalcError::InvalidInput { field, reason, .. } => {
                assert_eq!(field, "length");
                assert_eq!(reason, "Dimension must be finite");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_level_count_must_be_whole() {
        for levels in [json!(2.5), json!("1.5"), json!(-1), json!(true)] {
            let result = facade_input(json!({
                "scaffold_type": "facade",
                "length": 14, "width": 5, "height": 13,
                "working_levels": levels
            }));
            assert!(result.is_err(), "accepted working_levels = {}", levels);
        }

        let input = facade_input(json!({
            "scaffold_type": "facade",
            "length": 14, "width": 5, "height": 13,
            "working_levels": 3.0
        }))
        .unwrap();
        assert_eq!(input.working_levels, 3);
    }

    #[test]
    fn test_flag_coercion() {
        for (raw, expected) in [
            (json!(true), true),
            (json!("false"), false),
            (json!("TRUE"), true),
            (json!(0), false),
            (json!(1), true),
            (json!(""), false),
        ] {
            let input = facade_input(json!({
                "scaffold_type": "facade",
                "length": 14, "width": 5, "height": 13,
                "include_ladder": raw
            }))
            .unwrap();
            assert_eq!(input.include_ladder, expected, "include_ladder = {}", raw);
        }

        assert!(facade_input(json!({
            "scaffold_type": "facade",
            "length": 14, "width": 5, "height": 13,
            "include_ladder": "maybe"
        }))
        .is_err());
    }

    #[test]
    fn test_scaffold_type_required() {
        let err = generate(&request(json!({ "length": 14 }))).unwrap_err();
        assert_eq!(err, CalcError::missing_field("scaffold_type"));
    }

    #[test]
    fn test_unknown_scaffold_type_is_an_error() {
        let err = generate(&request(json!({
            "scaffold_type": "birdcage",
            "length": 14, "width": 5, "height": 13
        })))
        .unwrap_err();
        assert_eq!(err, CalcError::unsupported_scaffold_type("birdcage"));
    }

    #[test]
    fn test_response_wire_shape() {
        let response = generate(&request(scenario_b())).unwrap();
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["summary"]["Scaffold Type"], "Facade Scaffold");
        assert_eq!(
            value["summary"]["Overall Dimensions"],
            "~14.0ft L x 5.0ft W x 13.0ft H"
        );
        assert_eq!(value["materials"]["7.0 ft Ledgers"], 18);
        assert_eq!(value["materials"]["--- LADDERS ---"], "");
        assert_eq!(value["materials"]["5 ft Ladder Section"], 2);
        assert_eq!(value["materials"]["3 ft Ladder Section"], 2);
    }

    #[test]
    fn test_response_keeps_material_order() {
        let mut body = scenario_b();
        body["include_ladder"] = json!(false);
        let response = generate(&request(body)).unwrap();
        let json = serde_json::to_string(&response).unwrap();
        let base = json.find("Base Jacks").unwrap();
        let planks = json.find("Steel Planks").unwrap();
        let end_toe = json.find("5.0 ft Toe Boards").unwrap();
        assert!(base < planks && planks < end_toe);
    }

    #[test]
    fn test_generate_json_rejects_malformed_body() {
        let err = generate_json("[1, 2, 3]").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_generate_json_round_trip() {
        let body = r#"{"scaffold_type":"facade","length":14,"width":5,"height":13,"working_levels":2}"#;
        let response = generate_json(body).unwrap();
        let json = serde_json::to_string(&response).unwrap();
        let parsed: GenerateResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, response);
    }
}
