//! Per-route validation rule sets and the error-aggregation gate.
//!
//! Each operation declares an ordered list of [`Rule`]s over the raw path
//! parameter and the raw JSON body. Every rule is evaluated - evaluation
//! never stops at the first failure - so a single 400 response reports all
//! violations at once, in rule-declaration order.
//!
//! The failure messages are part of the public contract consumed by
//! existing clients; their casing and punctuation are intentionally
//! inconsistent and must not be normalized.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, UpdateProduct};

/// Where a validated field lives in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Params,
    Body,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldError {
    /// The offending value as received; absent fields carry no value
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub value: Option<Value>,
    /// Human-readable failure message
    pub msg: String,
    /// Field name the rule applies to
    pub path: String,
    /// `params` or `body`
    pub location: Location,
}

/// Predicate applied to a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// The raw path segment parses as an `i64`
    IsInt,
    /// Present, not `null` and not the empty string
    NotEmpty,
    /// A JSON number, or a string parsing as a finite float
    IsNumeric,
    /// Numeric (per [`Check::IsNumeric`] coercion) and strictly positive
    GreaterThanZero,
    /// A JSON boolean, strictly; `"true"` and `1` are rejected
    IsBoolean,
}

/// One declarative rule: field + location + predicate + failure message.
pub struct Rule {
    pub path: &'static str,
    pub location: Location,
    pub check: Check,
    pub msg: &'static str,
}

const fn rule(path: &'static str, location: Location, check: Check, msg: &'static str) -> Rule {
    Rule {
        path,
        location,
        check,
        msg,
    }
}

/// Shared by get-one, toggle-availability and delete.
pub const ID_RULES: &[Rule] = &[rule("id", Location::Params, Check::IsInt, "ID no valido")];

pub const CREATE_RULES: &[Rule] = &[
    rule(
        "name",
        Location::Body,
        Check::NotEmpty,
        "El nombre del producto no puede ir vacio.",
    ),
    rule("price", Location::Body, Check::IsNumeric, "Valor no valido"),
    rule(
        "price",
        Location::Body,
        Check::GreaterThanZero,
        "Valor no valido.",
    ),
    rule(
        "price",
        Location::Body,
        Check::NotEmpty,
        "El precio del producto no puede ir vacio.",
    ),
];

pub const UPDATE_RULES: &[Rule] = &[
    rule("id", Location::Params, Check::IsInt, "ID no valido"),
    rule(
        "name",
        Location::Body,
        Check::NotEmpty,
        "El nombre del producto no puede ir vacio",
    ),
    rule("price", Location::Body, Check::IsNumeric, "valor no valido"),
    rule(
        "price",
        Location::Body,
        Check::NotEmpty,
        "El precio del producto no puede ir vacio",
    ),
    rule(
        "price",
        Location::Body,
        Check::GreaterThanZero,
        "Precio no valido",
    ),
    rule(
        "availability",
        Location::Body,
        Check::IsBoolean,
        "Valor para disponibilidad no valido",
    ),
];

/// Numeric coercion shared by `IsNumeric` and `GreaterThanZero`: JSON
/// numbers pass through, strings are parsed, everything else is rejected.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => s.parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// String coercion for post-gate extraction. Non-string scalars are kept
/// by their JSON rendering, matching what the store previously received.
fn string_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn passes(check: Check, value: Option<&Value>) -> bool {
    match check {
        Check::IsInt => matches!(value, Some(Value::String(raw)) if raw.parse::<i64>().is_ok()),
        Check::NotEmpty => match value {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        },
        Check::IsNumeric | Check::GreaterThanZero => {
            let number = value.and_then(coerce_number);
            match check {
                Check::GreaterThanZero => number.is_some_and(|n| n > 0.0),
                _ => number.is_some(),
            }
        }
        Check::IsBoolean => matches!(value, Some(Value::Bool(_))),
    }
}

/// Evaluate every rule, collecting one descriptor per failing check.
///
/// `path_id` is the raw `:id` path segment where the route has one; `body`
/// is the parsed JSON body (an empty object when the request had none).
pub fn evaluate(rules: &[Rule], path_id: Option<&str>, body: &Value) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for rule in rules {
        let value = match rule.location {
            Location::Params => path_id.map(|raw| Value::String(raw.to_string())),
            Location::Body => body.get(rule.path).cloned(),
        };

        if !passes(rule.check, value.as_ref()) {
            errors.push(FieldError {
                value,
                msg: rule.msg.to_string(),
                path: rule.path.to_string(),
                location: rule.location,
            });
        }
    }

    errors
}

/// The error-aggregation gate: short-circuits with all accumulated errors,
/// or lets the handler proceed. Never touches the store.
pub fn gate(rules: &[Rule], path_id: Option<&str>, body: &Value) -> ProductResult<()> {
    let errors = evaluate(rules, path_id, body);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ProductError::Validation(errors))
    }
}

fn extraction_failure(what: &str) -> ProductError {
    ProductError::Internal(format!("{what} extraction failed after validation"))
}

/// Validate and parse the `:id` path segment.
pub fn validate_id(raw: &str) -> ProductResult<i64> {
    gate(ID_RULES, Some(raw), &Value::Null)?;
    raw.parse().map_err(|_| extraction_failure("id"))
}

/// Validate a create body and build the typed input from it.
pub fn validate_create(body: &Value) -> ProductResult<CreateProduct> {
    gate(CREATE_RULES, None, body)?;

    let name = body.get("name").and_then(string_value);
    let price = body.get("price").and_then(coerce_number);

    match (name, price) {
        (Some(name), Some(price)) => Ok(CreateProduct { name, price }),
        _ => Err(extraction_failure("create payload")),
    }
}

/// Validate a full-update request (path id + body) and build the typed
/// input from it.
pub fn validate_update(raw_id: &str, body: &Value) -> ProductResult<(i64, UpdateProduct)> {
    gate(UPDATE_RULES, Some(raw_id), body)?;

    let id = raw_id.parse().map_err(|_| extraction_failure("id"))?;
    let name = body.get("name").and_then(string_value);
    let price = body.get("price").and_then(coerce_number);
    let availability = body.get("availability").and_then(Value::as_bool);

    match (name, price, availability) {
        (Some(name), Some(price), Some(availability)) => Ok((
            id,
            UpdateProduct {
                name,
                price,
                availability,
            },
        )),
        _ => Err(extraction_failure("update payload")),
    }
}
