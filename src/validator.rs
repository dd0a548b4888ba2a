//! Input validation: raw JSON against a unit's declared input shape.
//!
//! Rules are keyed on [`InputShape`], and every category maps to one shape,
//! so all units of a category share the same rule set. Malformed input is a
//! normal outcome here, never a panic or an error.

use serde_json::{Map, Value};

use crate::registry::AlgorithmUnit;
use crate::value::{Input, InputShape, RsaAction, SortOrder};

/// Allowed RSA prime sizes; keeps `n` below 2^62 so modular products fit in `u128`.
pub const RSA_BITS: std::ops::RangeInclusive<u32> = 8..=31;
pub const RSA_DEFAULT_BITS: u32 = 16;

/// Longest accepted free text; palindrome listing holds up to n^2/2 substrings.
pub const MAX_TEXT_CHARS: usize = 500;

/// Result of checking raw input against a unit's shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub valid: bool,
    /// Present iff `valid` is false.
    pub reason: Option<String>,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// Check `raw` against `unit`'s declared input shape.
pub fn validate(unit: &dyn AlgorithmUnit, raw: &Value) -> ValidationOutcome {
    match decode(unit.input_shape(), raw) {
        Ok(_) => ValidationOutcome::valid(),
        Err(reason) => ValidationOutcome::invalid(reason),
    }
}

/// Convert `raw` into typed input, or explain why it does not fit `shape`.
pub fn decode(shape: InputShape, raw: &Value) -> Result<Input, String> {
    match shape {
        InputShape::IntegerSequence => {
            let (values, order) = sequence(raw)?;
            Ok(Input::Sequence { values, order })
        }
        InputShape::NonEmptyIntegerSequence => {
            let (values, order) = sequence(raw)?;
            if values.is_empty() {
                return Err("input sequence must not be empty".into());
            }
            Ok(Input::Sequence { values, order })
        }
        InputShape::SearchQuery => search(raw),
        InputShape::SortedSearchQuery => {
            let input = search(raw)?;
            if let Input::Search { values, .. } = &input {
                if let Some(i) = (1..values.len()).find(|&i| values[i - 1] > values[i]) {
                    return Err(format!(
                        "values must be sorted in non-decreasing order (index {} breaks it)",
                        i
                    ));
                }
            }
            Ok(input)
        }
        InputShape::Graph => graph(raw),
        InputShape::TextWithPattern => {
            let obj = object(raw)?;
            let text = string_field(obj, "text")?;
            let pattern = string_field(obj, "pattern")?;
            if pattern.is_empty() {
                return Err("pattern must not be empty".into());
            }
            Ok(Input::Pattern { text, pattern })
        }
        InputShape::Text => {
            let text = match raw {
                Value::String(s) => s.clone(),
                Value::Object(obj) => string_field(obj, "text")?,
                other => return Err(format!("expected a string, got {}", kind(other))),
            };
            let chars = text.chars().count();
            if chars > MAX_TEXT_CHARS {
                return Err(format!(
                    "text has {} characters, at most {} are accepted",
                    chars, MAX_TEXT_CHARS
                ));
            }
            Ok(Input::Text(text))
        }
        InputShape::NonNegativeInteger => {
            let value = match raw {
                Value::Object(obj) => field(obj, "n")?,
                other => other,
            };
            match value.as_i64() {
                Some(n) if n < 0 => Err(format!("number must not be negative, got {}", n)),
                _ => value
                    .as_u64()
                    .map(Input::Integer)
                    .ok_or_else(|| format!("expected an integer, got {}", kind(value))),
            }
        }
        InputShape::Seed => match raw {
            Value::Null => Ok(Input::Seed(0)),
            Value::Object(obj) => match obj.get("seed") {
                None | Some(Value::Null) => Ok(Input::Seed(0)),
                Some(seed) => unsigned(seed, "seed").map(Input::Seed),
            },
            other => unsigned(other, "seed").map(Input::Seed),
        },
        InputShape::RsaRequest => rsa(raw).map(Input::Rsa),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn object(raw: &Value) -> Result<&Map<String, Value>, String> {
    raw.as_object()
        .ok_or_else(|| format!("expected an object, got {}", kind(raw)))
}

fn field<'a>(obj: &'a Map<String, Value>, name: &str) -> Result<&'a Value, String> {
    obj.get(name)
        .ok_or_else(|| format!("missing field '{}'", name))
}

fn string_field(obj: &Map<String, Value>, name: &str) -> Result<String, String> {
    let value = field(obj, name)?;
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| format!("field '{}' must be a string, got {}", name, kind(value)))
}

fn unsigned(value: &Value, name: &str) -> Result<u64, String> {
    value
        .as_u64()
        .ok_or_else(|| format!("'{}' must be a non-negative integer, got {}", name, value))
}

fn integers(value: &Value, name: &str) -> Result<Vec<i64>, String> {
    let items = value
        .as_array()
        .ok_or_else(|| format!("'{}' must be an array, got {}", name, kind(value)))?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_i64()
                .ok_or_else(|| format!("element {} of '{}' is not an integer: {}", i, name, item))
        })
        .collect()
}

fn sequence(raw: &Value) -> Result<(Vec<i64>, SortOrder), String> {
    match raw {
        Value::Array(_) => Ok((integers(raw, "values")?, SortOrder::default())),
        Value::Object(obj) => {
            let values = integers(field(obj, "values")?, "values")?;
            let order = match obj.get("order") {
                None | Some(Value::Null) => SortOrder::default(),
                Some(Value::String(s)) => match s.to_ascii_lowercase().as_str() {
                    "ascending" | "asc" => SortOrder::Ascending,
                    "descending" | "desc" => SortOrder::Descending,
                    _ => return Err(format!("unknown order '{}'", s)),
                },
                Some(other) => return Err(format!("'order' must be a string, got {}", kind(other))),
            };
            Ok((values, order))
        }
        other => Err(format!(
            "expected an array of integers or {{\"values\": [...]}}, got {}",
            kind(other)
        )),
    }
}

fn search(raw: &Value) -> Result<Input, String> {
    let obj = object(raw)?;
    let values = integers(field(obj, "values")?, "values")?;
    let target_value = field(obj, "target")?;
    let target = target_value
        .as_i64()
        .ok_or_else(|| format!("'target' must be an integer, got {}", target_value))?;
    Ok(Input::Search { values, target })
}

fn graph(raw: &Value) -> Result<Input, String> {
    let obj = object(raw)?;
    let rows = field(obj, "adjacency")?
        .as_array()
        .ok_or("'adjacency' must be an array of neighbour lists")?;
    let node_count = rows.len();

    let mut adjacency = Vec::with_capacity(node_count);
    for (node, row) in rows.iter().enumerate() {
        let neighbours = row
            .as_array()
            .ok_or_else(|| format!("neighbours of node {} must be an array", node))?;
        let mut list = Vec::with_capacity(neighbours.len());
        for n in neighbours {
            let target = n
                .as_u64()
                .ok_or_else(|| format!("node {} has a non-index neighbour {}", node, n))?
                as usize;
            if target >= node_count {
                return Err(format!(
                    "node {} has neighbour {} outside the graph ({} nodes)",
                    node, target, node_count
                ));
            }
            list.push(target);
        }
        adjacency.push(list);
    }

    let start = unsigned(field(obj, "start")?, "start")? as usize;
    if start >= node_count {
        return Err(format!(
            "start node {} out of range for a graph with {} nodes",
            start, node_count
        ));
    }
    Ok(Input::Graph { adjacency, start })
}

fn rsa(raw: &Value) -> Result<RsaAction, String> {
    let obj = object(raw)?;
    let action = match obj.get("action") {
        None | Some(Value::Null) => "round-trip",
        Some(Value::String(s)) => s.as_str(),
        Some(other) => return Err(format!("'action' must be a string, got {}", kind(other))),
    };

    match action {
        "round-trip" => {
            let bits = match obj.get("bits") {
                None | Some(Value::Null) => RSA_DEFAULT_BITS,
                Some(v) => {
                    let bits = unsigned(v, "bits")?;
                    u32::try_from(bits)
                        .ok()
                        .filter(|b| RSA_BITS.contains(b))
                        .ok_or_else(|| {
                            format!(
                                "bits must be between {} and {}, got {}",
                                RSA_BITS.start(),
                                RSA_BITS.end(),
                                bits
                            )
                        })?
                }
            };
            let seed = match obj.get("seed") {
                None | Some(Value::Null) => 0,
                Some(v) => unsigned(v, "seed")?,
            };
            Ok(RsaAction::RoundTrip {
                message: string_field(obj, "message")?,
                bits,
                seed,
            })
        }
        "encrypt" => Ok(RsaAction::Encrypt {
            message: string_field(obj, "message")?,
            public_key: rsa_key(obj, "public_key")?,
        }),
        "decrypt" => {
            let private_key = rsa_key(obj, "private_key")?;
            let modulus = private_key.1;
            let items = field(obj, "cipher")?
                .as_array()
                .ok_or("'cipher' must be an array of integers")?;
            let mut cipher = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let c = unsigned(item, "cipher")?;
                if c >= modulus {
                    return Err(format!(
                        "cipher value {} ({}) is not below the modulus {}",
                        i, c, modulus
                    ));
                }
                cipher.push(c);
            }
            Ok(RsaAction::Decrypt {
                cipher,
                private_key,
            })
        }
        other => Err(format!(
            "unknown action '{}', expected round-trip, encrypt or decrypt",
            other
        )),
    }
}

/// An `(exponent, modulus)` pair given as `[x, n]` or `"x,n"`.
fn rsa_key(obj: &Map<String, Value>, name: &str) -> Result<(u64, u64), String> {
    let value = field(obj, name)?;
    let parts: Vec<u64> = match value {
        Value::Array(items) => items
            .iter()
            .map(|item| unsigned(item, name))
            .collect::<Result<_, _>>()?,
        Value::String(s) => s
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<u64>()
                    .map_err(|_| format!("'{}' must look like \"x,n\", got {:?}", name, s))
            })
            .collect::<Result<_, _>>()?,
        other => return Err(format!("'{}' must be [x, n], got {}", name, kind(other))),
    };
    let &[exponent, modulus] = parts.as_slice() else {
        return Err(format!("'{}' needs exactly two numbers, got {}", name, parts.len()));
    };
    if modulus <= u8::MAX as u64 {
        return Err(format!("'{}' modulus {} is too small, it must exceed 255", name, modulus));
    }
    if exponent <= 1 {
        return Err(format!("'{}' exponent must be greater than 1, got {}", name, exponent));
    }
    Ok((exponent, modulus))
}
