//! Identifier and value literal encoding

use crate::model::{FieldValue, Policy};

/// Render a value as a statement literal.
///
/// Numbers and booleans render bare, floats always with a fraction or an
/// exponent. Timestamps render as their Unix epoch seconds. Text renders
/// single-quoted with `\` and `'` escaped. Under
/// [`Policy::HashEncode`] the literal is wrapped in `hash(...)`.
///
/// nGQL has no literal for NaN or the infinities. Non-finite floats render
/// as `NaN`, `inf` and `-inf`, which the server rejects, so callers must keep
/// them out of mapped fields.
pub fn encode(value: &FieldValue, policy: Policy) -> String {
    let literal = match value {
        FieldValue::Int(i) => i.to_string(),
        FieldValue::UInt(u) => u.to_string(),
        FieldValue::Float(f) => format!("{:?}", f),
        FieldValue::Timestamp(ts) => ts.timestamp().to_string(),
        FieldValue::Bool(b) => b.to_string(),
        FieldValue::Text(s) | FieldValue::Other(s) => quote(s),
    };

    match policy {
        Policy::None => literal,
        Policy::HashEncode => format!("hash({})", literal),
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\'' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
    out
}
