//! Canonical textual rendering of values, for debugging and tests.
//!
//! Mapping keys are emitted in ascending lexical order, so two structurally
//! equal mappings always render identically regardless of insertion order.
//! The rendering also serves as the membership key for the set operations.
//! Values are owned trees, so cyclic input cannot occur.

use std::fmt;

use crate::types::Value;

/// Renders a value in its canonical, deterministic form.
pub fn inspect(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Integer(i) => out.push_str(&i.to_string()),
        Value::Decimal(d) => out.push_str(&d.to_string()),
        Value::String(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        },
        Value::Sequence(seq) => {
            out.push('[');
            for (i, element) in seq.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, element);
            }
            out.push(']');
        },
        Value::Mapping(mapping) => {
            let mut entries: Vec<(&String, &Value)> = mapping.iter().collect();
            entries.sort_by(|(ka, _), (kb, _)| ka.cmp(kb));

            out.push('{');
            for (i, (key, element)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(key);
                out.push_str(": ");
                write_value(out, element);
            }
            out.push('}');
        },
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&inspect(self))
    }
}
