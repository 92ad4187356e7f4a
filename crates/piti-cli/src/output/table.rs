use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::flatten_fields;

/// Render output as a field/value table using the tabled crate.
///
/// Computation envelopes get their result section tabled first, with
/// warnings and methodology printed below.
pub fn print_table(value: &Value) {
    match value.as_object().and_then(|m| m.get("result")) {
        Some(result) => {
            print_fields(result);
            print_envelope_trailer(value);
        }
        None => print_fields(value),
    }
}

fn print_fields(value: &Value) {
    let mut rows: Vec<(String, String)> = Vec::new();
    flatten_fields(value, "", &mut rows);

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (field, val) in rows {
        builder.push_record([field.as_str(), val.as_str()]);
    }
    let table = Table::from(builder);
    println!("{}", table);
}

fn print_envelope_trailer(envelope: &Value) {
    let map = match envelope.as_object() {
        Some(m) => m,
        None => return,
    };

    if let Some(Value::Array(warnings)) = map.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(methodology)) = map.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}
