use serde_json::Value;
use std::io;

use super::{flatten_fields, scalar_string};

/// Write output as field,value CSV rows to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            // Prefer the result section of a computation envelope
            let target = map.get("result").unwrap_or(value);
            let mut rows: Vec<(String, String)> = Vec::new();
            flatten_fields(target, "", &mut rows);

            let _ = wtr.write_record(["field", "value"]);
            for (field, val) in rows {
                let _ = wtr.write_record([field.as_str(), val.as_str()]);
            }
        }
        _ => {
            let _ = wtr.write_record([scalar_string(value)]);
        }
    }

    let _ = wtr.flush();
}
