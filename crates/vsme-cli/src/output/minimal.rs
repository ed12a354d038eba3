use serde_json::Value;

/// Print just the headline value from the output.
///
/// Looks for well-known fields in order of priority, then falls back to the
/// first field in the result object.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_keys = ["esg_score", "coverage_percent", "id"];

    match result_obj {
        Value::Object(map) => {
            for key in &priority_keys {
                if let Some(val) = map.get(*key).filter(|v| !v.is_null()) {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
            if let Some((key, val)) = map.iter().next() {
                println!("{}: {}", key, format_minimal(val));
            }
        }
        // History: one "id score company" line per report
        Value::Array(rows) => {
            for row in rows.iter().filter_map(Value::as_object) {
                let field = |k: &str| row.get(k).map(format_minimal).unwrap_or_default();
                println!(
                    "{}\t{}\t{}",
                    field("id"),
                    field("esg_score"),
                    field("company_name")
                );
            }
        }
        other => println!("{}", format_minimal(other)),
    }
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
