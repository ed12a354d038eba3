use serde_json::{Map, Value};
use std::io;

type StdoutWriter<'a> = csv::Writer<io::StdoutLock<'a>>;

/// Write output as CSV to stdout.
///
/// A result with recommendations is written as one row per recommendation,
/// with the pillar scores repeated on each row.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => write_result(&mut wtr, result),
            Some(Value::Array(rows)) => write_array(&mut wtr, rows),
            _ => write_fields(&mut wtr, map),
        },
        Value::Array(arr) => write_array(&mut wtr, arr),
        _ => {
            let _ = wtr.write_record([format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_result(wtr: &mut StdoutWriter<'_>, result: &Map<String, Value>) {
    let recs = match result.get("recommendations") {
        Some(Value::Array(recs)) if !recs.is_empty() => recs,
        _ => return write_fields(wtr, result),
    };

    let score_keys = ["environmental", "social", "governance", "esg_score"];
    let rec_keys = ["category", "priority", "action", "impact", "cost"];
    let _ = wtr.write_record(score_keys.iter().chain(rec_keys.iter()));

    let scores: Vec<String> = score_keys
        .iter()
        .map(|k| result.get(*k).map(format_csv_value).unwrap_or_default())
        .collect();
    for rec in recs.iter().filter_map(Value::as_object) {
        let row = scores.iter().cloned().chain(
            rec_keys
                .iter()
                .map(|k| rec.get(*k).map(format_csv_value).unwrap_or_default()),
        );
        let _ = wtr.write_record(row);
    }
}

fn write_fields(wtr: &mut StdoutWriter<'_>, map: &Map<String, Value>) {
    let _ = wtr.write_record(["field", "value"]);
    for (key, val) in map {
        let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
    }
}

fn write_array(wtr: &mut StdoutWriter<'_>, arr: &[Value]) {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            let _ = wtr.write_record([format_csv_value(item)]);
        }
        return;
    };

    let headers: Vec<&str> = first.keys().map(String::as_str).collect();
    let _ = wtr.write_record(&headers);
    for map in arr.iter().filter_map(Value::as_object) {
        let row: Vec<String> = headers
            .iter()
            .map(|h| map.get(*h).map(format_csv_value).unwrap_or_default())
            .collect();
        let _ = wtr.write_record(&row);
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
