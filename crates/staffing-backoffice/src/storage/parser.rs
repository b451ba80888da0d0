use serde_json::{Map, Value};
use std::io::Read;

/// Parses a JSON export: either one array of documents or newline-delimited documents
/// (the `mongoexport` default).
pub(crate) fn parse_json_documents<R: Read>(mut reader: R) -> Result<Vec<Value>, String> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .map_err(|err| err.to_string())?;

    let trimmed = raw.trim_start_matches('\u{feff}').trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        return match serde_json::from_str::<Value>(trimmed).map_err(|err| err.to_string())? {
            Value::Array(documents) => Ok(documents),
            _ => Err("expected a JSON array of documents".to_string()),
        };
    }

    serde_json::Deserializer::from_str(trimmed)
        .into_iter::<Value>()
        .map(|document| document.map_err(|err| err.to_string()))
        .collect()
}

/// Parses a CSV export with a header row. Empty cells are left out of the document so they
/// read as missing fields; values keep their surrounding whitespace.
pub(crate) fn parse_csv_documents<R: Read>(reader: R) -> Result<Vec<Value>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut documents = Vec::new();

    for row in csv_reader.records() {
        let row = row?;
        let mut document = Map::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            let header = header.trim_start_matches('\u{feff}');
            if header.is_empty() || cell.trim().is_empty() {
                continue;
            }
            document.insert(header.to_string(), Value::String(cell.to_string()));
        }
        documents.push(Value::Object(document));
    }

    Ok(documents)
}
