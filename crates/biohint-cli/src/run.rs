//! Reading BioC JSON inputs and rendering hint output.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use biohint_common::Hint;
use biohint_ingestion::{hints_from_documents, BiocDocument, BiocInput};
use tracing::info;

use crate::config::OutputConfig;

/// Read one BioC JSON file (collection, array or single document).
/// `-` reads stdin.
pub fn read_documents(path: &Path) -> Result<Vec<BiocDocument>> {
    let input = if path == Path::new("-") {
        BiocInput::from_reader(io::stdin().lock())
    } else {
        let file = File::open(path).with_context(|| format!("Could not open {}", path.display()))?;
        BiocInput::from_reader(BufReader::new(file))
    }
    .with_context(|| format!("Could not decode BioC JSON from {}", path.display()))?;

    let documents = input.into_documents();
    info!(path = %path.display(), documents = documents.len(), "Loaded BioC input");
    Ok(documents)
}

/// Extract hints for `documents` and serialize them as JSON.
pub fn render(documents: &[BiocDocument], output: &OutputConfig) -> Result<String> {
    let records = hints_from_documents(documents)?;
    let total: usize = records.iter().map(|r| r.hints.len()).sum();
    info!(documents = records.len(), hints = total, "Hint extraction complete");

    let json = if output.by_document {
        to_json(&records, output.pretty)?
    } else {
        let hints: Vec<Hint> = records.into_iter().flat_map(|r| r.hints).collect();
        to_json(&hints, output.pretty)?
    };
    Ok(json)
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::io::Write;

    const DOCUMENT: &str = r#"{
        "id": "1",
        "infons": { "doi": "10.1000/abc" },
        "passages": [
            { "infons": { "type": "title" }, "offset": 0, "text": "water",
              "annotations": [
                { "id": "1", "infons": { "type": "Chemical", "identifier": "15377" }, "text": "water" }
              ] }
        ]
    }"#;

    fn documents() -> Vec<BiocDocument> {
        BiocInput::from_json_str(DOCUMENT).unwrap().into_documents()
    }

    #[test]
    fn test_flat_output() {
        let out = render(&documents(), &OutputConfig::default()).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            json!([{
                "text": "water",
                "type": "chemical",
                "xref": { "dbName": "ChEBI", "dbPrefix": "CHEBI", "id": "15377" },
                "section": "title"
            }])
        );
        assert!(!out.contains('\n'));
    }

    #[test]
    fn test_by_document_pretty_output() {
        let output = OutputConfig { pretty: true, by_document: true };
        let out = render(&documents(), &output).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["document"], "1");
        assert_eq!(value[0]["doi"], "10.1000/abc");
        assert_eq!(value[0]["hints"].as_array().unwrap().len(), 1);
        assert!(out.contains('\n'));
    }

    #[test]
    fn test_read_documents_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{DOCUMENT}, {DOCUMENT}]").unwrap();
        assert_eq!(read_documents(file.path()).unwrap().len(), 2);
    }

    #[test]
    fn test_read_documents_reports_path_on_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = read_documents(file.path()).unwrap_err();
        assert!(format!("{err}").contains("Could not decode BioC JSON"));
    }

    #[test]
    fn test_malformed_annotation_fails_render() {
        let docs = BiocInput::from_json_str(r#"{
            "id": "2",
            "passages": [
                { "infons": { "type": "abstract" },
                  "annotations": [ { "id": "A", "infons": { "identifier": "1" }, "text": "x" } ] }
            ]
        }"#).unwrap().into_documents();
        let err = render(&docs, &OutputConfig::default()).unwrap_err();
        assert!(err.to_string().contains("infons.type"));
    }
}
