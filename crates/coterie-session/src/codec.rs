//! Export/import document codecs
//!
//! Exports are pretty-printed JSON meant for humans and other tools; imports
//! accept one record object or an array of them and reject anything else
//! before the collection is touched.

use coterie_model::CharacterRecord;

use crate::error::SessionError;
use crate::Result;

/// File name used when exporting the whole collection.
const COLLECTION_FILE_NAME: &str = "vtm-characters.json";

/// A rendered export: contents plus the suggested download name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub file_name: String,
    pub contents: String,
}

/// Render one record, named after the character.
pub fn export_record(record: &CharacterRecord) -> Result<ExportDocument> {
    let stem = if record.name.is_empty() {
        "character".to_string()
    } else {
        sanitize_file_stem(&record.name)
    };

    Ok(ExportDocument {
        file_name: format!("{}.json", stem),
        contents: serde_json::to_string_pretty(record)?,
    })
}

/// Render the whole collection under the fixed name.
pub fn export_collection(characters: &[CharacterRecord]) -> Result<ExportDocument> {
    Ok(ExportDocument {
        file_name: COLLECTION_FILE_NAME.to_string(),
        contents: serde_json::to_string_pretty(characters)?,
    })
}

/// Parse an import document: a single record object or an array of them.
/// Anything else is rejected without touching the collection.
pub fn parse_import(input: &str) -> Result<Vec<CharacterRecord>> {
    if let Ok(records) = serde_json::from_str::<Vec<CharacterRecord>>(input) {
        return Ok(records);
    }

    match serde_json::from_str::<CharacterRecord>(input) {
        Ok(record) => Ok(vec![record]),
        Err(e) => Err(SessionError::InvalidImport(e.to_string())),
    }
}

/// Character names become file names; keep them path-safe.
fn sanitize_file_stem(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect()
}
