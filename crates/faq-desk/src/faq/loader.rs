use serde::Deserialize;
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use super::domain::{FaqEntry, FaqSet};

#[derive(Debug, thiserror::Error)]
pub enum FaqLoadError {
    #[error("failed to read FAQ source: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid FAQ JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid FAQ CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Source encodings understood by [`FaqLoader::from_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqFormat {
    Json,
    Csv,
}

impl FaqFormat {
    /// `.csv` files are read as CSV, everything else as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

/// Accepted top-level JSON shapes. Anything else parses as `Unrecognized`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FaqDocument {
    Bare(Vec<Value>),
    Wrapped { faq: Vec<Value> },
    Unrecognized(Value),
}

impl FaqDocument {
    fn into_records(self) -> Vec<Value> {
        match self {
            FaqDocument::Bare(records) | FaqDocument::Wrapped { faq: records } => records,
            FaqDocument::Unrecognized(_) => {
                warn!("faq document is neither a list nor an object with a `faq` list");
                Vec::new()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    question: String,
    #[serde(default)]
    answer: String,
    #[serde(default)]
    keywords: Option<String>,
}

impl CsvRow {
    fn into_entry(self) -> FaqEntry {
        let keywords = self
            .keywords
            .as_deref()
            .unwrap_or_default()
            .split(';')
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty())
            .map(str::to_string)
            .collect();

        FaqEntry {
            question: self.question,
            answer: self.answer,
            keywords,
        }
    }
}

/// Builds a [`FaqSet`] from the FAQ data file.
pub struct FaqLoader;

impl FaqLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<FaqSet, FaqLoadError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let set = match FaqFormat::from_path(path) {
            FaqFormat::Json => Self::from_json_reader(file)?,
            FaqFormat::Csv => Self::from_csv_reader(file)?,
        };

        info!(path = %path.display(), entries = set.len(), "faq data loaded");
        Ok(set)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<FaqSet, FaqLoadError> {
        let document: FaqDocument = serde_json::from_reader(reader)?;
        Ok(Self::from_document(document))
    }

    pub fn from_json_str(raw: &str) -> Result<FaqSet, FaqLoadError> {
        let document: FaqDocument = serde_json::from_str(raw)?;
        Ok(Self::from_document(document))
    }

    /// Infallible: unrecognized shapes and malformed records yield fewer entries.
    pub fn from_json_value(value: Value) -> FaqSet {
        match serde_json::from_value::<FaqDocument>(value) {
            Ok(document) => Self::from_document(document),
            Err(_) => FaqSet::empty(),
        }
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<FaqSet, FaqLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut entries = Vec::new();

        for (index, row) in csv_reader.deserialize::<CsvRow>().enumerate() {
            let entry = row?.into_entry();
            if entry.answer.is_empty() {
                warn!(index, "skipping faq row without an answer");
                continue;
            }
            entries.push((index, entry));
        }

        Ok(FaqSet::from_sourced(entries))
    }

    fn from_document(document: FaqDocument) -> FaqSet {
        FaqSet::from_sourced(
            document
                .into_records()
                .into_iter()
                .enumerate()
                .filter_map(|(index, record)| {
                    entry_from_record(index, record).map(|entry| (index, entry))
                }),
        )
    }
}

fn entry_from_record(index: usize, record: Value) -> Option<FaqEntry> {
    let Value::Object(mut fields) = record else {
        warn!(index, "skipping faq record that is not an object");
        return None;
    };

    let Some(answer) = take_string(&mut fields, "answer").filter(|a| !a.trim().is_empty()) else {
        warn!(index, "skipping faq record without an answer");
        return None;
    };

    let question = take_string(&mut fields, "question").unwrap_or_default();
    let keywords = match fields.remove("keywords") {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(keyword) => Some(keyword),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    Some(FaqEntry {
        question,
        answer,
        keywords,
    })
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key) {
        Some(Value::String(value)) => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Cursor;

    fn answers(set: &FaqSet) -> Vec<&str> {
        set.iter().map(|entry| entry.answer.as_str()).collect()
    }

    #[test]
    fn accepts_bare_list_and_wrapped_object() {
        let bare = FaqLoader::from_json_str(r#"[{"question":"Q1","answer":"A1"}]"#)
            .expect("bare list parses");
        let wrapped = FaqLoader::from_json_str(
            r#"{"college":"MGIT","faq":[{"question":"Q1","answer":"A1","keywords":["k"]}]}"#,
        )
        .expect("wrapped list parses");

        assert_eq!(answers(&bare), ["A1"]);
        assert_eq!(answers(&wrapped), ["A1"]);
        assert_eq!(wrapped.get(0).expect("entry").keywords, ["k"]);
    }

    #[test]
    fn unrecognized_shapes_yield_empty_set() {
        for raw in [r#"{"faq":"oops"}"#, r#"{"items":[]}"#, "42", "null", r#""faq""#] {
            let set = FaqLoader::from_json_str(raw).expect("valid json parses");
            assert!(set.is_empty(), "expected empty set for {raw}");
        }
    }

    #[test]
    fn malformed_records_are_inert() {
        let set = FaqLoader::from_json_value(json!([
            "not an object",
            {"question": "No answer"},
            {"question": "Blank answer", "answer": "  "},
            {"question": 7, "answer": "numeric question", "keywords": "fees"},
            {"answer": "no question", "keywords": ["ok", 3, null]},
            {"question": "Good", "answer": "A"}
        ]));

        assert_eq!(answers(&set), ["numeric question", "no question", "A"]);
        let numeric = set.get(0).expect("entry");
        assert_eq!(numeric.question, "");
        assert!(numeric.keywords.is_empty());
        assert_eq!(set.get(1).expect("entry").keywords, ["ok"]);
    }

    #[test]
    fn match_index_refers_to_the_source_record() {
        let set = FaqLoader::from_json_str(
            r#"[{"question":"x"},{"question":"Fees","answer":"A1"}]"#,
        )
        .expect("valid json parses");
        let hit = crate::faq::find("fees", &set).expect("match");
        assert_eq!(hit.index, 1);

        let csv = "question,answer\nOrphan,\nFees,A1\n";
        let set = FaqLoader::from_csv_reader(Cursor::new(csv)).expect("csv parses");
        let hit = crate::faq::find("fees", &set).expect("match");
        assert_eq!(hit.index, 1);
    }

    #[test]
    fn invalid_json_is_an_error() {
        match FaqLoader::from_json_str("[{") {
            Err(FaqLoadError::Json(_)) => {}
            other => panic!("expected json error, got {other:?}"),
        }
    }

    #[test]
    fn csv_rows_split_keywords_on_semicolons() {
        let csv = "question,answer,keywords\n\
What are the fees?,See the portal, fees ; tuition ;\n\
Orphan,,\n\
Library hours?,9 to 5,\n";
        let set = FaqLoader::from_csv_reader(Cursor::new(csv)).expect("csv parses");

        assert_eq!(answers(&set), ["See the portal", "9 to 5"]);
        assert_eq!(set.get(0).expect("entry").keywords, ["fees", "tuition"]);
        assert!(set.get(1).expect("entry").keywords.is_empty());
    }

    #[test]
    fn from_path_propagates_io_errors() {
        match FaqLoader::from_path("./does-not-exist.json") {
            Err(FaqLoadError::Io(_)) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn format_is_chosen_by_extension() {
        assert_eq!(FaqFormat::from_path(Path::new("faq.CSV")), FaqFormat::Csv);
        assert_eq!(FaqFormat::from_path(Path::new("faq.json")), FaqFormat::Json);
        assert_eq!(FaqFormat::from_path(Path::new("faq")), FaqFormat::Json);
    }
}
