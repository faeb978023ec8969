use crate::config::CorpusConfig;
use crate::error::{PipelineError, Result};
use crate::model::{QuestionSection, RecipeRecord};
use log::{debug, info};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Read the recipe corpus named in `config`
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read or is not valid JSON
/// - The records pointer does not lead to an array
/// - A record lacks its name or ingredient field
pub fn load_corpus(config: &CorpusConfig) -> Result<Vec<RecipeRecord>> {
    debug!("Reading corpus from {}", config.path.display());
    let content = fs::read_to_string(&config.path)?;
    let records = parse_corpus(&content, config)?;
    info!(
        "Loaded {} recipes from {}",
        records.len(),
        config.path.display()
    );
    Ok(records)
}

/// Parse corpus JSON text into recipe records
pub fn parse_corpus(content: &str, config: &CorpusConfig) -> Result<Vec<RecipeRecord>> {
    let document: Value = serde_json::from_str(content)?;

    let rows = document
        .pointer(&config.records_pointer)
        .ok_or_else(|| {
            PipelineError::CorpusError(format!(
                "no value at '{}'",
                config.records_pointer
            ))
        })?
        .as_array()
        .ok_or_else(|| {
            PipelineError::CorpusError(format!(
                "value at '{}' is not an array",
                config.records_pointer
            ))
        })?;

    rows.iter()
        .enumerate()
        .map(|(index, row)| parse_record(index, row, config))
        .collect()
}

/// Read the survey question sections, a JSON array of `{category, questions}`
pub fn load_questions(path: &Path) -> Result<Vec<QuestionSection>> {
    debug!("Reading questions from {}", path.display());
    let sections: Vec<QuestionSection> = serde_json::from_str(&fs::read_to_string(path)?)?;
    info!(
        "Loaded {} question sections from {}",
        sections.len(),
        path.display()
    );
    Ok(sections)
}

fn parse_record(index: usize, row: &Value, config: &CorpusConfig) -> Result<RecipeRecord> {
    let object = row.as_object().ok_or_else(|| {
        PipelineError::CorpusError(format!("record {} is not an object", index + 1))
    })?;

    let name = required_string(object, &config.name_field, index)?;
    let parts = required_string(object, &config.parts_field, index)?;

    // Records without a sequence id fall back to their 1-based position
    let id = match object.get(&config.id_field) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => (index + 1).to_string(),
    };

    Ok(RecipeRecord {
        id,
        name,
        parts,
        raw: object.clone(),
    })
}

fn required_string(object: &Map<String, Value>, field: &str, index: usize) -> Result<String> {
    object
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            PipelineError::CorpusError(format!(
                "record {} is missing string field '{}'",
                index + 1,
                field
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: &str = r#"
    {
        "COOKRCP01": {
            "total_count": "2",
            "row": [
                {
                    "RCP_SEQ": "28",
                    "RCP_NM": "새우 두부 계란찜",
                    "RCP_PARTS_DTLS": "새우두부계란찜\n연두부 75g(3/4모), 칵테일새우 20g(5마리)",
                    "RCP_WAY2": "찌기"
                },
                {
                    "RCP_NM": "부추 콩가루 찜",
                    "RCP_PARTS_DTLS": "[1인분]조선부추 50g, 날콩가루 7g(1⅓작은술)"
                }
            ]
        }
    }
    "#;

    #[test]
    fn test_parse_corpus() {
        let records = parse_corpus(CORPUS, &CorpusConfig::default()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "28");
        assert_eq!(records[0].name, "새우 두부 계란찜");
        assert!(records[0].parts.contains("연두부"));
        assert_eq!(records[0].raw.get("RCP_WAY2").unwrap(), "찌기");
        // Missing sequence id falls back to position
        assert_eq!(records[1].id, "2");
    }

    #[test]
    fn test_parse_corpus_custom_pointer() {
        let config = CorpusConfig {
            records_pointer: "".to_string(),
            ..Default::default()
        };
        let records = parse_corpus(r#"[{"RCP_NM": "a", "RCP_PARTS_DTLS": "b"}]"#, &config).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_parse_corpus_missing_pointer() {
        let result = parse_corpus(r#"{"other": []}"#, &CorpusConfig::default());
        assert!(matches!(result, Err(PipelineError::CorpusError(_))));
    }

    #[test]
    fn test_parse_corpus_missing_field() {
        let json = r#"{"COOKRCP01": {"row": [{"RCP_NM": "이름만"}]}}"#;
        let result = parse_corpus(json, &CorpusConfig::default());
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("RCP_PARTS_DTLS"));
        }
    }

    #[test]
    fn test_parse_corpus_empty() {
        let json = r#"{"COOKRCP01": {"row": []}}"#;
        assert!(parse_corpus(json, &CorpusConfig::default()).unwrap().is_empty());
    }

    #[test]
    fn test_load_questions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        fs::write(
            &path,
            r#"[
                {"category": "식습관", "questions": ["하루에 몇 끼를 드시나요?", "아침을 드시나요?"]},
                {"category": "알레르기", "questions": []}
            ]"#,
        )
        .unwrap();

        let sections = load_questions(&path).unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].category, "식습관");
        assert_eq!(sections[0].questions[1], "아침을 드시나요?");
        assert!(sections[1].questions.as_array().unwrap().is_empty());
    }

    #[test]
    fn test_load_questions_missing_category() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        fs::write(&path, r#"[{"questions": []}]"#).unwrap();
        assert!(matches!(load_questions(&path), Err(PipelineError::JsonError(_))));
    }

    #[test]
    fn test_load_corpus_missing_file() {
        let config = CorpusConfig {
            path: "/nonexistent/recipes.json".into(),
            ..Default::default()
        };
        assert!(matches!(load_corpus(&config), Err(PipelineError::IoError(_))));
    }
}
