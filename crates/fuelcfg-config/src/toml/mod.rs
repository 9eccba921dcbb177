//! fuels.config.toml parsing and rendering

use fuelcfg_core::error::FuelcfgError;
use serde_json::{Map, Number, Value};
use toml_edit::{Array, DocumentMut};

use crate::ConfigResult;

/// Parse TOML text into the raw mapping consumed by [`crate::project::load`]
pub fn parse_config_toml(content: &str) -> ConfigResult<Value> {
    // First try with toml_edit for better error reporting
    content.parse::<DocumentMut>().map_err(|e| {
        let (line, column) = e
            .span()
            .map(|span| line_col(content, span.start))
            .unwrap_or((1, 1));
        FuelcfgError::TomlParse {
            message: e.message().to_string(),
            line,
            column,
        }
    })?;

    // Then convert the typed table
    let table: ::toml::Table = ::toml::from_str(content).map_err(|e| FuelcfgError::TomlParse {
        message: e.message().to_string(),
        line: 1,
        column: 1,
    })?;

    Ok(table_to_json(table))
}

/// Render a starter fuels.config.toml
pub fn render_default_config(contracts: &[&str], output: &str) -> String {
    let mut doc = DocumentMut::new();

    let mut array = Array::new();
    for contract in contracts {
        array.push(*contract);
    }
    doc["contracts"] = toml_edit::value(array);
    doc["output"] = toml_edit::value(output);

    format!(
        "# Contract directories and the bindings output directory.\n\
         # Relative paths are resolved against this file's directory.\n{doc}"
    )
}

fn table_to_json(table: ::toml::Table) -> Value {
    let map: Map<String, Value> = table
        .into_iter()
        .map(|(key, value)| (key, toml_to_json(value)))
        .collect();
    Value::Object(map)
}

fn toml_to_json(value: ::toml::Value) -> Value {
    match value {
        ::toml::Value::String(s) => Value::String(s),
        ::toml::Value::Integer(i) => Value::Number(i.into()),
        ::toml::Value::Float(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
        ::toml::Value::Boolean(b) => Value::Bool(b),
        ::toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        ::toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        ::toml::Value::Table(table) => table_to_json(table),
    }
}

/// 1-based line and character column of a byte offset
fn line_col(content: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(content.len());
    while !content.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &content[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    (line, before[line_start..].chars().count() + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
contracts = ["../contract"]
output = "./src/contracts"
"#;

        let raw = parse_config_toml(toml).unwrap();
        assert_eq!(raw, json!({"contracts": ["../contract"], "output": "./src/contracts"}));
    }

    #[test]
    fn test_parse_keeps_wrong_types_for_validation() {
        let toml = r#"
contracts = "../contract"
output = 42
"#;

        let raw = parse_config_toml(toml).unwrap();
        assert_eq!(raw["contracts"], json!("../contract"));
        assert_eq!(raw["output"], json!(42));
    }

    #[test]
    fn test_syntax_error_location() {
        let toml = "contracts = [\"a\"]\noutput = \n";

        match parse_config_toml(toml).unwrap_err() {
            FuelcfgError::TomlParse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_render_default_config_parses_back() {
        let text = render_default_config(&["../contract"], "./src/contracts");
        assert!(text.starts_with("# Contract directories"));

        let raw = parse_config_toml(&text).unwrap();
        assert_eq!(raw["contracts"], json!(["../contract"]));
        assert_eq!(raw["output"], json!("./src/contracts"));
    }

    #[test]
    fn test_line_col() {
        let text = "ab\ncde\nf";
        assert_eq!(line_col(text, 0), (1, 1));
        assert_eq!(line_col(text, 4), (2, 2));
        assert_eq!(line_col(text, 7), (3, 1));
    }

    #[test]
    fn test_syntax_error_column_counts_characters() {
        let toml = "contracts = [\"ééééé\" x]\n";

        match parse_config_toml(toml).unwrap_err() {
            FuelcfgError::TomlParse { line, column, .. } => {
                assert_eq!(line, 1);
                assert_eq!(column, 22);
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_line_col_multibyte() {
        let text = "a = \"日本\"\nb";
        assert_eq!(line_col(text, "a = \"日本\"".len()), (1, 9));
        assert_eq!(line_col(text, text.len()), (2, 2));
    }
}
