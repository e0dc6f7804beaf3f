//! Validation-rule rendering.

use serde_json::{Map, Value};

use gantry_schema::{ValidationRule, ValidationSpec};

/// Canonical token for one rule, e.g. `max:80` or `in:draft,published`.
pub fn rule_token(rule: &ValidationRule) -> String {
    match rule {
        ValidationRule::Required => "required".to_string(),
        ValidationRule::Nullable => "nullable".to_string(),
        ValidationRule::Text => "string".to_string(),
        ValidationRule::MaxLength(length) => format!("max:{length}"),
        ValidationRule::Integer => "integer".to_string(),
        ValidationRule::Numeric => "numeric".to_string(),
        ValidationRule::Boolean => "boolean".to_string(),
        ValidationRule::Date => "date".to_string(),
        ValidationRule::OneOf(values) => format!("in:{}", values.join(",")),
    }
}

/// Render validation specs as a JSON object mapping each field to its
/// rule tokens.
pub fn render_rules(specs: &[ValidationSpec]) -> Value {
    let mut map = Map::new();
    for spec in specs {
        map.insert(
            spec.field.clone(),
            Value::Array(
                spec.rules
                    .iter()
                    .map(|rule| Value::String(rule_token(rule)))
                    .collect(),
            ),
        );
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use gantry_schema::{parse, validation_rules};
    use serde_json::json;

    use super::*;

    #[test]
    fn tokens_match_the_rule_vocabulary() {
        assert_eq!(rule_token(&ValidationRule::MaxLength(80)), "max:80");
        assert_eq!(
            rule_token(&ValidationRule::OneOf(vec!["a".into(), "b".into()])),
            "in:a,b"
        );
    }

    #[test]
    fn renders_a_rule_document() {
        let fields = parse(Some("title:string,status:enum(draft,published)"));
        let rendered = render_rules(&validation_rules(&fields));
        assert_eq!(
            rendered,
            json!({
                "title": ["required", "string"],
                "status": ["required", "in:draft,published"],
            })
        );
    }

    #[test]
    fn empty_field_list_still_validates_name() {
        let rendered = render_rules(&validation_rules(&[]));
        assert_eq!(rendered, json!({ "name": ["required", "string"] }));
    }
}
