//! Validation-constraint derivation.

use serde::{Deserialize, Serialize};

use crate::category::TypeCategory;
use crate::field::FieldDefinition;

/// One validation constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationRule {
    /// The value must be present.
    Required,
    /// The value may be absent.
    Nullable,
    /// The value must be a string.
    Text,
    /// The string may not exceed this many characters.
    MaxLength(u32),
    /// The value must be an integer.
    Integer,
    /// The value must be numeric.
    Numeric,
    /// The value must be a boolean.
    Boolean,
    /// The value must be a date.
    Date,
    /// The value must be one of the listed members.
    OneOf(Vec<String>),
}

/// The validation constraints derived for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSpec {
    /// Field the constraints apply to.
    pub field: String,
    /// Constraints, presence rule first.
    pub rules: Vec<ValidationRule>,
}

impl ValidationSpec {
    /// Whether the spec demands presence.
    pub fn requires_presence(&self) -> bool {
        self.rules.contains(&ValidationRule::Required)
    }
}

/// Derive the validation constraints for one field.
///
/// The presence rule is driven strictly by the field's `nullable` flag.
/// Unrecognized types carry the presence rule alone.
pub fn validation_rule(field: &FieldDefinition) -> ValidationSpec {
    let presence = if field.nullable {
        ValidationRule::Nullable
    } else {
        ValidationRule::Required
    };
    let mut rules = vec![presence];
    match field.category() {
        TypeCategory::Text => {
            rules.push(ValidationRule::Text);
            if let Some(length) = field.length {
                rules.push(ValidationRule::MaxLength(length));
            }
        }
        TypeCategory::LongText => rules.push(ValidationRule::Text),
        TypeCategory::Integer | TypeCategory::BigInteger => rules.push(ValidationRule::Integer),
        TypeCategory::Boolean => rules.push(ValidationRule::Boolean),
        TypeCategory::Date | TypeCategory::DateTime => rules.push(ValidationRule::Date),
        TypeCategory::Decimal { .. } => rules.push(ValidationRule::Numeric),
        TypeCategory::Enum { values } => rules.push(ValidationRule::OneOf(values)),
        TypeCategory::Unrecognized { .. } => {}
    }
    ValidationSpec {
        field: field.name.clone(),
        rules,
    }
}

/// Derive validation constraints for a field list.
///
/// The `id` field is skipped. An empty field list yields a single default
/// rule requiring a non-empty `name` string, so validation is never
/// vacuous.
pub fn validation_rules(fields: &[FieldDefinition]) -> Vec<ValidationSpec> {
    let specs: Vec<ValidationSpec> = fields
        .iter()
        .filter(|field| field.name != "id")
        .map(validation_rule)
        .collect();
    if specs.is_empty() {
        return vec![ValidationSpec {
            field: "name".to_string(),
            rules: vec![ValidationRule::Required, ValidationRule::Text],
        }];
    }
    specs
}
