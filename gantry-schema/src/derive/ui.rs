//! UI-affordance derivation.

use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};

use crate::category::TypeCategory;
use crate::field::FieldDefinition;

/// Interaction widget class for a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetKind {
    /// Dropdown over a closed value set.
    Select {
        /// Options, in declaration order.
        options: Vec<String>,
    },
    /// Multi-line text input.
    TextArea,
    /// Numeric input.
    NumberInput,
    /// Single-line text input.
    TextInput,
}

/// The UI affordance derived for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSnippetSpec {
    /// Field the widget binds to.
    pub field: String,
    /// Human-readable label.
    pub label: String,
    /// Widget class.
    pub widget: WidgetKind,
}

/// Derive the UI affordance for one field.
///
/// Enumerations get a dropdown, long text a multi-line input, numeric
/// categories a numeric input, everything else a single-line input.
pub fn ui_snippet(field: &FieldDefinition) -> UiSnippetSpec {
    let widget = match field.category() {
        TypeCategory::Enum { values } => WidgetKind::Select { options: values },
        category if category.is_long_text() => WidgetKind::TextArea,
        category if category.is_numeric() => WidgetKind::NumberInput,
        _ => WidgetKind::TextInput,
    };
    UiSnippetSpec {
        field: field.name.clone(),
        label: label_for(&field.name),
        widget,
    }
}

/// Derive UI affordances for a field list, skipping the implicit `id`.
pub fn ui_snippets(fields: &[FieldDefinition]) -> Vec<UiSnippetSpec> {
    fields
        .iter()
        .filter(|field| field.name != "id")
        .map(ui_snippet)
        .collect()
}

/// Human label for a field name: separators become spaces, words are
/// title-cased (`unit_price` becomes `Unit Price`).
pub fn label_for(name: &str) -> String {
    name.to_case(Case::Title)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn enum_gets_a_dropdown() {
        let snippet = ui_snippet(&FieldDefinition::new("status", "enum(draft,published)"));
        assert_eq!(
            snippet.widget,
            WidgetKind::Select { options: vec!["draft".into(), "published".into()] }
        );
    }

    #[test]
    fn long_text_gets_a_textarea() {
        let snippet = ui_snippet(&FieldDefinition::new("body", "text"));
        assert_eq!(snippet.widget, WidgetKind::TextArea);
    }

    #[test]
    fn numeric_categories_get_a_number_input() {
        for spec in ["integer", "bigint", "decimal(10,2)"] {
            let snippet = ui_snippet(&FieldDefinition::new("amount", spec));
            assert_eq!(snippet.widget, WidgetKind::NumberInput, "{spec}");
        }
    }

    #[test]
    fn everything_else_gets_a_text_input() {
        for spec in ["string", "date", "datetime", "geometry"] {
            let snippet = ui_snippet(&FieldDefinition::new("value", spec));
            assert_eq!(snippet.widget, WidgetKind::TextInput, "{spec}");
        }
    }

    #[test]
    fn labels_are_title_cased() {
        assert_eq!(label_for("unit_price"), "Unit Price");
        assert_eq!(label_for("published-at"), "Published At");
        assert_eq!(label_for("title"), "Title");
    }

    #[test]
    fn id_is_skipped() {
        let fields = crate::parser::parse(Some("id:bigint,title"));
        let snippets = ui_snippets(&fields);
        assert_eq!(snippets.len(), 1);
        assert_eq!(snippets[0].field, "title");
    }
}
