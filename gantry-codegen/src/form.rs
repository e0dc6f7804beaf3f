//! Form-markup rendering from UI-affordance specs.

use gantry_schema::{UiSnippetSpec, WidgetKind};

/// Render the form controls for the given snippets, one block per field.
pub fn render_form(snippets: &[UiSnippetSpec]) -> String {
    snippets
        .iter()
        .map(render_control)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a read-only detail list (`dt`/`dd` pairs) for the snippets.
pub fn render_detail_list(snippets: &[UiSnippetSpec]) -> String {
    snippets
        .iter()
        .map(|snippet| {
            format!(
                "<dt class=\"col-sm-3\">{}</dt><dd class=\"col-sm-9\" data-field=\"{}\"></dd>",
                snippet.label, snippet.field
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_control(snippet: &UiSnippetSpec) -> String {
    let label = &snippet.label;
    let name = &snippet.field;
    match &snippet.widget {
        WidgetKind::Select { options } => {
            let mut rendered = String::new();
            for option in options {
                rendered.push_str(&format!(
                    "    <option value=\"{option}\">{option}</option>\n"
                ));
            }
            format!(
                "<div class=\"mb-5\">\n  <label class=\"form-label required\">{label}</label>\n  <select name=\"{name}\" class=\"form-select\" required>\n    <option value=\"\">-- Select --</option>\n{rendered}  </select>\n</div>"
            )
        }
        WidgetKind::TextArea => format!(
            "<div class=\"mb-5\">\n  <label class=\"form-label required\">{label}</label>\n  <textarea name=\"{name}\" class=\"form-control\" rows=\"4\" required></textarea>\n</div>"
        ),
        WidgetKind::NumberInput => format!(
            "<div class=\"mb-5\">\n  <label class=\"form-label\">{label}</label>\n  <input type=\"number\" step=\"any\" name=\"{name}\" class=\"form-control\" />\n</div>"
        ),
        WidgetKind::TextInput => format!(
            "<div class=\"mb-5\">\n  <label class=\"form-label required\">{label}</label>\n  <input type=\"text\" name=\"{name}\" class=\"form-control\" required />\n</div>"
        ),
    }
}
