use crate::application::dto::model_dto::ModelDto;

const INDEX_TEMPLATE: &str = include_str!("../../assets/templates/index.html");
const MODEL_OPTIONS_SLOT: &str = "{{ model_options }}";

pub const SCRIPT: &str = include_str!("../../assets/static/js/script.js");
pub const STYLESHEET: &str = include_str!("../../assets/static/css/style.css");

pub fn render_index(models: &[ModelDto]) -> String {
    let options = models
        .iter()
        .map(|model| {
            format!(
                "<option value=\"{}\">{}</option>",
                escape_html(&model.id),
                escape_html(&model.name)
            )
        })
        .collect::<Vec<_>>()
        .join("\n          ");

    INDEX_TEMPLATE.replace(MODEL_OPTIONS_SLOT, &options)
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape_html, render_index, MODEL_OPTIONS_SLOT};
    use crate::application::dto::model_dto::ModelDto;

    #[test]
    fn lists_every_model_as_an_option() {
        let page = render_index(&[
            ModelDto {
                id: "gpt-4".to_string(),
                name: "GPT-4".to_string(),
            },
            ModelDto {
                id: "microsoft/phi-4".to_string(),
                name: "Phi-4".to_string(),
            },
        ]);

        assert!(page.contains("<option value=\"gpt-4\">GPT-4</option>"));
        assert!(page.contains("<option value=\"microsoft/phi-4\">Phi-4</option>"));
        assert!(!page.contains(MODEL_OPTIONS_SLOT));
        assert!(page.contains("/static/js/script.js"));
    }

    #[test]
    fn model_names_are_escaped() {
        let page = render_index(&[ModelDto {
            id: "x\"><script>".to_string(),
            name: "<b>Bold</b> & co".to_string(),
        }]);

        assert!(!page.contains("<script>\""));
        assert!(page.contains("&lt;b&gt;Bold&lt;/b&gt; &amp; co"));
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape_html("Qwen2.5-Coder-32B"), "Qwen2.5-Coder-32B");
        assert_eq!(escape_html("it's"), "it&#39;s");
    }
}
