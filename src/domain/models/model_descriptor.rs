use serde::{Deserialize, Serialize};

/// A model offered on the listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Identifier sent back in `model_id`
    pub id: String,

    /// Human-facing label
    #[serde(rename = "name")]
    pub display_name: String,
}

impl ModelDescriptor {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }

    /// Models listed when configuration does not provide its own list.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("gpt-4", "GPT-4"),
            Self::new("gpt-3.5-turbo", "GPT-3.5 Turbo"),
            Self::new("claude-3-opus", "Claude 3 Opus"),
            Self::new("Qwen/Qwen2.5-Coder-32B-Instruct", "Qwen2.5-Coder-32B"),
            Self::new("microsoft/phi-4", "Phi-4"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::ModelDescriptor;

    #[test]
    fn descriptor_serializes_display_name_as_name() {
        let value = serde_json::to_value(ModelDescriptor::new("microsoft/phi-4", "Phi-4"))
            .expect("descriptor should serialize");

        assert_eq!(value["id"], "microsoft/phi-4");
        assert_eq!(value["name"], "Phi-4");
        assert!(value.get("display_name").is_none());
    }

    #[test]
    fn default_models_have_unique_ids() {
        let models = ModelDescriptor::defaults();
        let mut ids = models.iter().map(|model| model.id.as_str()).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), models.len());
    }
}
