use serde::{Deserialize, Serialize};

use crate::domain::models::model_descriptor::ModelDescriptor;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelDto {
    pub id: String,
    pub name: String,
}

impl From<ModelDescriptor> for ModelDto {
    fn from(model: ModelDescriptor) -> Self {
        Self {
            id: model.id,
            name: model.display_name,
        }
    }
}
