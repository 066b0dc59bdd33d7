use serde::{Deserialize, Serialize};

use crate::entities::publisher;

/// Body of `POST /editeurs/create` and `POST /editeurs/{id}/update`.
#[derive(Debug, Default, Deserialize)]
pub struct PublisherForm {
    #[serde(default, alias = "nom")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublisherView {
    pub id: i32,
    pub name: String,
}

impl From<&publisher::Model> for PublisherView {
    fn from(publisher: &publisher::Model) -> Self {
        Self {
            id: publisher.id,
            name: publisher.name.clone(),
        }
    }
}
