use serde::Serialize;

use crate::entities::genre;

#[derive(Debug, Clone, Serialize)]
pub struct GenreView {
    pub id: i32,
    pub name: String,
}

impl From<&genre::Model> for GenreView {
    fn from(genre: &genre::Model) -> Self {
        Self {
            id: genre.id,
            name: genre.name.clone(),
        }
    }
}

/// One `<option>` of a genre or publisher `<select>`.
#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub id: i32,
    pub name: String,
    pub selected: bool,
}

impl SelectOption {
    #[must_use]
    pub fn new(id: i32, name: String, current: Option<i32>) -> Self {
        Self {
            id,
            name,
            selected: current == Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_is_selected_only_for_current_reference() {
        assert!(SelectOption::new(3, "RPG".to_string(), Some(3)).selected);
        assert!(!SelectOption::new(3, "RPG".to_string(), Some(4)).selected);
        assert!(!SelectOption::new(3, "RPG".to_string(), None).selected);
    }
}
