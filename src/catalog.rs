use std::fs;

use crate::models::Category;

// Catálogo curado embebido; CATALOG_PATH permite reemplazarlo sin
// recompilar.
const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

pub fn load_catalog(path: Option<&str>) -> Vec<Category> {
    if let Some(p) = path {
        match fs::read_to_string(p) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(categories) => return categories,
                Err(e) => eprintln!("[catalog] {p} is not a valid catalog ({e}); using embedded copy"),
            },
            Err(e) => eprintln!("[catalog] cannot read {p} ({e}); using embedded copy"),
        }
    }
    serde_json::from_str(EMBEDDED_CATALOG).expect("embedded catalog is valid JSON")
}

#[cfg(test)]
mod tests {
    use super::load_catalog;
    use crate::suggest::{build_index, suggest};

    #[test]
    fn embedded_catalog_parses_and_indexes() {
        let categories = load_catalog(None);
        assert!(!categories.is_empty());

        let index = build_index(&categories);
        assert!(!index.is_empty());

        // ids únicos en todo el índice
        let mut ids: Vec<&str> = index.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), index.len());
    }

    #[test]
    fn curated_catalog_answers_typical_queries() {
        let index = build_index(&load_catalog(None));

        // prefijo de título
        let hits = suggest("atom", &index, None);
        assert_eq!(hits[0].title, "Atomic Habits");

        // match por autor, detrás de cualquier prefijo de título
        let hits = suggest("clear", &index, None);
        assert!(hits.iter().any(|e| e.author == "James Clear"));
    }

    #[test]
    fn missing_file_falls_back_to_embedded() {
        let categories = load_catalog(Some("/does/not/exist.json"));
        assert!(!categories.is_empty());
    }
}
