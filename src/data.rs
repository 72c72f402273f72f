// src/data.rs

use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CATEGORIES: [&str; 5] = [
    "Pengetahuan Umum",
    "Sains",
    "Sejarah",
    "Geografi",
    "Hiburan",
];

#[derive(Deserialize)]
struct CategoryFile {
    #[serde(default)]
    categories: Vec<String>,
}

pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// Carga las categorías desde el JSON; si falta o no se puede leer, usa la lista por defecto.
pub fn load_categories(path: &Path) -> Vec<String> {
    if !path.exists() {
        log::warn!("Categories file {} not found. Using default categories.", path.display());
        return default_categories();
    }

    let parsed = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|raw| serde_json::from_str::<CategoryFile>(&raw).map_err(|e| e.to_string()));

    match parsed {
        Ok(file) => {
            let categories: Vec<String> = file
                .categories
                .into_iter()
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect();
            if categories.is_empty() {
                log::warn!("{} has no categories. Using default categories.", path.display());
                default_categories()
            } else {
                log::info!("Loaded {} categories from {}", categories.len(), path.display());
                categories
            }
        }
        Err(e) => {
            log::error!("Error loading categories from {}: {e}", path.display());
            default_categories()
        }
    }
}
