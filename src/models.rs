use serde::{Deserialize, Serialize};
use mongodb::bson::oid::ObjectId;

/* ===== Catálogo curado (sugerencias instantáneas) ===== */

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Book {
    pub title: String,
    pub author: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Category {
    pub id: String,
    pub display_key: String,        // clave i18n, la UI la traduce
    pub books: Vec<Book>,
}

// Entrada del índice plano. El id ("<categoría>-<posición>") es único y
// estable mientras no cambie el orden del catálogo; los campos
// normalizados se precalculan una sola vez al construir el índice.
#[derive(Debug, Clone)]
pub struct FlatIndexEntry {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category_id: String,
    pub category_display_key: String,
    pub normalized_title: String,
    pub normalized_author: String,
}

/* ===== Catálogo persistido (búsqueda remota) ===== */

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CatalogRow {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub author: String,
    pub language_code: String,      // ISO-639-1
    pub cover_url: Option<String>,
    pub popularity: i64,
    pub is_active: bool,
}
