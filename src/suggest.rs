use crate::models::{Category, FlatIndexEntry};
use crate::normalize::normalize;

/// Tope de sugerencias devueltas.
pub const MAX_SUGGESTIONS: usize = 8;

// Con menos de 2 caracteres normalizados casi todo el catálogo matchea;
// devolvemos vacío en vez de inundar el dropdown.
const MIN_QUERY_CHARS: usize = 2;

// Pesos aditivos. Título y autor suman entre sí; dentro de cada campo
// solo aplica la regla más fuerte.
const TITLE_PREFIX: i32 = 100;
const TITLE_CONTAINS: i32 = 60;
const AUTHOR_PREFIX: i32 = 40;
const AUTHOR_CONTAINS: i32 = 20;
const CATEGORY_BOOST: i32 = 10;

/// Índice plano inmutable; se construye una vez al arrancar y se comparte
/// entre requests sin sincronización.
pub struct StaticIndex {
    pub entries: Vec<FlatIndexEntry>,
}

impl StaticIndex {
    pub fn build(categories: &[Category]) -> Self {
        Self { entries: build_index(categories) }
    }

    pub fn suggest(&self, query: &str, preferred_category: Option<&str>) -> Vec<&FlatIndexEntry> {
        suggest(query, &self.entries, preferred_category)
    }
}

/// Aplana las categorías (en orden) a entradas de índice con los campos
/// normalizados precalculados. Categorías sin id o libros sin título se
/// saltan sin abortar el build.
pub fn build_index(categories: &[Category]) -> Vec<FlatIndexEntry> {
    let mut entries = Vec::new();
    for cat in categories {
        if cat.id.is_empty() {
            eprintln!("[catalog] skipping category without id ({})", cat.display_key);
            continue;
        }
        for (pos, book) in cat.books.iter().enumerate() {
            if book.title.is_empty() {
                eprintln!("[catalog] skipping untitled book in {}", cat.id);
                continue;
            }
            entries.push(FlatIndexEntry {
                id: format!("{}-{}", cat.id, pos),
                title: book.title.clone(),
                author: book.author.clone(),
                category_id: cat.id.clone(),
                category_display_key: cat.display_key.clone(),
                normalized_title: normalize(&book.title),
                normalized_author: normalize(&book.author),
            });
        }
    }
    entries
}

/// Puntúa cada entrada contra el query normalizado y devuelve a lo sumo
/// [`MAX_SUGGESTIONS`] matches, mejor primero. Las entradas con score 0
/// quedan fuera.
pub fn suggest<'a>(
    query: &str,
    index: &'a [FlatIndexEntry],
    preferred_category: Option<&str>,
) -> Vec<&'a FlatIndexEntry> {
    let q = normalize(query);
    if q.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let mut scored: Vec<(i32, &FlatIndexEntry)> = Vec::new();
    for entry in index {
        let score = score_entry(entry, &q, preferred_category);
        if score > 0 {
            scored.push((score, entry));
        }
    }

    // Orden total: score desc, luego título crudo asc. El desempate hace
    // el resultado reproducible sea cual sea el orden del índice.
    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.title.cmp(&b.1.title)));
    scored.truncate(MAX_SUGGESTIONS);
    scored.into_iter().map(|(_, entry)| entry).collect()
}

fn score_entry(entry: &FlatIndexEntry, q: &str, preferred_category: Option<&str>) -> i32 {
    let mut score = 0;

    if entry.normalized_title.starts_with(q) {
        score += TITLE_PREFIX;
    } else if entry.normalized_title.contains(q) {
        score += TITLE_CONTAINS;
    }

    if entry.normalized_author.starts_with(q) {
        score += AUTHOR_PREFIX;
    } else if entry.normalized_author.contains(q) {
        score += AUTHOR_CONTAINS;
    }

    // El boost reordena matches, nunca mete entradas que no matchean.
    if score > 0 && preferred_category == Some(entry.category_id.as_str()) {
        score += CATEGORY_BOOST;
    }

    score
}
