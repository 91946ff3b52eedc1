use anyhow::Result;
use async_trait::async_trait;

use crate::models::CatalogRow;

pub mod mongo_store;
pub mod null_store;

pub use mongo_store::MongoCatalogStore;
pub use null_store::NullCatalogStore;

/// Tope por defecto de filas devueltas al caller.
pub const MAX_RESULTS: usize = 8;

// El gate de longitud mira el query CRUDO; el sugeridor estático mira el
// normalizado. Son dos algoritmos separados a propósito, no unificar.
const MIN_QUERY_CHARS: usize = 2;

// Candidatos pedidos al store (ya ordenados por popularidad) antes del
// re-rank local.
const CANDIDATE_CAP: usize = 50;

/// Capacidad de consulta del store: filas activas de un idioma cuyo
/// título o autor contiene el query (case-insensitive), más populares
/// primero, a lo sumo `cap` filas. Un `Err` es un fallo de acceso al
/// store, nunca "sin resultados".
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn find_candidates(
        &self,
        query: &str,
        language_code: &str,
        cap: usize,
    ) -> Result<Vec<CatalogRow>>;
}

/// Búsqueda remota: gate de longitud, consulta al store, re-rank local y
/// corte a `limit` (por defecto [`MAX_RESULTS`]).
///
/// Sin estado entre llamadas; cada invocación re-consulta el store. Un
/// fallo del store se propaga tal cual al caller.
pub async fn search(
    store: &dyn CatalogStore,
    query: &str,
    language_code: &str,
    limit: Option<usize>,
) -> Result<Vec<CatalogRow>> {
    let limit = limit.unwrap_or(MAX_RESULTS);
    if query.chars().count() < MIN_QUERY_CHARS {
        // query corto: vacío sin tocar el store
        return Ok(Vec::new());
    }

    let rows = store.find_candidates(query, language_code, CANDIDATE_CAP).await?;
    let mut ranked = rerank(rows, query);
    ranked.truncate(limit);
    Ok(ranked)
}

// Títulos con prefijo primero; dentro de cada grupo, popularidad desc.
// Sort estable: filas iguales en (prefijo, popularidad) conservan el
// orden del store.
fn rerank(rows: Vec<CatalogRow>, query: &str) -> Vec<CatalogRow> {
    let q = query.to_lowercase();
    let mut decorated: Vec<(bool, CatalogRow)> = rows
        .into_iter()
        .map(|row| (row.title.to_lowercase().starts_with(&q), row))
        .collect();

    decorated.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.popularity.cmp(&a.1.popularity)));
    decorated.into_iter().map(|(_, row)| row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn row(title: &str, popularity: i64) -> CatalogRow {
        CatalogRow {
            id: None,
            title: title.to_string(),
            author: "Someone".to_string(),
            language_code: "en".to_string(),
            cover_url: None,
            popularity,
            is_active: true,
        }
    }

    struct FixedStore(Vec<CatalogRow>);

    #[async_trait]
    impl CatalogStore for FixedStore {
        async fn find_candidates(&self, _: &str, _: &str, _: usize) -> Result<Vec<CatalogRow>> {
            Ok(self.0.clone())
        }
    }

    struct FailingStore;

    #[async_trait]
    impl CatalogStore for FailingStore {
        async fn find_candidates(&self, _: &str, _: &str, _: usize) -> Result<Vec<CatalogRow>> {
            Err(anyhow!("store unreachable"))
        }
    }

    // Si el gate deja pasar un query corto, esto revienta el test.
    struct PanickingStore;

    #[async_trait]
    impl CatalogStore for PanickingStore {
        async fn find_candidates(&self, _: &str, _: &str, _: usize) -> Result<Vec<CatalogRow>> {
            panic!("short query must not reach the store");
        }
    }

    #[tokio::test]
    async fn short_raw_query_skips_the_store() {
        let hits = search(&PanickingStore, "a", "en", None).await.unwrap();
        assert!(hits.is_empty());
        let hits = search(&PanickingStore, "", "en", None).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn prefix_titles_sort_before_substring_titles() {
        let store = FixedStore(vec![
            row("The Habit Loop", 500),
            row("Atomic Habits", 500),
        ]);
        let hits = search(&store, "habit", "en", None).await.unwrap();
        assert_eq!(hits[0].title, "Atomic Habits");
        assert_eq!(hits[1].title, "The Habit Loop");
    }

    #[tokio::test]
    async fn popularity_orders_within_each_group() {
        let store = FixedStore(vec![
            row("Habit One", 10),
            row("The Habit Loop", 900),
            row("Habit Two", 300),
            row("A Habit Story", 100),
        ]);
        let hits = search(&store, "habit", "en", None).await.unwrap();
        let titles: Vec<&str> = hits.iter().map(|r| r.title.as_str()).collect();
        // prefijos por popularidad, después el resto por popularidad
        assert_eq!(titles, ["Habit Two", "Habit One", "The Habit Loop", "A Habit Story"]);
    }

    #[tokio::test]
    async fn prefix_comparison_is_case_insensitive() {
        let store = FixedStore(vec![row("HABIT FORMATION", 1), row("The Habit Loop", 999)]);
        let hits = search(&store, "habit", "en", None).await.unwrap();
        assert_eq!(hits[0].title, "HABIT FORMATION");
    }

    #[tokio::test]
    async fn truncates_to_default_and_custom_limit() {
        let rows: Vec<CatalogRow> = (0..20).map(|i| row(&format!("Habit {i}"), i)).collect();

        let hits = search(&FixedStore(rows.clone()), "habit", "en", None).await.unwrap();
        assert_eq!(hits.len(), MAX_RESULTS);

        let hits = search(&FixedStore(rows), "habit", "en", Some(3)).await.unwrap();
        assert_eq!(hits.len(), 3);
    }

    #[tokio::test]
    async fn empty_result_and_store_failure_are_distinct() {
        let ok = search(&FixedStore(vec![]), "zzzzzz", "en", None).await;
        assert!(matches!(ok, Ok(ref v) if v.is_empty()));

        let err = search(&FailingStore, "atom", "en", None).await;
        assert!(err.is_err());
    }
}
