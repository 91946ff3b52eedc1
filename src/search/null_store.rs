use anyhow::Result;
use async_trait::async_trait;

use crate::models::CatalogRow;
use super::CatalogStore;

// Store nulo: búsqueda remota deshabilitada (sin MONGO_URI). Devuelve
// vacío, que no es lo mismo que un fallo.
pub struct NullCatalogStore;

#[async_trait]
impl CatalogStore for NullCatalogStore {
    async fn find_candidates(&self, _: &str, _: &str, _: usize) -> Result<Vec<CatalogRow>> {
        Ok(vec![])
    }
}
