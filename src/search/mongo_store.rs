use anyhow::Result;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

use crate::models::CatalogRow;
use super::CatalogStore;

pub struct MongoCatalogStore {
    db: Database,
}

impl MongoCatalogStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<CatalogRow> {
        self.db.collection::<CatalogRow>("catalog")
    }
}

// El contrato es un predicado de substring, no un patrón: escapamos los
// metacaracteres antes de armar el $regex.
fn escape_regex(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    for c in query.chars() {
        if "\\^$.|?*+()[]{}".contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[async_trait]
impl CatalogStore for MongoCatalogStore {
    async fn find_candidates(
        &self,
        query: &str,
        language_code: &str,
        cap: usize,
    ) -> Result<Vec<CatalogRow>> {
        let pattern = escape_regex(query);
        let anchored = format!("^{pattern}");

        // Unión de prefijo y substring sobre título y autor; el índice
        // {language_code, is_active} recorta el resto.
        let filter = doc! {
            "is_active": true,
            "language_code": language_code,
            "$or": [
                { "title":  { "$regex": anchored.as_str(), "$options": "i" } },
                { "title":  { "$regex": pattern.as_str(),  "$options": "i" } },
                { "author": { "$regex": anchored.as_str(), "$options": "i" } },
                { "author": { "$regex": pattern.as_str(),  "$options": "i" } },
            ],
        };

        let mut cursor = self
            .collection()
            .find(filter)
            .sort(doc! { "popularity": -1 })
            .limit(cap as i64)
            .await?;

        let mut rows = Vec::new();
        while let Some(row) = cursor.try_next().await? {
            rows.push(row);
        }
        Ok(rows)
    }
}
