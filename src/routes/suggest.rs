use rocket::serde::json::Json;
use rocket::{Route, State};
use serde::Serialize;

use crate::suggest::StaticIndex;

// "Proyección" para el cliente: sin los campos normalizados internos.
#[derive(Serialize)]
pub struct SuggestionView {
    id: String,
    title: String,
    author: String,
    category_id: String,
    category_display_key: String,
}

// GET /suggest?q=&category=
//
// Se llama en cada pulsación del cliente: trabajo puro de CPU sobre el
// índice inmutable, sin I/O. Query corto => lista vacía, no error.
#[get("/?<q>&<category>")]
pub async fn index(
    index: &State<StaticIndex>,
    q: String,
    category: Option<String>,
) -> Json<Vec<SuggestionView>> {
    let views = index
        .suggest(&q, category.as_deref())
        .into_iter()
        .map(|e| SuggestionView {
            id: e.id.clone(),
            title: e.title.clone(),
            author: e.author.clone(),
            category_id: e.category_id.clone(),
            category_display_key: e.category_display_key.clone(),
        })
        .collect();
    Json(views)
}

pub fn routes() -> Vec<Route> {
    routes![index]
}
