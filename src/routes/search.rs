use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Route, State};
use serde::Serialize;

use crate::db::AppState;
use crate::search;

#[derive(Serialize)]
pub struct SearchRowView {
    id: String,
    title: String,
    author: String,
    language_code: String,
    cover_url: Option<String>,
    popularity: i64,
}

#[derive(Serialize)]
pub struct SearchResults {
    query: String,
    language: String,
    results: Vec<SearchRowView>,
}

// GET /search?q=&lang=&limit=
//
// 200 con lista vacía = sin resultados; 503 = el store falló. El cliente
// tiene que poder distinguir "no results" de "search unavailable".
#[get("/?<q>&<lang>&<limit>")]
pub async fn index(
    state: &State<AppState>,
    q: String,
    lang: String,
    limit: Option<usize>,
) -> Result<Json<SearchResults>, Status> {
    let rows = match search::search(state.store.as_ref(), &q, &lang, limit).await {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("[search] store error for {q:?}: {e}");
            return Err(Status::ServiceUnavailable);
        }
    };

    let results = rows
        .into_iter()
        .map(|row| SearchRowView {
            id: row.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            title: row.title,
            author: row.author,
            language_code: row.language_code,
            cover_url: row.cover_url,
            popularity: row.popularity,
        })
        .collect();

    Ok(Json(SearchResults { query: q, language: lang, results }))
}

pub fn routes() -> Vec<Route> {
    routes![index]
}
