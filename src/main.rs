#![allow(clippy::needless_return)]
#[macro_use] extern crate rocket;

use rocket::{Rocket, Build};
use rocket::http::Method;
use rocket_cors::{CorsOptions, AllowedOrigins, AllowedHeaders};

// Declaramos módulos
mod config;
mod catalog;
mod db;
mod models;
mod normalize;
mod search;
mod suggest;
mod routes {
    pub mod search;
    pub mod suggest;
}

// ------- Rutas base -------
#[get("/health")]
fn health() -> &'static str {
    "ok"
}

// CORS abierto para desarrollo (el cliente web llama /suggest en cada
// pulsación).
fn cors() -> rocket_cors::Cors {
    let allowed_origins = AllowedOrigins::all();

    CorsOptions {
        allowed_origins,
        allowed_methods: vec![Method::Get, Method::Options]
            .into_iter()
            .map(From::from)
            .collect(),
        allowed_headers: AllowedHeaders::some(&[
            "Content-Type",
            "Accept",
            "Authorization",
        ]),
        allow_credentials: true,
        ..Default::default()
    }
    .to_cors()
    .expect("error building CORS")
}

#[launch]
async fn rocket() -> Rocket<Build> {
    // 1) Config y estado (db::init_db devuelve AppState con un store
    //    nulo si no hay MONGO_URI configurada)
    let cfg = config::AppConfig::from_env();
    let state = db::init_db(&cfg).await;

    // 2) Índice estático: se construye una sola vez y queda inmutable;
    //    las rutas lo reciben como dependencia explícita, no hay global.
    let categories = catalog::load_catalog(cfg.catalog_path.as_deref());
    let index = suggest::StaticIndex::build(&categories);

    // 3) Construimos Rocket y montamos rutas
    rocket::build()
        .manage(state)
        .manage(index)
        .attach(cors())
        .mount("/", routes![health])
        .mount("/suggest", routes::suggest::routes())
        .mount("/search", routes::search::routes())
}
