use std::env;

pub struct AppConfig {
    pub mongo_uri: Option<String>,
    pub db_name: String,
    pub catalog_path: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // ignora si no existe .env

        let get = |k: &str, d: &str| env::var(k).unwrap_or_else(|_| d.to_string());

        Self {
            // Sin MONGO_URI la app arranca igual, con la búsqueda remota
            // deshabilitada (ver db::init_db).
            mongo_uri: env::var("MONGO_URI").ok(),
            db_name: get("DB_NAME", "bookmatch_dev"),
            catalog_path: env::var("CATALOG_PATH").ok(),
        }
    }
}
