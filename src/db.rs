use mongodb::{
    bson::doc,
    options::ClientOptions,
    Client, Database, IndexModel,
};

use crate::config::AppConfig;
use crate::search::{CatalogStore, MongoCatalogStore, NullCatalogStore};

pub struct AppState {
    pub store: Box<dyn CatalogStore>,
}

pub async fn ensure_indexes(db: &Database) -> mongodb::error::Result<()> {
    let catalog = db.collection::<mongodb::bson::Document>("catalog");

    // Elegibilidad: toda consulta filtra por idioma + activo
    let eligibility_idx = IndexModel::builder()
        .keys(doc! { "language_code": 1, "is_active": 1 })
        .build();
    let _ = catalog.create_index(eligibility_idx).await?;

    // popularity (pre-orden descendente de los candidatos)
    let popularity_idx = IndexModel::builder()
        .keys(doc! { "popularity": -1 })
        .build();
    let _ = catalog.create_index(popularity_idx).await?;

    Ok(())
}

pub async fn init_db(cfg: &AppConfig) -> AppState {
    // Igual que con los servicios opcionales: sin URL configurada se
    // monta un store nulo y /search responde vacío, no 503.
    let Some(uri) = cfg.mongo_uri.as_deref() else {
        eprintln!("MONGO_URI not set; remote catalog search disabled");
        return AppState { store: Box::new(NullCatalogStore) };
    };

    let mut opts = ClientOptions::parse(uri).await.expect("Invalid MONGO_URI");
    opts.app_name = Some("bookmatch".into());

    let client = Client::with_options(opts).expect("Cannot create Mongo client");
    let db = client.database(&cfg.db_name);

    if let Err(e) = ensure_indexes(&db).await {
        eprintln!("Failed to create indexes: {e}");
    }

    AppState { store: Box::new(MongoCatalogStore::new(db)) }
}
