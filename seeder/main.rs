use std::collections::HashSet;

use anyhow::Result;
use dotenvy::dotenv;
use fake::faker::name::raw::Name;
use fake::locales::EN;
use fake::Fake;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::ClientOptions,
    Client, Collection,
};
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
struct CatalogRowDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    title: String,
    author: String,
    language_code: String,
    cover_url: Option<String>,
    popularity: i64,
    is_active: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let uri = std::env::var("MONGO_URI").expect("MONGO_URI not set");
    let db_name = std::env::var("DB_NAME").expect("DB_NAME not set");

    let mut client_opts = ClientOptions::parse(&uri).await?;
    client_opts.app_name = Some("bookmatch-seeder".into());
    let client = Client::with_options(client_opts)?;
    let db = client.database(&db_name);
    let catalog: Collection<CatalogRowDoc> = db.collection("catalog");

    // Language codes (ISO-639-1)
    let languages = ["en", "es", "pt", "fr", "de"];

    // Títulos plausibles por combinación; suficiente variedad para que
    // los prefijos y substrings den resultados interesantes.
    let openers = [
        "The Art of", "The Power of", "Atomic", "Deep", "Digital",
        "Essential", "The Science of", "Beyond", "Rethinking",
        "The Little Book of",
    ];
    let topics = [
        "Habits", "Focus", "Sleep", "Money", "Leadership", "Minimalism",
        "Negotiation", "Memory", "Creativity", "Stoicism", "Productivity",
        "Influence",
    ];
    let suffixes = ["", " for Beginners", " at Work", " in Practice", " Revisited"];

    let mut rng = rand::thread_rng();
    let mut uniques = HashSet::<(String, String)>::new();
    let mut docs: Vec<CatalogRowDoc> = Vec::new();

    while docs.len() < 2000 {
        let title = format!(
            "{} {}{}",
            openers.choose(&mut rng).unwrap(),
            topics.choose(&mut rng).unwrap(),
            suffixes.choose(&mut rng).unwrap(),
        );
        let language_code = languages.choose(&mut rng).unwrap().to_string();

        if !uniques.insert((title.clone(), language_code.clone())) {
            continue; // avoid exact duplicates per language
        }

        let author: String = Name(EN).fake();

        let slug = title.to_lowercase().replace(' ', "-");
        let cover_url = Some(format!("https://covers.bookmatch.dev/{slug}.jpg"));

        docs.push(CatalogRowDoc {
            id: None,
            title,
            author,
            language_code,
            cover_url,
            popularity: rng.gen_range(0..100_000),
            // ~10% de filas desactivadas para ejercitar el filtro
            is_active: rng.gen_bool(0.9),
        });
    }

    // Wipe and seed
    catalog.delete_many(doc! {}).await?;
    let res = catalog.insert_many(docs).await?;
    println!("Seeded catalog rows: {}", res.inserted_ids.len());

    Ok(())
}
