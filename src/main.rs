use movie_catalog::{catalog::Catalog, config::Config, db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,movie_catalog=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;
    let db = db::connect_and_migrate(&config.database_url, config.max_connections).await?;
    let catalog = Catalog::new(db);

    let genres = catalog.genres().await?;
    let people = catalog.people().await?;
    let films = catalog.film_works().await?;
    tracing::info!(
        genres = genres.len(),
        people = people.len(),
        film_works = films.len(),
        "content schema ready"
    );

    Ok(())
}
