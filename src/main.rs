use personstore::{
    config::Config, db::init_db, ColumnRepository, DocumentRepository, Person, PersonStore,
    StorageMode,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Open the database
    let pool = match init_db(&config.database_path).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Failed to open database: {}", e);
            std::process::exit(1);
        }
    };

    let store: Box<dyn PersonStore> = match config.storage_mode {
        StorageMode::Columns => Box::new(ColumnRepository::new(pool)),
        StorageMode::Document => Box::new(DocumentRepository::new(pool)),
    };

    if let Err(e) = store.migrate().await {
        eprintln!("Migration failed: {}", e);
        std::process::exit(1);
    }

    // The document layout needs caller-assigned ids; the columns layout
    // assigns its own.
    let seed = match config.storage_mode {
        StorageMode::Columns => vec![Person::new("Williams", 56), Person::new("Eliasson", 52)],
        StorageMode::Document => vec![
            Person::with_id(10, "Williams", 56),
            Person::with_id(20, "Eliasson", 52),
        ],
    };

    // A single failed insert is logged and the run continues.
    for person in seed {
        match store.create(person).await {
            Ok(created) => tracing::info!("created person: {}", created),
            Err(e) => tracing::error!("failed to create person: {}", e),
        }
    }

    let all = match store.all().await {
        Ok(all) => all,
        Err(e) => {
            eprintln!("Failed to list people: {}", e);
            std::process::exit(1);
        }
    };

    println!("All people:");
    for person in &all {
        println!("  {}", person);
    }
}
