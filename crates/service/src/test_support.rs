#![cfg(test)]
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::company::NewCompany;
use models::db::{connect_with_config, DatabaseConfig};
use uuid::Uuid;

/// Migrated database for one test.
///
/// Uses `TEST_DATABASE_URL` when set (a shared Postgres, so tests only rely on
/// rows they created themselves); otherwise a private in-memory SQLite.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => DatabaseConfig { url, max_connections: 5, min_connections: 1, ..DatabaseConfig::default() },
        // every connection to :memory: is a separate database, so keep exactly one
        Err(_) => DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            ..DatabaseConfig::default()
        },
    };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// A valid company with a unique tax id.
pub fn new_company() -> NewCompany {
    NewCompany {
        name: "Empresa Teste".into(),
        tax_id: unique_tax_id(),
        address: Some("Rua Teste, 123".into()),
        email: Some("teste@empresa.com".into()),
        phone: Some("11987654321".into()),
    }
}

pub fn unique_tax_id() -> String {
    Uuid::new_v4().simple().to_string()[..14].to_string()
}
