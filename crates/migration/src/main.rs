use sea_orm_migration::prelude::*;

/// Schema tool: `migration up | down | fresh | refresh | reset | status`.
/// Reads `DATABASE_URL` (or `-u <url>`).
#[async_std::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
