use crate::{config::Config, error::AppError};

/// Connects to the database and runs pending migrations.
///
/// Must complete successfully before the router is built; the schema is
/// guaranteed up-to-date afterwards.
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
