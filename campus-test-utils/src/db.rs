use campus_core::database::connection::{establish_connection, MEMORY_DATABASE};
use campus_core::database::migrations::Migrator;
use sea_orm::{DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

pub struct TestDb {
    url: String,
}

impl TestDb {
    pub fn new_in_memory() -> Self {
        Self {
            url: MEMORY_DATABASE.to_string(),
        }
    }

    pub async fn connect(&self) -> Result<DatabaseConnection, DbErr> {
        establish_connection(&self.url).await
    }

    /// Connects and applies every migration.
    pub async fn connect_migrated(&self) -> Result<DatabaseConnection, DbErr> {
        let db = self.connect().await?;
        Migrator::up(&db, None).await?;
        Ok(db)
    }
}
