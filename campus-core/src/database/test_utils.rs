use sea_orm::DatabaseConnection;

use super::connection::{establish_connection, MEMORY_DATABASE};

pub async fn setup_test_db() -> DatabaseConnection {
    let db = establish_connection(MEMORY_DATABASE)
        .await
        .expect("Failed to connect to test database");

    use sea_orm_migration::MigratorTrait;
    crate::database::migrations::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}
