use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set};
use tracing::{debug, info};

use crate::common::db_errors::DbResultExt;
use crate::database::entities::clients;
use crate::errors::CoreResult;
use crate::services::ValidationService;

#[derive(Clone, Debug)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Clone)]
pub struct ClientService {
    db: DatabaseConnection,
}

impl ClientService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> CoreResult<Vec<clients::Model>> {
        clients::Entity::find()
            .order_by_asc(clients::Column::Id)
            .all(&self.db)
            .await
            .db_context("list clients")
    }

    pub async fn get(&self, id: i32) -> CoreResult<Option<clients::Model>> {
        clients::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .db_context("load client")
    }

    pub async fn create(&self, input: NewClient) -> CoreResult<clients::Model> {
        ValidationService::require_all(&[
            ("name", input.name.as_str()),
            ("email", input.email.as_str()),
            ("phone", input.phone.as_str()),
        ])?;

        let now = Utc::now();
        let client = clients::ActiveModel {
            name: Set(input.name),
            email: Set(input.email),
            phone: Set(input.phone),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let client = client.insert(&self.db).await.db_context("create client")?;
        info!("Created client {} ({})", client.id, client.name);
        Ok(client)
    }

    /// Deletes the client and returns it, or `None` when no such client exists.
    /// Projects referencing the client are left untouched.
    pub async fn delete(&self, id: i32) -> CoreResult<Option<clients::Model>> {
        let Some(client) = self.get(id).await? else {
            debug!("Delete skipped, client {} does not exist", id);
            return Ok(None);
        };

        client
            .clone()
            .delete(&self.db)
            .await
            .db_context("delete client")?;
        info!("Deleted client {}", id);
        Ok(Some(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_utils::setup_test_db;
    use crate::errors::CoreErrorKind;

    fn acme() -> NewClient {
        NewClient {
            name: "Acme".to_string(),
            email: "ops@acme.test".to_string(),
            phone: "555-0100".to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_timestamps() {
        let service = ClientService::new(setup_test_db().await);
        let client = service.create(acme()).await.unwrap();

        assert!(client.id > 0);
        assert_eq!(client.name, "Acme");
        assert_eq!(client.created_at, client.updated_at);
    }

    #[tokio::test]
    async fn create_rejects_missing_phone() {
        let service = ClientService::new(setup_test_db().await);
        let mut input = acme();
        input.phone = String::new();

        let err = service.create(input).await.unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::Validation);
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_unknown_client_returns_none() {
        let service = ClientService::new(setup_test_db().await);
        assert!(service.delete(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_returns_removed_client() {
        let service = ClientService::new(setup_test_db().await);
        let client = service.create(acme()).await.unwrap();

        let deleted = service.delete(client.id).await.unwrap().unwrap();
        assert_eq!(deleted.id, client.id);
        assert!(service.get(client.id).await.unwrap().is_none());
    }
}
