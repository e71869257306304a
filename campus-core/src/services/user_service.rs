use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;

use crate::common::db_errors::DbResultExt;
use crate::common::string_list;
use crate::database::entities::users;
use crate::errors::CoreResult;
use crate::services::ValidationService;

#[derive(Clone, Debug)]
pub struct NewUser {
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Clone)]
pub struct UserService {
    db: DatabaseConnection,
}

impl UserService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores the user with an empty group list. `password_hash` is written
    /// exactly as given; no hashing happens here.
    pub async fn register(&self, input: NewUser) -> CoreResult<users::Model> {
        ValidationService::require_all(&[
            ("userName", input.user_name.as_str()),
            ("firstName", input.first_name.as_str()),
            ("lastName", input.last_name.as_str()),
            ("email", input.email.as_str()),
            ("passwordHash", input.password_hash.as_str()),
        ])?;

        let now = Utc::now();
        let user = users::ActiveModel {
            user_name: Set(input.user_name),
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            email: Set(input.email),
            password_hash: Set(input.password_hash),
            groups: Set(string_list::encode(&[])?),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let user = user.insert(&self.db).await.db_context("register user")?;
        info!("Registered user {} ({})", user.user_name, user.id);
        Ok(user)
    }

    /// Every user with this user name. No credential is checked.
    pub async fn find_by_user_name(&self, user_name: &str) -> CoreResult<Vec<users::Model>> {
        users::Entity::find()
            .filter(users::Column::UserName.eq(user_name))
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .db_context("find users by name")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_utils::setup_test_db;
    use crate::errors::CoreErrorKind;

    fn ada(user_name: &str) -> NewUser {
        NewUser {
            user_name: user_name.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@school.test".to_string(),
            password_hash: "plain-text-secret".to_string(),
        }
    }

    #[tokio::test]
    async fn register_keeps_password_verbatim_and_groups_empty() {
        let service = UserService::new(setup_test_db().await);
        let user = service.register(ada("ada")).await.unwrap();

        assert_eq!(user.password_hash, "plain-text-secret");
        assert!(user.group_names().is_empty());
    }

    #[tokio::test]
    async fn register_requires_password_hash() {
        let service = UserService::new(setup_test_db().await);
        let mut input = ada("ada");
        input.password_hash = String::new();

        let err = service.register(input).await.unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::Validation);
    }

    #[tokio::test]
    async fn find_by_user_name_returns_all_matches() {
        let service = UserService::new(setup_test_db().await);
        service.register(ada("x")).await.unwrap();
        service.register(ada("x")).await.unwrap();
        service.register(ada("y")).await.unwrap();

        let users = service.find_by_user_name("x").await.unwrap();
        assert_eq!(users.len(), 2);
        assert!(users.iter().all(|u| u.user_name == "x"));
        assert!(service.find_by_user_name("z").await.unwrap().is_empty());
    }
}
