use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{UpdateUserParams, User, UserFilter, parse_object_id};

/// Persistence gateway for users
///
/// Ids cross this boundary as the raw path strings; implementations reject
/// malformed ones with [`UserError::InvalidId`] before touching storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user, returning it with the assigned id
    async fn insert(&self, user: User) -> UserResult<User>;

    /// Fetch a user by its hex ObjectId
    async fn get_by_id(&self, id: &str) -> UserResult<User>;

    /// Every stored user, unfiltered
    async fn get_all(&self) -> UserResult<Vec<User>>;

    /// Write the present fields of `params` onto the first user matching `filter`.
    /// Matching nothing is not an error.
    async fn update(&self, filter: UserFilter, params: UpdateUserParams) -> UserResult<()>;

    /// Remove a user; removing an absent user is not an error
    async fn delete(&self, id: &str) -> UserResult<()>;

    /// Remove every user
    async fn clear(&self) -> UserResult<()>;
}

/// In-memory implementation of UserStore (for testing/development)
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<ObjectId, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, mut user: User) -> UserResult<User> {
        let id = ObjectId::new();
        user.id = Some(id);

        self.users.write().await.insert(id, user.clone());

        tracing::info!(user_id = %id, "Inserted user");
        Ok(user)
    }

    async fn get_by_id(&self, id: &str) -> UserResult<User> {
        let oid = parse_object_id(id)?;
        let users = self.users.read().await;
        users
            .get(&oid)
            .cloned()
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    async fn get_all(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;
        let mut result: Vec<User> = users.values().cloned().collect();
        // ObjectIds grow with creation time, which mirrors collection order
        result.sort_by_key(|u| u.id);
        Ok(result)
    }

    async fn update(&self, filter: UserFilter, params: UpdateUserParams) -> UserResult<()> {
        if params.is_empty() {
            return Ok(());
        }

        let mut users = self.users.write().await;
        if let Some(user) = users
            .values_mut()
            .filter(|u| filter.matches(u))
            .min_by_key(|u| u.id)
        {
            params.apply_to(user);
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> UserResult<()> {
        let oid = parse_object_id(id)?;
        self.users.write().await.remove(&oid);
        Ok(())
    }

    async fn clear(&self) -> UserResult<()> {
        self.users.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first_name: &str, email: &str) -> User {
        User {
            id: None,
            first_name: first_name.to_string(),
            last_name: "Foo".to_string(),
            email: email.to_string(),
            password_hash: "hashed_password".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = InMemoryUserStore::new();

        let inserted = store.insert(user("Some", "some@foo.com")).await.unwrap();
        let id = inserted.id.expect("id assigned on insert").to_hex();

        let fetched = store.get_by_id(&id).await.unwrap();
        assert_eq!(fetched, inserted);
    }

    #[tokio::test]
    async fn test_get_malformed_id_is_invalid_not_missing() {
        let store = InMemoryUserStore::new();

        let result = store.get_by_id("123").await;
        assert!(matches!(result, Err(UserError::InvalidId(_))));
    }

    #[tokio::test]
    async fn test_get_absent_id_is_not_found() {
        let store = InMemoryUserStore::new();

        let result = store.get_by_id(&ObjectId::new().to_hex()).await;
        assert!(matches!(result, Err(UserError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_all_in_insertion_order() {
        let store = InMemoryUserStore::new();
        assert!(store.get_all().await.unwrap().is_empty());

        store.insert(user("First", "a@foo.com")).await.unwrap();
        store.insert(user("Second", "b@foo.com")).await.unwrap();

        let names: Vec<String> = store
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.first_name)
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_update_is_sparse_and_targets_filter() {
        let store = InMemoryUserStore::new();
        let target = store.insert(user("Some", "some@foo.com")).await.unwrap();
        let other = store.insert(user("Other", "other@foo.com")).await.unwrap();

        let params = UpdateUserParams {
            first_name: Some("Changed".to_string()),
            last_name: None,
        };
        store
            .update(UserFilter::by_id(target.id.unwrap()), params)
            .await
            .unwrap();

        let updated = store.get_by_id(&target.id.unwrap().to_hex()).await.unwrap();
        assert_eq!(updated.first_name, "Changed");
        assert_eq!(updated.last_name, "Foo");
        assert_eq!(updated.password_hash, "hashed_password");

        let untouched = store.get_by_id(&other.id.unwrap().to_hex()).await.unwrap();
        assert_eq!(untouched.first_name, "Other");
    }

    #[tokio::test]
    async fn test_update_without_match_is_ok() {
        let store = InMemoryUserStore::new();
        let params = UpdateUserParams {
            first_name: Some("Changed".to_string()),
            last_name: None,
        };

        let result = store.update(UserFilter::by_id(ObjectId::new()), params).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_absent_is_ok_and_malformed_is_invalid() {
        let store = InMemoryUserStore::new();
        let inserted = store.insert(user("Some", "some@foo.com")).await.unwrap();
        let id = inserted.id.unwrap().to_hex();

        store.delete(&id).await.unwrap();
        assert!(matches!(
            store.get_by_id(&id).await,
            Err(UserError::NotFound(_))
        ));
        assert!(store.delete(&id).await.is_ok());
        assert!(matches!(
            store.delete("zzz").await,
            Err(UserError::InvalidId(_))
        ));
    }

    #[tokio::test]
    async fn test_clear() {
        let store = InMemoryUserStore::new();
        store.insert(user("Some", "some@foo.com")).await.unwrap();

        store.clear().await.unwrap();
        assert!(store.get_all().await.unwrap().is_empty());
    }
}
