//! User Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUserParams, UpdateUserParams, User, UserFilter, UserResponse, parse_object_id};
use crate::repository::UserStore;

/// User service providing business logic operations
///
/// Validates input, hashes passwords and maps stored users to responses.
pub struct UserService<S: UserStore> {
    store: Arc<S>,
}

impl<S: UserStore + 'static> UserService<S> {
    /// Create a new UserService with the given store
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Validate, hash the password and persist a new user
    #[instrument(skip(self, params))]
    pub async fn create_user(&self, params: CreateUserParams) -> UserResult<UserResponse> {
        params.validate()?;

        // bcrypt at cost 12 would stall the async workers
        let user = tokio::task::spawn_blocking(move || User::from_params(params))
            .await
            .map_err(|e| UserError::Internal(format!("password hashing task failed: {e}")))??;

        let user = self.store.insert(user).await?;
        Ok(user.into())
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> UserResult<UserResponse> {
        let user = self.store.get_by_id(id).await?;
        Ok(user.into())
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<UserResponse>> {
        let users = self.store.get_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Apply a partial update, then return the stored result
    ///
    /// The write and the re-read are separate store calls, so a concurrent
    /// writer may land between them.
    #[instrument(skip(self, params))]
    pub async fn update_user(
        &self,
        id: &str,
        params: UpdateUserParams,
    ) -> UserResult<UserResponse> {
        params.validate()?;
        let oid = parse_object_id(id)?;

        self.store.update(UserFilter::by_id(oid), params).await?;
        self.get_user(id).await
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: &str) -> UserResult<()> {
        self.store.delete(id).await
    }
}
