//! MongoDB implementation of UserStore

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc},
};
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{UpdateUserParams, User, UserFilter, parse_object_id};
use crate::repository::UserStore;

/// Collection holding user documents
pub const USER_COLLECTION: &str = "users";

/// MongoDB implementation of the UserStore
pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    /// Create a new MongoUserStore over the `users` collection of `db`
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let store = MongoUserStore::new(client.database("hotel"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, USER_COLLECTION)
    }

    /// Create a new MongoUserStore with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<User>(collection_name);
        Self { collection }
    }

    /// Build a MongoDB filter document from UserFilter
    fn build_filter(filter: &UserFilter) -> Document {
        let mut doc = doc! {};

        if let Some(id) = filter.id {
            doc.insert("_id", id);
        }

        if let Some(ref email) = filter.email {
            doc.insert("email", email);
        }

        doc
    }

    /// Build the `$set` body; absent fields are left out
    fn build_update(params: &UpdateUserParams) -> Document {
        let mut set = doc! {};

        if let Some(ref first_name) = params.first_name {
            set.insert("first_name", first_name);
        }

        if let Some(ref last_name) = params.last_name {
            set.insert("last_name", last_name);
        }

        doc! { "$set": set }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    #[instrument(skip(self, user))]
    async fn insert(&self, mut user: User) -> UserResult<User> {
        let result = self.collection.insert_one(&user).await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            UserError::Database(format!(
                "unexpected inserted id: {}",
                result.inserted_id
            ))
        })?;
        user.id = Some(id);

        tracing::info!(user_id = %id, "User inserted");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> UserResult<User> {
        let oid = parse_object_id(id)?;
        self.collection
            .find_one(doc! { "_id": oid })
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> UserResult<Vec<User>> {
        let cursor = self.collection.find(doc! {}).await?;
        let users: Vec<User> = cursor.try_collect().await?;
        Ok(users)
    }

    #[instrument(skip(self, params))]
    async fn update(&self, filter: UserFilter, params: UpdateUserParams) -> UserResult<()> {
        if params.is_empty() {
            tracing::debug!("Empty update, nothing to write");
            return Ok(());
        }

        let result = self
            .collection
            .update_one(Self::build_filter(&filter), Self::build_update(&params))
            .await?;

        tracing::info!(matched = result.matched_count, "User update applied");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> UserResult<()> {
        let oid = parse_object_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;

        tracing::info!(user_id = %oid, deleted = result.deleted_count, "User delete applied");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> UserResult<()> {
        tracing::warn!(collection = %self.collection.name(), "Dropping user collection");
        self.collection.drop().await?;
        Ok(())
    }
}
