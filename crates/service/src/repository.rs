//! Generic data access.
//!
//! Company and obligation access differ only in entity shape, so the four
//! operations live once on [`Repository`] and each entity supplies a
//! [`Resource`] describing its table, input shapes and patch merge.
//! Every operation takes any `ConnectionTrait`: a request [`Session`](crate::Session)
//! transaction in the server, or a bare pool connection in tests and tooling.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DeleteMany, EntityTrait, FromQueryResult,
    IntoActiveModel, ModelTrait, Select,
};
use tracing::{debug, instrument};

use crate::errors::ServiceError;

/// Entity shape plugged into [`Repository`].
pub trait Resource: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model>;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Clone
        + Send
        + Sync
        + 'static;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + 'static;
    /// Create input (all required fields).
    type New: Send;
    /// Partial update input (all fields optional).
    type Patch: Send;

    /// Singular name used in logs and not-found messages.
    const NAME: &'static str;

    fn id(model: &Self::Model) -> i32;
    fn find_by_id(id: i32) -> Select<Self::Entity>;
    fn delete_by_id(id: i32) -> DeleteMany<Self::Entity>;
    fn new_active_model(input: Self::New) -> Self::ActiveModel;
    /// Overwrite the columns the patch carries; leave the rest untouched.
    fn apply_patch(patch: Self::Patch, am: &mut Self::ActiveModel);
}

/// Single-row CRUD for one [`Resource`].
pub struct Repository<R: Resource>(PhantomData<R>);

impl<R: Resource> Repository<R> {
    /// Row by id, or `None`. Read-only.
    #[instrument(skip(db), fields(resource = R::NAME))]
    pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<R::Model>, ServiceError> {
        R::find_by_id(id).one(db).await.map_err(ServiceError::db)
    }

    /// Same as [`Repository::get`], but a miss is [`ServiceError::NotFound`].
    pub async fn require<C: ConnectionTrait>(db: &C, id: i32) -> Result<R::Model, ServiceError> {
        Self::get(db, id).await?.ok_or_else(|| ServiceError::not_found(R::NAME, id))
    }

    /// Insert one row; the store assigns the id. Constraint violations
    /// (unique, foreign key) come back as [`ServiceError::Db`].
    #[instrument(skip(db, input), fields(resource = R::NAME))]
    pub async fn create<C: ConnectionTrait>(db: &C, input: R::New) -> Result<R::Model, ServiceError> {
        let am = R::new_active_model(input);
        let created = am.insert(db).await.map_err(ServiceError::db)?;
        debug!(id = R::id(&created), "row inserted");
        Ok(created)
    }

    /// Merge `patch` into the row `id` and return the refreshed row,
    /// or `None` if no row has that id.
    #[instrument(skip(db, patch), fields(resource = R::NAME))]
    pub async fn update<C: ConnectionTrait>(db: &C, id: i32, patch: R::Patch) -> Result<Option<R::Model>, ServiceError> {
        let Some(existing) = Self::get(db, id).await? else { return Ok(None) };
        let mut am: R::ActiveModel = existing.clone().into_active_model();
        R::apply_patch(patch, &mut am);
        if !am.is_changed() {
            debug!(id, "empty patch, nothing to write");
            return Ok(Some(existing));
        }
        let updated = am.update(db).await.map_err(ServiceError::db)?;
        Ok(Some(updated))
    }

    /// Remove the row `id`; returns the number of rows removed (0 or 1).
    #[instrument(skip(db), fields(resource = R::NAME))]
    pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<u64, ServiceError> {
        let res = R::delete_by_id(id).exec(db).await.map_err(ServiceError::db)?;
        Ok(res.rows_affected)
    }
}
