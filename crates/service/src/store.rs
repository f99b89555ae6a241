//! Persistence gateway.
//!
//! [`Store`] is the explicitly constructed handle to the connection pool that
//! the server injects into its router state. [`Store::begin`] opens a
//! [`Session`], one database transaction scoped to a single request.
//! A session that is dropped without [`Session::commit`] is rolled back by the
//! underlying transaction, so every exit path releases it.

use std::time::Instant;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::debug;

use crate::errors::ServiceError;

#[derive(Clone)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Pool-level access for work that is not tied to a request.
    pub fn connection(&self) -> &DatabaseConnection { &self.db }

    pub async fn begin(&self) -> Result<Session, ServiceError> {
        let txn = self.db.begin().await.map_err(ServiceError::db)?;
        debug!("session opened");
        Ok(Session { txn, opened_at: Instant::now() })
    }

    pub async fn ping(&self) -> Result<(), ServiceError> {
        self.db.ping().await.map_err(ServiceError::db)
    }
}

/// Unit-of-work for one request.
pub struct Session {
    txn: DatabaseTransaction,
    opened_at: Instant,
}

impl Session {
    /// Connection handle for data access inside this unit-of-work.
    pub fn conn(&self) -> &DatabaseTransaction { &self.txn }

    pub async fn commit(self) -> Result<(), ServiceError> {
        let elapsed_ms = self.opened_at.elapsed().as_millis() as u64;
        self.txn.commit().await.map_err(ServiceError::db)?;
        debug!(elapsed_ms, "session committed");
        Ok(())
    }

    pub async fn rollback(self) -> Result<(), ServiceError> {
        let elapsed_ms = self.opened_at.elapsed().as_millis() as u64;
        self.txn.rollback().await.map_err(ServiceError::db)?;
        debug!(elapsed_ms, "session rolled back");
        Ok(())
    }
}
