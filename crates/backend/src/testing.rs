//! In-memory repositories standing in for Postgres in unit tests.

use crate::abstract_trait::listing::ListingRepositoryTrait;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::{
    marker::PhantomData,
    sync::atomic::{AtomicBool, Ordering},
};

pub struct StaticRepository<M> {
    rows: Vec<M>,
}

impl<M> StaticRepository<M> {
    pub fn new(rows: Vec<M>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl<M: Clone + Send + Sync + 'static> ListingRepositoryTrait<M> for StaticRepository<M> {
    async fn find_all(&self) -> Result<Vec<M>, RepositoryError> {
        Ok(self.rows.clone())
    }
}

pub struct FailingRepository<M> {
    message: String,
    _record: PhantomData<fn() -> M>,
}

impl<M> FailingRepository<M> {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<M: Send + 'static> ListingRepositoryTrait<M> for FailingRepository<M> {
    async fn find_all(&self) -> Result<Vec<M>, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx::Error::Protocol(
            self.message.clone(),
        )))
    }
}

/// Serves `rows` unless the connection has been marked as dropped.
pub struct DroppableRepository<M> {
    rows: Vec<M>,
    dropped: AtomicBool,
}

impl<M> DroppableRepository<M> {
    pub fn new(rows: Vec<M>) -> Self {
        Self {
            rows,
            dropped: AtomicBool::new(false),
        }
    }

    pub fn set_dropped(&self, dropped: bool) {
        self.dropped.store(dropped, Ordering::SeqCst);
    }
}

#[async_trait]
impl<M: Clone + Send + Sync + 'static> ListingRepositoryTrait<M> for DroppableRepository<M> {
    async fn find_all(&self) -> Result<Vec<M>, RepositoryError> {
        if self.dropped.load(Ordering::SeqCst) {
            return Err(RepositoryError::Sqlx(sqlx::Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "connection reset by peer",
            ))));
        }
        Ok(self.rows.clone())
    }
}
