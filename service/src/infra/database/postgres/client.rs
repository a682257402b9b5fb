//! Clients sending statements to lazily acquired [`connection`]s.

use std::{future::Future, sync::Arc};

use tokio::sync::{RwLock, RwLockReadGuard};
use tokio_postgres::{types::ToSql, Row, ToStatement};
use tracerr::Traced;

use crate::infra::database::{
    self,
    postgres::{self, connection, Connection},
};

/// Client running every statement on its own.
///
/// The [`connection::Pooled`] is acquired on the first statement and kept for
/// the next ones.
#[derive(Clone, Debug)]
pub struct NonTx {
    /// [`connection::Pool`] to acquire connections from.
    pub(super) pool: connection::Pool,

    /// Acquired connection, if any.
    pooled: Arc<RwLock<Option<connection::Pooled>>>,
}

impl NonTx {
    /// Creates a new [`NonTx`] client over the provided
    /// [`connection::Pool`].
    pub(super) fn from_pool(pool: connection::Pool) -> Self {
        Self {
            pool,
            pooled: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the acquired [`connection::Pooled`], acquiring it first if
    /// needed.
    async fn connection(
        &self,
    ) -> Result<
        RwLockReadGuard<'_, connection::Pooled>,
        Traced<database::Error>,
    > {
        let pool = &self.pool;
        get_or_init(&self.pooled, || async move {
            pool.get()
                .await
                .map_err(tracerr::from_and_wrap!(=> postgres::Error))
                .map_err(tracerr::map_from)
        })
        .await
    }

    /// Takes the acquired [`connection::Pooled`] out of this [`NonTx`]
    /// client, so that the next statement acquires a fresh one.
    async fn take_connection(&self) -> Option<connection::Pooled> {
        self.pooled.write().await.take()
    }
}

/// Client running every statement inside a single transaction.
///
/// The transaction begins on the first statement, reusing the connection of
/// the [`NonTx`] client it was started from, if that one has any. Dropping
/// all the clones of a [`Tx`] without [`Tx::commit()`] rolls it back.
#[derive(Clone, Debug)]
pub struct Tx {
    /// [`connection::Pool`] to acquire a connection from, if the [`NonTx`]
    /// client has none.
    pool: connection::Pool,

    /// [`NonTx`] client this [`Tx`] was started from, until the transaction
    /// begins.
    origin: Arc<RwLock<Option<NonTx>>>,

    /// Begun transaction, if any.
    tx: Arc<RwLock<Option<connection::Tx>>>,
}

impl Tx {
    /// Starts a new [`Tx`] client from the provided [`NonTx`] one.
    #[must_use]
    pub fn from_non_tx(client: NonTx) -> Self {
        Self {
            pool: client.pool.clone(),
            origin: Arc::new(RwLock::new(Some(client))),
            tx: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the begun [`connection::Tx`], beginning it first if needed.
    async fn connection(
        &self,
    ) -> Result<RwLockReadGuard<'_, connection::Tx>, Traced<database::Error>>
    {
        get_or_init(&self.tx, || async {
            let origin = self.origin.write().await.take();
            let reused = match origin {
                Some(client) => client.take_connection().await,
                None => None,
            };
            let pooled = match reused {
                Some(pooled) => pooled,
                None => self
                    .pool
                    .get()
                    .await
                    .map_err(tracerr::from_and_wrap!(=> postgres::Error))
                    .map_err(tracerr::map_from)?,
            };
            connection::Tx::begin(pooled)
                .await
                .map_err(tracerr::wrap!())
        })
        .await
    }

    /// Commits this [`Tx`] client.
    ///
    /// Does nothing if no statement has been run.
    ///
    /// # Errors
    ///
    /// If `COMMIT` fails.
    pub async fn commit(&self) -> Result<(), Traced<database::Error>> {
        let Some(tx) = self.tx.write().await.take() else {
            return Ok(());
        };
        tx.commit().await.map_err(tracerr::wrap!())
    }
}

/// Returns the value of the provided `slot`, initializing it first with the
/// provided `init` if it's empty.
async fn get_or_init<'s, T, F, Fut>(
    slot: &'s RwLock<Option<T>>,
    init: F,
) -> Result<RwLockReadGuard<'s, T>, Traced<database::Error>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, Traced<database::Error>>>,
{
    let read = slot.read().await;
    let read = if read.is_some() {
        read
    } else {
        drop(read);
        let mut write = slot.write().await;
        if write.is_none() {
            *write = Some(init().await.map_err(tracerr::wrap!())?);
        }
        write.downgrade()
    };
    Ok(RwLockReadGuard::map(read, |v| {
        v.as_ref().expect("initialized before downgrade")
    }))
}

/// Implements [`Connection`] for a client by running each statement on its
/// lazily acquired [`connection`].
macro_rules! impl_connection {
    ($($client:ty),+ $(,)?) => {$(
        impl Connection for $client {
            async fn query<T>(
                &self,
                stmt: &T,
                params: &[&(dyn ToSql + Sync)],
            ) -> Result<Vec<Row>, Traced<database::Error>>
            where
                T: ToStatement + ?Sized,
            {
                self.connection()
                    .await
                    .map_err(tracerr::wrap!())?
                    .query(stmt, params)
                    .await
                    .map_err(tracerr::wrap!())
            }

            async fn query_opt<T>(
                &self,
                stmt: &T,
                params: &[&(dyn ToSql + Sync)],
            ) -> Result<Option<Row>, Traced<database::Error>>
            where
                T: ToStatement + ?Sized,
            {
                self.connection()
                    .await
                    .map_err(tracerr::wrap!())?
                    .query_opt(stmt, params)
                    .await
                    .map_err(tracerr::wrap!())
            }

            async fn exec<T>(
                &self,
                stmt: &T,
                params: &[&(dyn ToSql + Sync)],
            ) -> Result<u64, Traced<database::Error>>
            where
                T: ToStatement + ?Sized,
            {
                self.connection()
                    .await
                    .map_err(tracerr::wrap!())?
                    .exec(stmt, params)
                    .await
                    .map_err(tracerr::wrap!())
            }
        }
    )+};
}

impl_connection!(NonTx, Tx);
