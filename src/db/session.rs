//! Pooled database session
//!
//! One `Session` is created at startup and lives for the whole process.
//! It owns a bounded connection pool so a long-running ad-hoc query does
//! not block catalog navigation issued on another connection, plus the
//! immutable preview row limit.

use crate::config::{ConnectionConfig, SslMode};
use crate::error::{DbError, DbResult};
use deadpool_postgres::{Manager, ManagerConfig, Object, Pool};
use tokio_postgres::{CancelToken, NoTls};
use tokio_postgres_rustls::MakeRustlsConnect;

/// Upper bound on concurrent connections
const POOL_SIZE: usize = 5;

pub struct Session {
    pool: Pool,
    /// Needed again when cancelling over the right transport
    ssl_mode: SslMode,
    preview_limit: usize,
}

impl Session {
    /// Connect to the database and verify it is reachable.
    ///
    /// An unreachable database here is fatal to the process; the caller
    /// propagates the error out of `main`.
    pub async fn connect(config: &ConnectionConfig, preview_limit: usize) -> DbResult<Self> {
        let pg_config: tokio_postgres::Config = config
            .connection_string_with_password()
            .parse()
            .map_err(|e: tokio_postgres::Error| DbError::ConnectionFailed(e.to_string()))?;

        let manager = match config.ssl_mode {
            SslMode::Disable => {
                Manager::from_config(pg_config, NoTls, ManagerConfig::default())
            }
            SslMode::Prefer | SslMode::Require => {
                let tls = MakeRustlsConnect::new(make_tls_config());
                Manager::from_config(pg_config, tls, ManagerConfig::default())
            }
        };

        let pool = Pool::builder(manager)
            .max_size(POOL_SIZE)
            .build()
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        // Fail fast: check out a connection and round-trip it once.
        let client = pool
            .get()
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;
        client
            .simple_query("SELECT 1")
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            pool,
            ssl_mode: config.ssl_mode,
            preview_limit,
        })
    }

    /// Check out a connection from the pool.
    pub(crate) async fn checkout(&self) -> DbResult<Object> {
        self.pool
            .get()
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))
    }

    /// Configured preview row limit (immutable after construction)
    pub fn preview_limit(&self) -> usize {
        self.preview_limit
    }

    /// Best-effort server-side cancellation of an in-flight query.
    ///
    /// Fired when a deadline expires: the client future is already
    /// dropped, this just asks the server to stop burning cycles. Errors
    /// are ignored.
    pub(crate) fn spawn_cancel(&self, token: CancelToken) {
        match self.ssl_mode {
            SslMode::Disable => {
                tokio::spawn(async move {
                    let _ = token.cancel_query(NoTls).await;
                });
            }
            SslMode::Prefer | SslMode::Require => {
                tokio::spawn(async move {
                    let tls = MakeRustlsConnect::new(make_tls_config());
                    let _ = token.cancel_query(tls).await;
                });
            }
        }
    }
}

/// Build a rustls ClientConfig that trusts OS certificates (with Mozilla
/// roots as fallback)
fn make_tls_config() -> rustls::ClientConfig {
    let mut root_store = rustls::RootCertStore::empty();

    let native_certs = rustls_native_certs::load_native_certs();
    let mut loaded = 0;
    for cert in native_certs.certs {
        if root_store.add(cert).is_ok() {
            loaded += 1;
        }
    }
    if loaded == 0 {
        root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
    }

    rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth()
}
