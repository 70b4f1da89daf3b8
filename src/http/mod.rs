//! HTTP transport - maps the weapon routes onto repository operations.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `POST /weapons` - add a record, responds `{"id": n}`.
//! - `PUT /weapons/:id` / `DELETE /weapons/:id` / `GET /weapons/:id`
//! - `GET /weapons/all` and `GET /weapons/all/:type`
//! - `GET /weapons/stats` and `GET /weapons/reports/:type`
//! - `PUT /weapons/retire` - body `{"id": n, "retired_date": "YYYY-MM-DD"}`.
//! - `GET /health` - `{"ok": true}`.
//!
//! Failures respond `{"error": "..."}`: 400 for invalid input on creation,
//! 404 for everything else.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use weapon_warehouse::{http, SqliteWeaponStore, WeaponRepository};
//!
//! let repository = Arc::new(WeaponRepository::new(SqliteWeaponStore::open("weapons.sqlite")?));
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(repository.clone());
//!
//! // Or serve directly
//! http::serve(repository, "127.0.0.1:5000".parse()?).await?;
//! ```

mod error;
mod handlers;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;

use crate::repository::WeaponRepository;
use crate::store::WeaponStore;

pub use error::ApiError;

/// Build an axum `Router` serving the weapon routes from `repository`.
pub fn router<S: WeaponStore + 'static>(repository: Arc<WeaponRepository<S>>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/weapons", post(handlers::add_weapon::<S>))
        .route("/weapons/all", get(handlers::all_weapons::<S>))
        .route("/weapons/all/:kind", get(handlers::weapons_by_type::<S>))
        .route("/weapons/stats", get(handlers::weapon_stats::<S>))
        .route("/weapons/reports/:kind", get(handlers::weapons_report::<S>))
        .route("/weapons/retire", put(handlers::retire_weapon::<S>))
        .route(
            "/weapons/:id",
            get(handlers::get_weapon::<S>)
                .put(handlers::update_weapon::<S>)
                .delete(handlers::delete_weapon::<S>),
        )
        .with_state(repository)
}

/// Serve until the process is killed.
pub async fn serve<S: WeaponStore + 'static>(
    repository: Arc<WeaponRepository<S>>,
    addr: SocketAddr,
) -> Result<(), std::io::Error> {
    serve_with_shutdown(repository, addr, std::future::pending()).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn serve_with_shutdown<S, F>(
    repository: Arc<WeaponRepository<S>>,
    addr: SocketAddr,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    S: WeaponStore + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "weapon warehouse listening");
    axum::serve(listener, router(repository))
        .with_graceful_shutdown(shutdown)
        .await?;
    tracing::info!("weapon warehouse stopped");
    Ok(())
}
