use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::infrastructure::db::{DbPool, SCHEMA_TABLES};
use crate::presentation::http::error::method_not_allowed;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResp {
    pub status: &'static str,
    /// Schema tables that could not be found.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_tables: Vec<String>,
}

async fn missing_tables(pool: &DbPool) -> anyhow::Result<Vec<String>> {
    let present: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table'")
            .fetch_all(pool)
            .await?;
    Ok(SCHEMA_TABLES
        .iter()
        .filter(|t| !present.iter().any(|p| p.as_str() == **t))
        .map(|t| t.to_string())
        .collect())
}

// `degraded` when the store is unreachable or either table is gone
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses((status = 200, body = HealthResp))
)]
pub async fn health(State(pool): State<DbPool>) -> Json<HealthResp> {
    match missing_tables(&pool).await {
        Ok(missing) if missing.is_empty() => Json(HealthResp {
            status: "ok",
            missing_tables: missing,
        }),
        Ok(missing) => {
            tracing::warn!(?missing, "health_schema_incomplete");
            Json(HealthResp {
                status: "degraded",
                missing_tables: missing,
            })
        }
        Err(e) => {
            tracing::warn!(error = %e, "health_store_unreachable");
            Json(HealthResp {
                status: "degraded",
                missing_tables: Vec::new(),
            })
        }
    }
}

pub fn routes(pool: DbPool) -> Router {
    Router::new()
        .route("/health", get(health).fallback(method_not_allowed))
        .with_state(pool)
}
