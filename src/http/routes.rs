//! Rutas de la API de parámetros.
//!
//! - `GET /api/parameters?job=<fullName>&params=<a:1,b:[x,y]>`
//! - `GET /api/parameters/:name?job=...&params=...`
//! - `GET /health`
use axum::extract::{Path, Query, State};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use param_core::{CurrentValues, RenderedJobParameters, RenderedParameter};
use serde::{Deserialize, Serialize};
use tracing::Instrument;
use uuid::Uuid;

use crate::app::AppState;
use crate::catalog::CatalogJob;
use crate::errors::ApiError;
use crate::http::envelope::Envelope;
use crate::http::query::parse_params;

#[derive(Debug, Default, Deserialize)]
pub struct ParametersQuery {
    pub job: Option<String>,
    pub params: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/api/parameters", get(get_parameters))
                 .route("/api/parameters/:name", get(get_parameter))
                 .route("/health", get(health))
                 .with_state(state)
}

/// GET /health
async fn health() -> Json<Envelope<HealthStatus>> {
    Json(Envelope::ok(HealthStatus { status: "ok" }))
}

/// GET /api/parameters
async fn get_parameters(State(state): State<AppState>,
                        Query(query): Query<ParametersQuery>)
                        -> Result<Json<Envelope<RenderedJobParameters>>, ApiError> {
    let span = tracing::info_span!("get_parameters", request_id = %Uuid::new_v4(), job = query.job.as_deref());
    async move {
        let (job, values) = resolve_job(&state, &query).await?;
        let renderer = state.renderer.clone();
        let rendered = tokio::task::spawn_blocking(move || renderer.render(&job.definition, &values))
            .await
            .map_err(|e| ApiError::Internal(format!("render task failed: {e}")))?;
        tracing::info!(parameters = rendered.parameters.len(), "rendered");
        Ok(Json(Envelope::ok(rendered)))
    }.instrument(span)
     .await
}

/// GET /api/parameters/:name
async fn get_parameter(State(state): State<AppState>,
                       Path(name): Path<String>,
                       Query(query): Query<ParametersQuery>)
                       -> Result<Json<Envelope<RenderedParameter>>, ApiError> {
    let span = tracing::info_span!("get_parameter",
                                   request_id = %Uuid::new_v4(),
                                   job = query.job.as_deref(),
                                   parameter = %name);
    async move {
        let (job, values) = resolve_job(&state, &query).await?;
        let renderer = state.renderer.clone();
        let job_name = job.definition.context.full_name.clone();
        let lookup = name.clone();
        let rendered = tokio::task::spawn_blocking(move || renderer.render_one(&job.definition, &lookup, &values))
            .await
            .map_err(|e| ApiError::Internal(format!("render task failed: {e}")))?;
        rendered.map(|p| Json(Envelope::ok(p)))
                .ok_or(ApiError::ParameterNotFound { job: job_name, parameter: name })
    }.instrument(span)
     .await
}

/// Valida `job`, lo busca en el store y aplica la política de lectura.
async fn resolve_job(state: &AppState, query: &ParametersQuery) -> Result<(CatalogJob, CurrentValues), ApiError> {
    let full_name = query.job.as_deref().map(str::trim).unwrap_or_default();
    if full_name.is_empty() {
        return Err(ApiError::MissingJob);
    }
    if full_name.split('/').any(str::is_empty) {
        return Err(ApiError::InvalidJob(full_name.to_string()));
    }
    let job = state.store
                   .find(full_name)
                   .await?
                   .ok_or_else(|| ApiError::NotFound(full_name.to_string()))?;
    if !state.access.can_read(&job) {
        return Err(ApiError::Forbidden(full_name.to_string()));
    }
    let values = query.params.as_deref().map(parse_params).unwrap_or_default();
    tracing::debug!(values = values.len(), "job resolved");
    Ok((job, values))
}
