use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use tracing::instrument;

use crate::{
    dto::{LookupResponse, NslookupParams},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/nslookup", get(lookup_default))
        .route("/nslookup/{resolver}", get(lookup_by_param))
        .route("/nslookup/{resolver}/{domain}", get(lookup_by_path))
}

#[instrument(skip(state))]
async fn lookup_default(
    State(state): State<AppState>,
    Query(params): Query<NslookupParams>,
) -> Result<Json<LookupResponse>, ApiError> {
    let resolver = params
        .resolver
        .as_deref()
        .unwrap_or(state.default_resolver.as_str());
    state.registry.endpoint_for(resolver)?;
    let name = params.require_name()?;
    run_lookup(&state, resolver, name).await
}

#[instrument(skip(state))]
async fn lookup_by_param(
    State(state): State<AppState>,
    Path(resolver): Path<String>,
    Query(params): Query<NslookupParams>,
) -> Result<Json<LookupResponse>, ApiError> {
    state.registry.endpoint_for(&resolver)?;
    let name = params.require_name()?;
    run_lookup(&state, &resolver, name).await
}

#[instrument(skip(state))]
async fn lookup_by_path(
    State(state): State<AppState>,
    Path((resolver, domain)): Path<(String, String)>,
) -> Result<Json<LookupResponse>, ApiError> {
    run_lookup(&state, &resolver, &domain).await
}

async fn run_lookup(
    state: &AppState,
    resolver: &str,
    name: &str,
) -> Result<Json<LookupResponse>, ApiError> {
    let result = state.nslookup.execute(resolver, name).await?;
    Ok(Json(LookupResponse(result)))
}
