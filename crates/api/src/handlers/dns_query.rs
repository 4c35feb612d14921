use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use dohgate_domain::CanonicalAnswer;
use tracing::instrument;

use crate::{dto::DnsQueryParams, errors::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dns-query/{resolver}", get(query_by_param))
        .route("/dns-query/{resolver}/{domain}", get(query_by_path))
}

#[instrument(skip(state))]
async fn query_by_param(
    State(state): State<AppState>,
    Path(resolver): Path<String>,
    Query(params): Query<DnsQueryParams>,
) -> Result<Json<CanonicalAnswer>, ApiError> {
    run_query(&state, &resolver, params, None).await
}

#[instrument(skip(state))]
async fn query_by_path(
    State(state): State<AppState>,
    Path((resolver, domain)): Path<(String, String)>,
    Query(params): Query<DnsQueryParams>,
) -> Result<Json<CanonicalAnswer>, ApiError> {
    run_query(&state, &resolver, params, Some(domain)).await
}

async fn run_query(
    state: &AppState,
    resolver: &str,
    params: DnsQueryParams,
    path_name: Option<String>,
) -> Result<Json<CanonicalAnswer>, ApiError> {
    // Unknown resolvers are a 404 even when the query itself is also bad.
    state.registry.endpoint_for(resolver)?;
    let spec = params.into_spec(path_name)?;
    let answer = state.query_doh.execute(resolver, &spec).await?;
    Ok(Json(answer))
}
