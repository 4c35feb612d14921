use axum::{extract::State, response::Json, routing::get, Router};

use crate::{dto::ResolverResponse, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/resolvers", get(list_resolvers))
}

async fn list_resolvers(State(state): State<AppState>) -> Json<Vec<ResolverResponse>> {
    Json(state.registry.iter().map(ResolverResponse::from).collect())
}
