use crate::handlers;
use crate::state::AppState;
use axum::Router;

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .merge(handlers::health::routes())
        .merge(handlers::resolvers::routes())
        .merge(handlers::dns_query::routes())
        .merge(handlers::nslookup::routes())
        .with_state(state)
}
