//! Router assembly.
//!
//! Public routes (signup, login, random quiz, health) are registered
//! directly; everything else sits behind the JWT middleware layer.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{auth, health, journal, mood, quiz, report},
    middleware::auth::jwt_auth_middleware,
    state::AppState,
};

/// Builds the application router with all routes and global middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/quiz", get(quiz::random_quiz))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/journal",
            post(journal::create_entry).get(journal::list_entries),
        )
        .route(
            "/journal/{id}",
            get(journal::list_entries_for_user).delete(journal::delete_entry),
        )
        .route("/quiz/submit", post(quiz::submit_quiz))
        .route("/quiz/history", get(quiz::quiz_history))
        .route("/quiz/{user_id}", get(quiz::results_for_user))
        .route("/mood", post(mood::create_entry))
        .route("/mood/{user_id}", get(mood::list_entries_for_user))
        .route("/api/generate-analysis", get(report::generate_analysis))
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}
