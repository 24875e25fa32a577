use crate::handler::AppModule;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod book;
mod review;
mod user;

pub use self::{book::*, review::*, user::*};

pub fn router(app: AppModule) -> Router {
    Router::new()
        .route_book()
        .route_review()
        .route_user()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app)
}
