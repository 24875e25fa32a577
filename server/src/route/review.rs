use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    AuthenticatedUser, DeleteReviewRequest, GetReviewRequest, ReviewTransformer,
    UpsertReviewQuery, UpsertReviewRequest,
};
use crate::response::ReviewPresenter;
use application::service::{DeleteReviewService, GetReviewService, UpsertReviewService};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::Router;
use axum_extra::TypedHeader;

pub trait ReviewRouter {
    fn route_review(self) -> Self;
}

impl ReviewRouter for Router<AppModule> {
    fn route_review(self) -> Self {
        self.route(
            "/review/:isbn",
            get(
                |State(module): State<AppModule>, Path(isbn): Path<String>| async move {
                    Controller::new(ReviewTransformer, ReviewPresenter)
                        .intake(GetReviewRequest::new(isbn))
                        .handle(|dto| async move { module.handler().get_review(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .put(
                |State(module): State<AppModule>,
                 Path(isbn): Path<String>,
                 user: Option<TypedHeader<AuthenticatedUser>>,
                 Query(query): Query<UpsertReviewQuery>| async move {
                    let user = user.map(|TypedHeader(user)| user);
                    Controller::new(ReviewTransformer, ReviewPresenter)
                        .intake(UpsertReviewRequest::new(isbn, user, query))
                        .handle(|dto| async move { module.handler().upsert_review(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>,
                 Path(isbn): Path<String>,
                 user: Option<TypedHeader<AuthenticatedUser>>| async move {
                    let user = user.map(|TypedHeader(user)| user);
                    Controller::new(ReviewTransformer, ReviewPresenter)
                        .intake(DeleteReviewRequest::new(isbn, user))
                        .handle(|dto| async move { module.handler().delete_review(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/reviews/:isbn",
            get(
                |State(module): State<AppModule>, Path(isbn): Path<String>| async move {
                    Controller::new(ReviewTransformer, ReviewPresenter)
                        .intake(GetReviewRequest::new(isbn))
                        .handle(|dto| async move { module.handler().get_reviews(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
