use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{RegisterUserRequest, UserTransformer};
use crate::response::UserPresenter;
use application::service::RegisterUserService;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

pub trait UserRouter {
    fn route_user(self) -> Self;
}

impl UserRouter for Router<AppModule> {
    fn route_user(self) -> Self {
        self.route(
            "/register",
            post(
                |State(module): State<AppModule>,
                 req: Option<Json<RegisterUserRequest>>| async move {
                    let req = req.map(|Json(req)| req).unwrap_or_default();
                    Controller::new(UserTransformer, UserPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.handler().register_user(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
