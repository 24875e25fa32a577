use crate::controller::Exhaust;
use crate::response::MessageResponse;
use axum::http::StatusCode;

pub struct UserPresenter;

impl Exhaust<()> for UserPresenter {
    type To = MessageResponse;
    fn emit(&self, _: ()) -> Self::To {
        MessageResponse::new(StatusCode::CREATED, "User registered")
    }
}
