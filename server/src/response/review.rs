use crate::controller::Exhaust;
use crate::response::MessageResponse;
use application::transfer::ReviewDto;
use axum::http::StatusCode;
use axum::Json;
use kernel::prelude::entity::ReviewOutcome;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    username: String,
    text: String,
}

impl From<ReviewDto> for ReviewResponse {
    fn from(value: ReviewDto) -> Self {
        Self {
            username: value.username,
            text: value.text,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewBody {
    review: ReviewResponse,
}

#[derive(Debug, Serialize)]
pub struct ReviewsBody {
    reviews: Vec<ReviewResponse>,
}

pub struct ReviewPresenter;

impl Exhaust<ReviewDto> for ReviewPresenter {
    type To = Json<ReviewBody>;
    fn emit(&self, input: ReviewDto) -> Self::To {
        Json(ReviewBody {
            review: ReviewResponse::from(input),
        })
    }
}

impl Exhaust<Vec<ReviewDto>> for ReviewPresenter {
    type To = Json<ReviewsBody>;
    fn emit(&self, input: Vec<ReviewDto>) -> Self::To {
        let reviews = input.into_iter().map(ReviewResponse::from).collect();
        Json(ReviewsBody { reviews })
    }
}

impl Exhaust<ReviewOutcome> for ReviewPresenter {
    type To = MessageResponse;
    fn emit(&self, input: ReviewOutcome) -> Self::To {
        match input {
            ReviewOutcome::Created => MessageResponse::new(StatusCode::CREATED, "Review added"),
            ReviewOutcome::Updated => MessageResponse::new(StatusCode::OK, "Review updated"),
        }
    }
}

impl Exhaust<()> for ReviewPresenter {
    type To = MessageResponse;
    fn emit(&self, _: ()) -> Self::To {
        MessageResponse::new(StatusCode::OK, "Review deleted")
    }
}
