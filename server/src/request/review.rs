use crate::controller::Intake;
use crate::request::AuthenticatedUser;
use application::transfer::{DeleteReviewDto, GetReviewDto, UpsertReviewDto};
use serde::Deserialize;

#[derive(Debug)]
pub struct GetReviewRequest {
    isbn: String,
}

impl GetReviewRequest {
    pub fn new(isbn: String) -> Self {
        Self { isbn }
    }
}

/// Query string of `PUT /review/{isbn}`, e.g. `?review=great%20read`.
#[derive(Debug, Deserialize)]
pub struct UpsertReviewQuery {
    review: Option<String>,
}

#[derive(Debug)]
pub struct UpsertReviewRequest {
    isbn: String,
    user: Option<AuthenticatedUser>,
    review: Option<String>,
}

impl UpsertReviewRequest {
    pub fn new(isbn: String, user: Option<AuthenticatedUser>, query: UpsertReviewQuery) -> Self {
        Self {
            isbn,
            user,
            review: query.review,
        }
    }
}

#[derive(Debug)]
pub struct DeleteReviewRequest {
    isbn: String,
    user: Option<AuthenticatedUser>,
}

impl DeleteReviewRequest {
    pub fn new(isbn: String, user: Option<AuthenticatedUser>) -> Self {
        Self { isbn, user }
    }
}

pub struct ReviewTransformer;

impl Intake<GetReviewRequest> for ReviewTransformer {
    type To = GetReviewDto;
    fn emit(&self, input: GetReviewRequest) -> Self::To {
        GetReviewDto { isbn: input.isbn }
    }
}

impl Intake<UpsertReviewRequest> for ReviewTransformer {
    type To = UpsertReviewDto;
    fn emit(&self, input: UpsertReviewRequest) -> Self::To {
        UpsertReviewDto {
            isbn: input.isbn,
            username: input.user.map(AuthenticatedUser::into_name),
            text: input.review,
        }
    }
}

impl Intake<DeleteReviewRequest> for ReviewTransformer {
    type To = DeleteReviewDto;
    fn emit(&self, input: DeleteReviewRequest) -> Self::To {
        DeleteReviewDto {
            isbn: input.isbn,
            username: input.user.map(AuthenticatedUser::into_name),
        }
    }
}
