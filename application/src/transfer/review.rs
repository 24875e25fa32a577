use kernel::prelude::entity::{DestructReview, Review};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ReviewDto {
    pub username: String,
    pub text: String,
}

impl From<Review> for ReviewDto {
    fn from(value: Review) -> Self {
        let DestructReview { name, text } = value.into_destruct();
        Self {
            username: name.into(),
            text: text.into(),
        }
    }
}

pub struct GetReviewDto {
    pub isbn: String,
}

/// `username` is the identity established by the caller's authentication
/// step; `None` means the request was not authenticated.
pub struct UpsertReviewDto {
    pub isbn: String,
    pub username: Option<String>,
    pub text: Option<String>,
}

pub struct DeleteReviewDto {
    pub isbn: String,
    pub username: Option<String>,
}
