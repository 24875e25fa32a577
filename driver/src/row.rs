use serde::Deserialize;

use kernel::prelude::entity::{
    Book, BookAuthor, BookTitle, Isbn, Review, ReviewText, Reviews, UserName,
};

/// Book JSON shared by seed files and the remote catalog.
#[derive(Debug, Deserialize)]
pub(crate) struct BookRow {
    isbn: String,
    title: String,
    author: String,
    #[serde(default)]
    reviews: Vec<ReviewRow>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReviewRow {
    username: String,
    text: String,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        Book::new(
            Isbn::new(value.isbn),
            BookTitle::new(value.title),
            BookAuthor::new(value.author),
            value.reviews.into_iter().map(Review::from).collect::<Reviews>(),
        )
    }
}

impl From<ReviewRow> for Review {
    fn from(value: ReviewRow) -> Self {
        Review::new(UserName::new(value.username), ReviewText::new(value.text))
    }
}
