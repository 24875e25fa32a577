use kernel::prelude::entity::{Book, DestructBook};

use crate::transfer::ReviewDto;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub reviews: Vec<ReviewDto>,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            isbn,
            title,
            author,
            reviews,
        } = value.into_destruct();
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            reviews: reviews.into_iter().map(ReviewDto::from).collect(),
        }
    }
}

pub struct GetBookDto {
    pub isbn: String,
}

pub struct GetBooksByAuthorDto {
    pub author: String,
}

pub struct GetBooksByTitleDto {
    pub title: String,
}
