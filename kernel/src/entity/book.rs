mod author;
mod isbn;
mod title;

pub use self::{author::*, isbn::*, title::*};
use crate::entity::{Review, ReviewOutcome, Reviews, UserName};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Book {
    isbn: Isbn,
    title: BookTitle,
    author: BookAuthor,
    reviews: Reviews,
}

impl Book {
    pub fn new(isbn: Isbn, title: BookTitle, author: BookAuthor, reviews: Reviews) -> Self {
        Self {
            isbn,
            title,
            author,
            reviews,
        }
    }

    pub fn upsert_review(&mut self, review: Review) -> ReviewOutcome {
        self.reviews.upsert(review)
    }

    pub fn remove_review(&mut self, name: &UserName) -> Option<Review> {
        self.reviews.remove(name)
    }
}
