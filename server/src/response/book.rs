use crate::controller::Exhaust;
use crate::response::ReviewResponse;
use application::transfer::BookDto;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BookResponse {
    isbn: String,
    title: String,
    author: String,
    reviews: Vec<ReviewResponse>,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        Self {
            isbn: value.isbn,
            title: value.title,
            author: value.author,
            reviews: value
                .reviews
                .into_iter()
                .map(ReviewResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookBody {
    book: BookResponse,
}

#[derive(Debug, Serialize)]
pub struct BooksBody {
    books: Vec<BookResponse>,
}

pub struct BookPresenter;

impl Exhaust<Option<BookDto>> for BookPresenter {
    type To = Option<Json<BookBody>>;
    fn emit(&self, input: Option<BookDto>) -> Self::To {
        input.map(|book| {
            Json(BookBody {
                book: BookResponse::from(book),
            })
        })
    }
}

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = Json<BooksBody>;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        let books = input.into_iter().map(BookResponse::from).collect();
        Json(BooksBody { books })
    }
}
