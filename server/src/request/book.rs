use crate::controller::Intake;
use application::transfer::{GetBookDto, GetBooksByAuthorDto, GetBooksByTitleDto};

#[derive(Debug)]
pub struct GetBookRequest {
    isbn: String,
}

impl GetBookRequest {
    pub fn new(isbn: String) -> Self {
        Self { isbn }
    }
}

#[derive(Debug)]
pub struct GetBooksByAuthorRequest {
    author: String,
}

impl GetBooksByAuthorRequest {
    pub fn new(author: String) -> Self {
        Self { author }
    }
}

#[derive(Debug)]
pub struct GetBooksByTitleRequest {
    title: String,
}

impl GetBooksByTitleRequest {
    pub fn new(title: String) -> Self {
        Self { title }
    }
}

pub struct BookTransformer;

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto { isbn: input.isbn }
    }
}

impl Intake<GetBooksByAuthorRequest> for BookTransformer {
    type To = GetBooksByAuthorDto;
    fn emit(&self, input: GetBooksByAuthorRequest) -> Self::To {
        GetBooksByAuthorDto {
            author: input.author,
        }
    }
}

impl Intake<GetBooksByTitleRequest> for BookTransformer {
    type To = GetBooksByTitleDto;
    fn emit(&self, input: GetBooksByTitleRequest) -> Self::To {
        GetBooksByTitleDto { title: input.title }
    }
}
