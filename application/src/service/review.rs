use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{DependOnReviewModifier, ReviewModifier};
use kernel::prelude::entity::{Book, Isbn, Review, ReviewOutcome, ReviewText, UserName};
use kernel::KernelError;

use crate::transfer::{DeleteReviewDto, GetReviewDto, ReviewDto, UpsertReviewDto};

#[async_trait::async_trait]
pub trait GetReviewService: 'static + Sync + Send + DependOnBookQuery {
    /// The representative review of a book: the most recently created one
    /// still present.
    async fn get_review(&self, dto: GetReviewDto) -> error_stack::Result<ReviewDto, KernelError> {
        let book = find_book(self, dto.isbn).await?;
        book.reviews()
            .latest()
            .cloned()
            .map(ReviewDto::from)
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable(format!(
                    "Book {} has no reviews",
                    book.isbn().as_ref()
                ))
            })
    }

    async fn get_reviews(
        &self,
        dto: GetReviewDto,
    ) -> error_stack::Result<Vec<ReviewDto>, KernelError> {
        let book = find_book(self, dto.isbn).await?;
        Ok(book
            .reviews()
            .iter()
            .cloned()
            .map(ReviewDto::from)
            .collect())
    }
}

impl<T> GetReviewService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait UpsertReviewService: 'static + Sync + Send + DependOnReviewModifier {
    async fn upsert_review(
        &self,
        dto: UpsertReviewDto,
    ) -> error_stack::Result<ReviewOutcome, KernelError> {
        let name = authenticated(dto.username)?;
        let text = dto
            .text
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                Report::new(KernelError::Validation).attach_printable("Review text is required")
            })?;

        let mut connection = self.database_connection().transact().await?;

        let isbn = Isbn::new(dto.isbn);
        let review = Review::new(name, ReviewText::new(text));
        let outcome = self
            .review_modifier()
            .upsert(&mut connection, &isbn, review)
            .await?;
        connection.commit().await?;

        Ok(outcome)
    }
}

impl<T> UpsertReviewService for T where T: DependOnReviewModifier {}

#[async_trait::async_trait]
pub trait DeleteReviewService: 'static + Sync + Send + DependOnReviewModifier {
    async fn delete_review(&self, dto: DeleteReviewDto) -> error_stack::Result<(), KernelError> {
        let name = authenticated(dto.username)?;

        let mut connection = self.database_connection().transact().await?;

        let isbn = Isbn::new(dto.isbn);
        self.review_modifier()
            .delete(&mut connection, &isbn, &name)
            .await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<T> DeleteReviewService for T where T: DependOnReviewModifier {}

async fn find_book<T>(module: &T, isbn: String) -> error_stack::Result<Book, KernelError>
where
    T: DependOnBookQuery + ?Sized,
{
    let mut connection = module.database_connection().transact().await?;

    let isbn = Isbn::new(isbn);
    module
        .book_query()
        .find_by_isbn(&mut connection, &isbn)
        .await?
        .ok_or_else(|| {
            Report::new(KernelError::NotFound)
                .attach_printable(format!("Book {} not found", isbn.as_ref()))
        })
}

fn authenticated(username: Option<String>) -> error_stack::Result<UserName, KernelError> {
    username
        .filter(|name| !name.is_empty())
        .map(UserName::new)
        .ok_or_else(|| {
            Report::new(KernelError::Unauthorized).attach_printable("User is not logged in")
        })
}
