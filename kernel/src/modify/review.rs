use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Isbn, Review, ReviewOutcome, UserName};
use crate::KernelError;

#[async_trait::async_trait]
pub trait ReviewModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    /// Creates or replaces the review its author holds on the book.
    ///
    /// Fails with [`KernelError::NotFound`] when no book has `isbn`.
    async fn upsert(
        &self,
        con: &mut Self::Transaction,
        isbn: &Isbn,
        review: Review,
    ) -> error_stack::Result<ReviewOutcome, KernelError>;
    /// Fails with [`KernelError::NotFound`] when the book or the user's
    /// review on it does not exist, leaving the catalog untouched.
    async fn delete(
        &self,
        con: &mut Self::Transaction,
        isbn: &Isbn,
        name: &UserName,
    ) -> error_stack::Result<Review, KernelError>;
}

pub trait DependOnReviewModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type ReviewModifier: ReviewModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn review_modifier(&self) -> &Self::ReviewModifier;
}
