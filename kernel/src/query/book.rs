use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Book, BookAuthor, BookTitle, Isbn};
use crate::KernelError;

/// Read access to the local book catalog.
///
/// Lookups by author and title are exact and case-sensitive. Every method
/// that returns a sequence keeps catalog insertion order and yields an empty
/// vector rather than an error when nothing matches.
#[async_trait::async_trait]
pub trait BookQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_isbn(
        &self,
        con: &mut Self::Transaction,
        isbn: &Isbn,
    ) -> error_stack::Result<Option<Book>, KernelError>;
    async fn find_by_author(
        &self,
        con: &mut Self::Transaction,
        author: &BookAuthor,
    ) -> error_stack::Result<Vec<Book>, KernelError>;
    async fn find_by_title(
        &self,
        con: &mut Self::Transaction,
        title: &BookTitle,
    ) -> error_stack::Result<Vec<Book>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Book>, KernelError>;
}

pub trait DependOnBookQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookQuery: BookQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn book_query(&self) -> &Self::BookQuery;
}
