use crate::entity::{Book, BookAuthor, BookTitle, Isbn};
use crate::KernelError;

/// An external book catalog consulted when the local one has no answer.
///
/// Implementations only read; nothing they return is written back locally.
#[async_trait::async_trait]
pub trait RemoteBookQuery: 'static + Sync + Send {
    async fn find_by_isbn(&self, isbn: &Isbn) -> error_stack::Result<Option<Book>, KernelError>;
    async fn find_by_author(
        &self,
        author: &BookAuthor,
    ) -> error_stack::Result<Vec<Book>, KernelError>;
    async fn find_by_title(&self, title: &BookTitle)
        -> error_stack::Result<Vec<Book>, KernelError>;
    async fn find_all(&self) -> error_stack::Result<Vec<Book>, KernelError>;
}

pub trait DependOnRemoteBookQuery: 'static + Sync + Send {
    type RemoteBookQuery: RemoteBookQuery;
    /// `None` when no remote catalog is configured.
    fn remote_book_query(&self) -> Option<&Self::RemoteBookQuery>;
}
