use kernel::interface::query::BookQuery;
use kernel::prelude::entity::{Book, BookAuthor, BookTitle, Isbn};
use kernel::KernelError;

use crate::database::memory::InMemoryTransaction;

pub struct InMemoryBookRepository;

#[async_trait::async_trait]
impl BookQuery for InMemoryBookRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_isbn(
        &self,
        con: &mut InMemoryTransaction,
        isbn: &Isbn,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(con.read().await.book(isbn).cloned())
    }

    async fn find_by_author(
        &self,
        con: &mut InMemoryTransaction,
        author: &BookAuthor,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        InMemoryBookInternal::filter(con, |book| book.author() == author).await
    }

    async fn find_by_title(
        &self,
        con: &mut InMemoryTransaction,
        title: &BookTitle,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        InMemoryBookInternal::filter(con, |book| book.title() == title).await
    }

    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        InMemoryBookInternal::filter(con, |_| true).await
    }
}

struct InMemoryBookInternal;

impl InMemoryBookInternal {
    async fn filter<F>(
        con: &InMemoryTransaction,
        predicate: F,
    ) -> error_stack::Result<Vec<Book>, KernelError>
    where
        F: Fn(&Book) -> bool + Send,
    {
        let state = con.read().await;
        Ok(state
            .books
            .iter()
            .filter(|&book| predicate(book))
            .cloned()
            .collect())
    }
}
