use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{
    BookQuery, DependOnBookQuery, DependOnRemoteBookQuery, RemoteBookQuery,
};
use kernel::prelude::entity::{Book, BookAuthor, BookTitle, Isbn};
use kernel::KernelError;

use crate::transfer::{BookDto, GetBookDto, GetBooksByAuthorDto, GetBooksByTitleDto};

// Local misses fall through to the remote catalog when one is configured.
#[async_trait::async_trait]
pub trait GetBookService:
    'static + Sync + Send + DependOnBookQuery + DependOnRemoteBookQuery
{
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let isbn = Isbn::new(dto.isbn);
        let book = match self.book_query().find_by_isbn(&mut connection, &isbn).await? {
            Some(book) => Some(book),
            None => match self.remote_book_query() {
                Some(remote) => {
                    tracing::debug!("isbn {} missing locally, asking remote", isbn.as_ref());
                    remote.find_by_isbn(&isbn).await?
                }
                None => None,
            },
        };

        Ok(book.map(BookDto::from))
    }

    async fn get_all_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let books = self.book_query().find_all(&mut connection).await?;
        let books = match (books.is_empty(), self.remote_book_query()) {
            (true, Some(remote)) => remote.find_all().await?,
            _ => books,
        };

        Ok(into_dtos(books))
    }

    async fn get_books_by_author(
        &self,
        dto: GetBooksByAuthorDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let author = BookAuthor::new(dto.author);
        let books = self
            .book_query()
            .find_by_author(&mut connection, &author)
            .await?;
        let books = match (books.is_empty(), self.remote_book_query()) {
            (true, Some(remote)) => remote.find_by_author(&author).await?,
            _ => books,
        };

        Ok(into_dtos(books))
    }

    async fn get_books_by_title(
        &self,
        dto: GetBooksByTitleDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let title = BookTitle::new(dto.title);
        let books = self
            .book_query()
            .find_by_title(&mut connection, &title)
            .await?;
        let books = match (books.is_empty(), self.remote_book_query()) {
            (true, Some(remote)) => remote.find_by_title(&title).await?,
            _ => books,
        };

        Ok(into_dtos(books))
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery + DependOnRemoteBookQuery {}

fn into_dtos(books: Vec<Book>) -> Vec<BookDto> {
    books.into_iter().map(BookDto::from).collect()
}
