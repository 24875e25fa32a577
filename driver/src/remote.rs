use std::time::Duration;

use error_stack::Report;
use reqwest::{Client, StatusCode, Url};

use kernel::interface::query::RemoteBookQuery;
use kernel::prelude::entity::{Book, BookAuthor, BookTitle, Isbn};
use kernel::KernelError;

use crate::error::ConvertError;
use crate::row::BookRow;

/// Client for a books API laid out as
/// `{base}`, `{base}/{isbn}`, `{base}/author/{author}` and `{base}/title/{title}`.
///
/// A `404` means "nothing there". Any other failure, including a request
/// that outlives the configured timeout, is reported as an error.
#[derive(Debug, Clone)]
pub struct HttpBookCatalog {
    client: Client,
    base: Url,
}

impl HttpBookCatalog {
    pub fn new(base: Url, timeout: Duration) -> error_stack::Result<Self, KernelError> {
        if base.cannot_be_a_base() {
            return Err(Report::new(KernelError::Internal)
                .attach_printable(format!("{base} cannot be used as a base url")));
        }
        let client = Client::builder().timeout(timeout).build().convert_error()?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // cannot_be_a_base was ruled out in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    #[tracing::instrument(skip(self, url), fields(url = %url))]
    async fn fetch_books(&self, url: Url) -> error_stack::Result<Vec<Book>, KernelError> {
        let response = self.client.get(url).send().await.convert_error()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        let rows = response
            .error_for_status()
            .convert_error()?
            .json::<Vec<BookRow>>()
            .await
            .convert_error()?;
        tracing::debug!("Remote catalog returned {} books", rows.len());
        Ok(rows.into_iter().map(Book::from).collect())
    }
}

#[async_trait::async_trait]
impl RemoteBookQuery for HttpBookCatalog {
    #[tracing::instrument(skip(self))]
    async fn find_by_isbn(&self, isbn: &Isbn) -> error_stack::Result<Option<Book>, KernelError> {
        let url = self.endpoint(&[isbn.as_ref().as_str()]);
        let response = self.client.get(url).send().await.convert_error()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let row = response
            .error_for_status()
            .convert_error()?
            .json::<BookRow>()
            .await
            .convert_error()?;
        Ok(Some(Book::from(row)))
    }

    async fn find_by_author(
        &self,
        author: &BookAuthor,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        self.fetch_books(self.endpoint(&["author", author.as_ref().as_str()]))
            .await
    }

    async fn find_by_title(
        &self,
        title: &BookTitle,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        self.fetch_books(self.endpoint(&["title", title.as_ref().as_str()]))
            .await
    }

    async fn find_all(&self) -> error_stack::Result<Vec<Book>, KernelError> {
        self.fetch_books(self.endpoint(&[])).await
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use httpmock::prelude::*;
    use reqwest::Url;
    use serde_json::json;

    use kernel::interface::query::RemoteBookQuery;
    use kernel::prelude::entity::{BookAuthor, BookTitle, Isbn};
    use kernel::KernelError;

    use crate::remote::HttpBookCatalog;

    fn catalog(server: &MockServer, timeout: Duration) -> HttpBookCatalog {
        let base = Url::parse(&server.url("/books")).expect("mock url is valid");
        HttpBookCatalog::new(base, timeout).expect("client builds")
    }

    #[tokio::test]
    async fn find_by_isbn_reads_book_and_maps_404() -> error_stack::Result<(), KernelError> {
        let server = MockServer::start_async().await;
        let found = server
            .mock_async(|when, then| {
                when.method(GET).path("/books/1");
                then.status(200).json_body(json!({
                    "isbn": "1",
                    "title": "Things Fall Apart",
                    "author": "Chinua Achebe",
                    "reviews": [{"username": "bob", "text": "great read"}]
                }));
            })
            .await;
        let missing = server
            .mock_async(|when, then| {
                when.method(GET).path("/books/2");
                then.status(404);
            })
            .await;
        let catalog = catalog(&server, Duration::from_secs(5));

        let book = catalog
            .find_by_isbn(&Isbn::new("1"))
            .await?
            .expect("remote has isbn 1");
        assert_eq!(book.author(), &BookAuthor::new("Chinua Achebe"));
        assert_eq!(book.reviews().len(), 1);
        assert!(catalog.find_by_isbn(&Isbn::new("2")).await?.is_none());

        found.assert_async().await;
        missing.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn author_and_title_lookups() -> error_stack::Result<(), KernelError> {
        let server = MockServer::start_async().await;
        let by_author = server
            .mock_async(|when, then| {
                when.method(GET).path_contains("/books/author/Jane");
                then.status(200).json_body(json!([
                    {"isbn": "8", "title": "Pride and Prejudice", "author": "Jane Austen"}
                ]));
            })
            .await;
        let by_title = server
            .mock_async(|when, then| {
                when.method(GET).path("/books/title/Emma");
                then.status(404);
            })
            .await;
        let catalog = catalog(&server, Duration::from_secs(5));

        let books = catalog
            .find_by_author(&BookAuthor::new("Jane Austen"))
            .await?;
        assert_eq!(books.len(), 1);
        assert!(books[0].reviews().is_empty());
        assert!(catalog
            .find_by_title(&BookTitle::new("Emma"))
            .await?
            .is_empty());

        by_author.assert_async().await;
        by_title.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn server_errors_are_upstream_failures() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/books");
                then.status(500);
            })
            .await;
        let catalog = catalog(&server, Duration::from_secs(5));

        let result = catalog.find_all().await;
        assert_eq!(
            result.map(|books| books.len()).map_err(|report| *report.current_context()),
            Err(KernelError::Upstream)
        );
    }

    #[tokio::test]
    async fn slow_remote_is_an_upstream_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/books");
                then.status(200)
                    .delay(Duration::from_millis(500))
                    .json_body(json!([]));
            })
            .await;
        let catalog = catalog(&server, Duration::from_millis(50));

        let report = catalog
            .find_all()
            .await
            .expect_err("request outlives the client timeout");
        assert_eq!(*report.current_context(), KernelError::Upstream);
        assert!(report
            .frames()
            .any(|frame| frame.downcast_ref::<&'static str>() == Some(&"Remote catalog timed out")));
    }
}
