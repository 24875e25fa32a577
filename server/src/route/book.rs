use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    BookTransformer, GetBookRequest, GetBooksByAuthorRequest, GetBooksByTitleRequest,
};
use crate::response::{BookPresenter, MessageResponse};
use application::service::GetBookService;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), BookPresenter)
                    .bypass(|| async move { module.handler().get_all_books().await })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/isbn/:isbn",
            get(
                |State(module): State<AppModule>, Path(isbn): Path<String>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(GetBookRequest::new(isbn))
                        .handle(|dto| async move { module.handler().get_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(IntoResponse::into_response).unwrap_or_else(|| {
                                MessageResponse::new(StatusCode::NOT_FOUND, "Book not found")
                                    .into_response()
                            })
                        })
                },
            ),
        )
        .route(
            "/author/:author",
            get(
                |State(module): State<AppModule>, Path(author): Path<String>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(GetBooksByAuthorRequest::new(author))
                        .handle(|dto| async move {
                            module.handler().get_books_by_author(dto).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/title/:title",
            get(
                |State(module): State<AppModule>, Path(title): Path<String>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(GetBooksByTitleRequest::new(title))
                        .handle(|dto| async move {
                            module.handler().get_books_by_title(dto).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}

#[cfg(test)]
mod test {
    use crate::route::test::{module, serve};
    use driver::remote::HttpBookCatalog;
    use httpmock::prelude::*;
    use reqwest::{StatusCode, Url};
    use serde_json::{json, Value};
    use std::time::Duration;

    #[tokio::test]
    async fn lists_and_looks_up_books() -> reqwest::Result<()> {
        let base = serve(module(None)).await;

        let all = reqwest::get(format!("{base}/")).await?.json::<Value>().await?;
        assert_eq!(all["books"].as_array().map(Vec::len), Some(4));

        let found = reqwest::get(format!("{base}/isbn/2")).await?;
        assert_eq!(found.status(), StatusCode::OK);
        let found = found.json::<Value>().await?;
        assert_eq!(found["book"]["title"], "Pride and Prejudice");
        assert_eq!(found["book"]["reviews"], json!([]));

        let missing = reqwest::get(format!("{base}/isbn/404")).await?;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.json::<Value>().await?["message"], "Book not found");
        Ok(())
    }

    #[tokio::test]
    async fn author_and_title_searches_may_be_empty() -> reqwest::Result<()> {
        let base = serve(module(None)).await;

        let austen = reqwest::get(format!("{base}/author/Jane Austen"))
            .await?
            .json::<Value>()
            .await?;
        let isbns = austen["books"]
            .as_array()
            .map(|books| books.iter().map(|book| book["isbn"].clone()).collect::<Vec<_>>());
        assert_eq!(isbns, Some(vec![json!("2"), json!("4")]));

        let none = reqwest::get(format!("{base}/title/Unknown Title")).await?;
        assert_eq!(none.status(), StatusCode::OK);
        assert_eq!(none.json::<Value>().await?, json!({"books": []}));
        Ok(())
    }

    #[tokio::test]
    async fn missing_books_are_fetched_from_remote() -> reqwest::Result<()> {
        let remote = MockServer::start_async().await;
        remote
            .mock_async(|when, then| {
                when.method(GET).path("/books/99");
                then.status(200).json_body(json!({
                    "isbn": "99",
                    "title": "Remote Only",
                    "author": "Someone Else"
                }));
            })
            .await;
        remote
            .mock_async(|when, then| {
                when.method(GET).path_contains("/books/author/");
                then.status(502);
            })
            .await;
        let url = Url::parse(&remote.url("/books")).expect("mock url is valid");
        let catalog = HttpBookCatalog::new(url, Duration::from_secs(5)).expect("client builds");
        let base = serve(module(Some(catalog))).await;

        let found = reqwest::get(format!("{base}/isbn/99"))
            .await?
            .json::<Value>()
            .await?;
        assert_eq!(found["book"]["author"], "Someone Else");

        let failed = reqwest::get(format!("{base}/author/Nobody")).await?;
        assert_eq!(failed.status(), StatusCode::BAD_GATEWAY);
        Ok(())
    }
}
