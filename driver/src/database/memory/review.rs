use error_stack::Report;

use kernel::interface::update::ReviewModifier;
use kernel::prelude::entity::{Isbn, Review, ReviewOutcome, UserName};
use kernel::KernelError;

use crate::database::memory::InMemoryTransaction;

pub struct InMemoryReviewRepository;

#[async_trait::async_trait]
impl ReviewModifier for InMemoryReviewRepository {
    type Transaction = InMemoryTransaction;

    #[tracing::instrument(skip(self, con, review), fields(user = %review.name().as_ref()))]
    async fn upsert(
        &self,
        con: &mut InMemoryTransaction,
        isbn: &Isbn,
        review: Review,
    ) -> error_stack::Result<ReviewOutcome, KernelError> {
        let mut state = con.write().await;
        let book = state.book_mut(isbn).ok_or_else(|| book_not_found(isbn))?;
        let outcome = book.upsert_review(review);
        tracing::debug!("Review {outcome:?}");
        Ok(outcome)
    }

    #[tracing::instrument(skip(self, con))]
    async fn delete(
        &self,
        con: &mut InMemoryTransaction,
        isbn: &Isbn,
        name: &UserName,
    ) -> error_stack::Result<Review, KernelError> {
        let mut state = con.write().await;
        let book = state.book_mut(isbn).ok_or_else(|| book_not_found(isbn))?;
        let removed = book.remove_review(name).ok_or_else(|| {
            Report::new(KernelError::NotFound).attach_printable(format!(
                "No review by {} for book {}",
                name.as_ref(),
                isbn.as_ref()
            ))
        })?;
        tracing::debug!("Review deleted");
        Ok(removed)
    }
}

fn book_not_found(isbn: &Isbn) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("Book {} not found", isbn.as_ref()))
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::BookQuery;
    use kernel::interface::update::ReviewModifier;
    use kernel::prelude::entity::{
        Book, BookAuthor, BookTitle, Isbn, Review, ReviewOutcome, ReviewText, Reviews, UserName,
    };
    use kernel::KernelError;

    use crate::database::memory::book::InMemoryBookRepository;
    use crate::database::memory::review::InMemoryReviewRepository;
    use crate::database::memory::{InMemoryDatabase, InMemoryTransaction};

    fn catalog() -> error_stack::Result<InMemoryDatabase, KernelError> {
        InMemoryDatabase::new(vec![Book::new(
            Isbn::new("1"),
            BookTitle::new("Book One"),
            BookAuthor::new("A"),
            Reviews::new(),
        )])
    }

    fn review(name: &str, text: &str) -> Review {
        Review::new(UserName::new(name), ReviewText::new(text))
    }

    async fn reviews_of(
        con: &mut InMemoryTransaction,
        isbn: &str,
    ) -> error_stack::Result<Reviews, KernelError> {
        let book = InMemoryBookRepository
            .find_by_isbn(con, &Isbn::new(isbn))
            .await?
            .expect("book is seeded");
        Ok(book.reviews().clone())
    }

    #[tokio::test]
    async fn upsert_creates_then_updates() -> error_stack::Result<(), KernelError> {
        let db = catalog()?;
        let mut con = db.transact().await?;
        let isbn = Isbn::new("1");

        let outcome = InMemoryReviewRepository
            .upsert(&mut con, &isbn, review("bob", "great read"))
            .await?;
        assert_eq!(outcome, ReviewOutcome::Created);

        let outcome = InMemoryReviewRepository
            .upsert(&mut con, &isbn, review("bob", "second thoughts"))
            .await?;
        assert_eq!(outcome, ReviewOutcome::Updated);

        let reviews = reviews_of(&mut con, "1").await?;
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews.latest(), Some(&review("bob", "second thoughts")));
        Ok(())
    }

    #[tokio::test]
    async fn delete_missing_review_is_not_found() -> error_stack::Result<(), KernelError> {
        let db = catalog()?;
        let mut con = db.transact().await?;
        let isbn = Isbn::new("1");
        InMemoryReviewRepository
            .upsert(&mut con, &isbn, review("ann", "fine"))
            .await?;

        let result = InMemoryReviewRepository
            .delete(&mut con, &isbn, &UserName::new("bob"))
            .await;
        assert_eq!(
            result.map_err(|report| *report.current_context()),
            Err(KernelError::NotFound)
        );
        assert_eq!(reviews_of(&mut con, "1").await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn delete_twice_fails_second_time() -> error_stack::Result<(), KernelError> {
        let db = catalog()?;
        let mut con = db.transact().await?;
        let isbn = Isbn::new("1");
        let bob = UserName::new("bob");
        InMemoryReviewRepository
            .upsert(&mut con, &isbn, review("bob", "great read"))
            .await?;

        let removed = InMemoryReviewRepository.delete(&mut con, &isbn, &bob).await?;
        assert_eq!(removed, review("bob", "great read"));

        let again = InMemoryReviewRepository.delete(&mut con, &isbn, &bob).await;
        assert!(matches!(
            again.map_err(|report| *report.current_context()),
            Err(KernelError::NotFound)
        ));
        assert!(reviews_of(&mut con, "1").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_isbn_is_not_found() -> error_stack::Result<(), KernelError> {
        let db = catalog()?;
        let mut con = db.transact().await?;
        let isbn = Isbn::new("404");

        let upsert = InMemoryReviewRepository
            .upsert(&mut con, &isbn, review("bob", "text"))
            .await;
        assert_eq!(
            upsert.map_err(|report| *report.current_context()),
            Err(KernelError::NotFound)
        );

        let delete = InMemoryReviewRepository
            .delete(&mut con, &isbn, &UserName::new("bob"))
            .await;
        assert!(matches!(
            delete.map_err(|report| *report.current_context()),
            Err(KernelError::NotFound)
        ));
        Ok(())
    }

    #[tokio::test]
    async fn writes_are_visible_through_every_handle() -> error_stack::Result<(), KernelError> {
        let db = catalog()?;
        let shared = db.clone();
        let mut writer = db.transact().await?;
        InMemoryReviewRepository
            .upsert(&mut writer, &Isbn::new("1"), review("bob", "great read"))
            .await?;

        let mut reader = shared.transact().await?;
        assert_eq!(reviews_of(&mut reader, "1").await?.len(), 1);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_upserts_create_once() -> error_stack::Result<(), KernelError> {
        let db = catalog()?;

        let handles = (0..32)
            .map(|attempt| {
                let db = db.clone();
                tokio::spawn(async move {
                    let mut con = db.transact().await?;
                    InMemoryReviewRepository
                        .upsert(
                            &mut con,
                            &Isbn::new("1"),
                            review("bob", &format!("take {attempt}")),
                        )
                        .await
                })
            })
            .collect::<Vec<_>>();

        let mut outcomes = Vec::new();
        for handle in handles {
            outcomes.push(handle.await.expect("upsert task completes")?);
        }
        let created = outcomes
            .iter()
            .filter(|&&outcome| outcome == ReviewOutcome::Created)
            .count();
        assert_eq!(created, 1);
        assert_eq!(outcomes.len(), 32);

        let mut con = db.transact().await?;
        let reviews = reviews_of(&mut con, "1").await?;
        assert_eq!(reviews.len(), 1);
        assert!(reviews.find(&UserName::new("bob")).is_some());
        Ok(())
    }
}
