use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use error_stack::{Report, ResultExt};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::prelude::entity::{Book, Isbn, User, UserName};
use kernel::KernelError;

use crate::error::{ConvertError, DriverError};
use crate::row::BookRow;

pub use self::{book::*, review::*, user::*};

mod book;
mod review;
mod user;

static BUILTIN_SEED: &str = include_str!("memory/books.json");

/// Everything the service knows, owned by a single [`InMemoryDatabase`].
#[derive(Debug, Default)]
struct CatalogState {
    books: Vec<Book>,
    isbn_index: HashMap<Isbn, usize>,
    users: HashMap<UserName, User>,
}

impl CatalogState {
    fn seed(books: impl IntoIterator<Item = Book>) -> error_stack::Result<Self, DriverError> {
        let mut state = Self::default();
        for book in books {
            let isbn = book.isbn().clone();
            if state.isbn_index.contains_key(&isbn) {
                return Err(Report::new(DriverError::Seed)
                    .attach_printable(format!("Duplicate isbn {} in seed", isbn.as_ref())));
            }
            state.isbn_index.insert(isbn, state.books.len());
            state.books.push(book);
        }
        Ok(state)
    }

    fn book(&self, isbn: &Isbn) -> Option<&Book> {
        self.isbn_index.get(isbn).map(|&index| &self.books[index])
    }

    fn book_mut(&mut self, isbn: &Isbn) -> Option<&mut Book> {
        self.isbn_index
            .get(isbn)
            .copied()
            .map(move |index| &mut self.books[index])
    }
}

/// Process-lifetime catalog of books, reviews and registered users.
///
/// Clones share the same state. Reads take a shared lock and every
/// mutation runs its check and its write under one exclusive lock.
#[derive(Clone)]
pub struct InMemoryDatabase {
    state: Arc<RwLock<CatalogState>>,
}

impl InMemoryDatabase {
    pub fn new(books: impl IntoIterator<Item = Book>) -> error_stack::Result<Self, KernelError> {
        let state = CatalogState::seed(books).convert_error()?;
        tracing::debug!("Catalog seeded with {} books", state.books.len());
        Ok(Self {
            state: Arc::new(RwLock::new(state)),
        })
    }

    /// The ten-book catalog bundled with the service.
    pub fn builtin() -> error_stack::Result<Self, KernelError> {
        Self::from_seed_json(BUILTIN_SEED)
    }

    pub async fn from_seed_file(path: &Path) -> error_stack::Result<Self, KernelError> {
        let json = tokio::fs::read_to_string(path)
            .await
            .change_context_lazy(|| DriverError::Seed)
            .attach_printable_lazy(|| format!("Failed to read {}", path.display()))
            .convert_error()?;
        Self::from_seed_json(&json)
    }

    pub fn from_seed_json(json: &str) -> error_stack::Result<Self, KernelError> {
        let rows = serde_json::from_str::<Vec<BookRow>>(json)
            .change_context_lazy(|| DriverError::Seed)
            .convert_error()?;
        Self::new(rows.into_iter().map(Book::from))
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        Ok(InMemoryTransaction(Arc::clone(&self.state)))
    }
}

/// Handle on the shared state; each repository call locks it for the
/// duration of that call only.
pub struct InMemoryTransaction(Arc<RwLock<CatalogState>>);

impl InMemoryTransaction {
    async fn read(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.0.read().await
    }

    async fn write(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.0.write().await
    }
}

#[async_trait::async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}
