use driver::config::AppConfig;
use driver::database::{
    InMemoryBookRepository, InMemoryDatabase, InMemoryReviewRepository, InMemoryUserRepository,
};
use driver::remote::HttpBookCatalog;
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::query::{DependOnBookQuery, DependOnRemoteBookQuery, DependOnUserQuery};
use kernel::interface::update::{DependOnReviewModifier, DependOnUserModifier};
use kernel::KernelError;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new(config: &AppConfig) -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init(config).await?)))
    }

    #[cfg(test)]
    pub fn from_parts(database: InMemoryDatabase, remote: Option<HttpBookCatalog>) -> Self {
        Self(Arc::new(Handler { database, remote }))
    }

    pub fn handler(&self) -> &Handler {
        &self.0
    }
}

pub struct Handler {
    database: InMemoryDatabase,
    remote: Option<HttpBookCatalog>,
}

impl Handler {
    pub async fn init(config: &AppConfig) -> error_stack::Result<Self, KernelError> {
        let database = match config.seed_path() {
            Some(path) => {
                tracing::info!("Seeding catalog from {}", path.display());
                InMemoryDatabase::from_seed_file(path).await?
            }
            None => InMemoryDatabase::builtin()?,
        };
        let remote = match config.remote() {
            Some(remote) => {
                tracing::info!("Remote catalog fallback at {}", remote.url());
                Some(HttpBookCatalog::new(remote.url().clone(), *remote.timeout())?)
            }
            None => None,
        };

        Ok(Self { database, remote })
    }
}

impl DependOnDatabaseConnection for Handler {
    type DatabaseConnection = InMemoryDatabase;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        &self.database
    }
}

impl DependOnBookQuery for Handler {
    type BookQuery = InMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &InMemoryBookRepository
    }
}

impl DependOnRemoteBookQuery for Handler {
    type RemoteBookQuery = HttpBookCatalog;
    fn remote_book_query(&self) -> Option<&Self::RemoteBookQuery> {
        self.remote.as_ref()
    }
}

impl DependOnReviewModifier for Handler {
    type ReviewModifier = InMemoryReviewRepository;
    fn review_modifier(&self) -> &Self::ReviewModifier {
        &InMemoryReviewRepository
    }
}

impl DependOnUserQuery for Handler {
    type UserQuery = InMemoryUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &InMemoryUserRepository
    }
}

impl DependOnUserModifier for Handler {
    type UserModifier = InMemoryUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &InMemoryUserRepository
    }
}
