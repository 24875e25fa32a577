use error_stack::Report;

use kernel::interface::query::UserQuery;
use kernel::interface::update::UserModifier;
use kernel::prelude::entity::{User, UserName};
use kernel::KernelError;

use crate::database::memory::InMemoryTransaction;

pub struct InMemoryUserRepository;

#[async_trait::async_trait]
impl UserQuery for InMemoryUserRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_name(
        &self,
        con: &mut InMemoryTransaction,
        name: &UserName,
    ) -> error_stack::Result<Option<User>, KernelError> {
        Ok(con.read().await.users.get(name).cloned())
    }
}

#[async_trait::async_trait]
impl UserModifier for InMemoryUserRepository {
    type Transaction = InMemoryTransaction;

    #[tracing::instrument(skip_all, fields(user = %user.name().as_ref()))]
    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        let mut state = con.write().await;
        if state.users.contains_key(user.name()) {
            return Err(Report::new(KernelError::Conflict).attach_printable(format!(
                "Username {} already exists",
                user.name().as_ref()
            )));
        }
        state.users.insert(user.name().clone(), user.clone());
        tracing::debug!("User registered");
        Ok(())
    }
}
