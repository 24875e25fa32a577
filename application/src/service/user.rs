use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnUserQuery, UserQuery};
use kernel::interface::update::{DependOnUserModifier, UserModifier};
use kernel::prelude::entity::{User, UserName, UserPassword};
use kernel::KernelError;

use crate::transfer::RegisterUserDto;

#[async_trait::async_trait]
pub trait RegisterUserService:
    'static + Sync + Send + DependOnUserQuery + DependOnUserModifier
{
    async fn register_user(&self, dto: RegisterUserDto) -> error_stack::Result<(), KernelError> {
        let (name, password) = match (non_empty(dto.username), non_empty(dto.password)) {
            (Some(name), Some(password)) => (UserName::new(name), UserPassword::new(password)),
            _ => {
                return Err(Report::new(KernelError::Validation)
                    .attach_printable("Username and password are required for registration"))
            }
        };

        let mut connection = self.database_connection().transact().await?;

        if self
            .user_query()
            .find_by_name(&mut connection, &name)
            .await?
            .is_some()
        {
            return Err(Report::new(KernelError::Conflict)
                .attach_printable(format!("Username {} already exists", name.as_ref())));
        }

        let user = User::new(name, password);
        self.user_modifier().create(&mut connection, &user).await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<T> RegisterUserService for T where T: DependOnUserQuery + DependOnUserModifier {}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
