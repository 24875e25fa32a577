mod name;
mod password;

pub use self::{name::*, password::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Destructure, References)]
pub struct User {
    name: UserName,
    password: UserPassword,
}

impl User {
    pub fn new(name: UserName, password: UserPassword) -> Self {
        Self { name, password }
    }
}
