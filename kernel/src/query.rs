mod book;
mod remote;
mod user;

pub use self::{book::*, remote::*, user::*};
