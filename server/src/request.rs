mod book;
mod identity;
mod review;
mod user;

pub use self::{book::*, identity::*, review::*, user::*};
