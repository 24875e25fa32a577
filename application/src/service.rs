mod book;
mod review;
mod user;

pub use self::{book::*, review::*, user::*};
