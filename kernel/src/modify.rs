mod review;
mod user;

pub use self::{review::*, user::*};
