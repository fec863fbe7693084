pub mod account;
pub mod common;
pub mod entry;
pub mod savings;
pub mod signature;
pub mod user;

pub use account::*;
pub use common::*;
pub use entry::*;
pub use savings::*;
pub use signature::*;
pub use user::*;
