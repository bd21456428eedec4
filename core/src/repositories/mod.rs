pub mod account;

pub use account::{AccountRepository, MockAccountRepository};
