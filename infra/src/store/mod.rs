//! Keyed document store implementations.

pub mod redis;

pub use redis::RedisAccountRepository;
