//! # Blog Core
//!
//! The domain layer of the blog backend.
//! This crate contains the post store, identifier resolution and the ports
//! infrastructure must implement. It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod resolve;
pub mod service;

pub use error::DomainError;
pub use service::PostStore;
