//! Order workflow: documents, stores, validation, service, HTTP handlers

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod service;
pub mod store;
pub mod validation;

pub use error::OrderError;
pub use models::{Order, OrderFilter, OrderItem, OrderPatch, User, UserPatch};
pub use service::{OrderService, VerifyOutcome};
pub use store::{OrderStore, StoreError, UserStore};
