//! Port traits for the hexagonal architecture.

pub mod lookup;
pub mod repository;

pub use lookup::{
    ActiveLookup, ActiveRecord, ClientLookup, ClientRecord, LookupError, LookupReply,
};
pub use repository::PaymentRepository;
