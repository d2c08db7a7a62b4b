//! Domain models for the payment record service.

pub mod payment;

pub use payment::{ClientType, NewPayment, Payment, PaymentId};
