//! The "get a quote" modal: form state, validation rules and the Yew
//! component that wires them to the page.

pub mod controller;
pub mod field;
pub mod modal;
pub mod submission;
pub mod validation;

pub use controller::ServiceContext;
pub use modal::{QuoteModal, QuoteTrigger};
