//! Pure domain types and decision logic.
//!
//! Everything in this module is deterministic given its inputs: offer
//! parsing and surplus math, the payment-method time window, the spam
//! filter store, and the eligibility pipeline that combines them.

pub mod eligibility;
pub mod offer;
pub mod spam;
pub mod window;

pub use eligibility::{evaluate, Eligibility};
pub use offer::{surplus_percentage, Offer, PaymentMethod};
pub use spam::SpamFilter;
