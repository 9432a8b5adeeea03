//! Payment domain building blocks.
//!
//! Stateless pieces shared by the orchestration pipeline and the RTP
//! downstream gateway:
//! - [`Amount`]: exact decimal amount parsed from payload text
//! - [`BasicFraudCheck`]: threshold-based fraud screening
//! - [`CutoffTimeValidator`]: fail-fast field, hours and currency rules
//! - [`RoutingTable`]: currency to clearing scheme lookup

pub mod amount;
pub mod error;
pub mod fraud;
pub mod routing;
pub mod validation;

pub use amount::Amount;
pub use error::{AmountError, ValidationError};
pub use fraud::{BasicFraudCheck, FraudCheck, FraudDecision, FraudOutcome};
pub use routing::RoutingTable;
pub use validation::{CutoffTimeValidator, SUPPORTED_CURRENCIES};
