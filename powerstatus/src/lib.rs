mod powerstate;
pub use powerstate::PowerState;

// Capacity based battery health
//
pub mod health;
pub use health::{BatteryCondition, BatteryHealth};

// Status snapshots served by the power-status endpoint
//
pub mod status;
pub use status::{PowerFlow, PowerStatus};

/// Message reported when the endpoint has no battery and gives no reason.
pub const UNAVAILABLE_MESSAGE: &str = "Battery information not available";
