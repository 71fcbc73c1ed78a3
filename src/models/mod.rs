pub mod enums;

pub use enums::{Focus, RiskBand};
