pub mod types;

pub use types::{AdvancedRecord, BasicRecord, HomeAway, Period, StatType};
