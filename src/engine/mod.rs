//! The War round engine.
//!
//! - `table`: the observable state views are shown
//! - `round`: round results, outcomes and history records
//! - `round_engine`: resolution, lifecycle, timers and controls

pub mod table;
pub mod round;
pub mod round_engine;

pub use table::{Pool, Table};
pub use round::{Outcome, RoundRecord, RoundResult};
pub use round_engine::RoundEngine;
