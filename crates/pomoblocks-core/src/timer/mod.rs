mod clock;
mod engine;
mod mode;
pub mod ticker;

pub use clock::format_mm_ss;
pub use engine::TimerEngine;
pub use mode::SessionMode;
pub use ticker::{Ticker, TICK_PERIOD};
