pub mod defs;
mod dist;
mod exact;
mod mode;
mod pool;
mod print;
mod request;
mod sampler;

pub use dist::{Distribution, Point};
pub use exact::{ExactError, Pmf};
pub use mode::Mode;
pub use pool::DicePool;
pub use print::{Report, ReportPoint};
pub use request::Request;
pub use sampler::Sampler;
use thiserror::Error;

pub const SIDES_MIN: u32 = 2;
pub const SIDES_MAX: u32 = 1_000;
pub const DICE_MIN: u32 = 1;
pub const DICE_MAX: u32 = 1_000;
pub const TRIALS_MIN: u64 = 1;
pub const TRIALS_MAX: u64 = 1_000_000_000;
pub const DEFAULT_TRIALS: u64 = 100_000;

const EXACT_MAX_SPAN: u64 = 4_096;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("sides must be in {min}..={max}, got {0}", min = SIDES_MIN, max = SIDES_MAX)]
    Sides(u32),
    #[error("dice count must be in {min}..={max}, got {0}", min = DICE_MIN, max = DICE_MAX)]
    Dice(u32),
    #[error("trials must be in {min}..={max}, got {0}", min = TRIALS_MIN, max = TRIALS_MAX)]
    Trials(u64),
}
