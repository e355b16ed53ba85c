pub mod driver;
pub mod normalize;
pub mod normalizer;

pub use crate::domain::model::{FileOutcome, ProcessedFile, RunMode, RunReport};
pub use crate::domain::ports::{Storage, TargetProvider};
pub use crate::utils::error::Result;
