pub mod merge;
pub mod workspace;

pub use crate::domain::model::{BuildReport, MergeReport, Verdict};
pub use crate::domain::ports::{Compiler, ConfigProvider};
pub use crate::utils::error::Result;
