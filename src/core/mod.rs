pub mod etl;
pub mod patcher;
pub mod pipeline;

pub use crate::domain::model::{PatchReport, PersistOutcome, Record, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
