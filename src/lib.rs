pub mod config;
pub mod emit;
pub mod error;
pub mod generate;
pub mod keys;
pub mod merge;
pub mod region;
pub mod report;
pub mod source;
pub mod writer;

pub use config::{FailurePolicy, RunConfig};
pub use error::{GenError, Result};
pub use generate::Generator;
pub use merge::{merge_section, HostEntry, MergedSection};
pub use report::RunReport;
pub use source::{Document, FieldValue, Record, Section};
pub use writer::{write_region, WriteOutcome};
