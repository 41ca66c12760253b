//! Source adapter module
//!
//! Defines the SourceAdapter trait and the three platform adapters.

mod traits;

pub mod code_host;
pub mod data_platform;
pub mod model_hub;

pub use code_host::CodeHostAdapter;
pub use data_platform::DataPlatformAdapter;
pub use model_hub::ModelHubAdapter;
pub use traits::SourceAdapter;
