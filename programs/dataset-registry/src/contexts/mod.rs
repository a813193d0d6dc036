pub mod create_dataset;
pub mod dataset_admin;
pub mod initialize;
pub mod update_reputation;
pub mod vault;

pub use create_dataset::*;
pub use dataset_admin::*;
pub use initialize::*;
pub use update_reputation::*;
pub use vault::*;
