pub mod config;
pub mod logging;

pub mod archive;
pub mod plan;
pub mod probe;
pub mod protocol;
pub mod temp_path;
pub mod url_model;

pub use plan::{build_plan, Command, CommandPlan};
pub use protocol::{Detection, HttpProtocol, Protocol};
pub use url_model::{normalize, CanonicalUrl, Rejected};
