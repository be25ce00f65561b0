pub mod access;
pub mod error;
pub mod feature_flags;
pub mod issue;
pub mod models;
pub mod requests;
pub mod stats;

pub use access::*;
pub use error::*;
pub use feature_flags::*;
pub use issue::*;
pub use models::*;
pub use requests::*;
pub use stats::*;
