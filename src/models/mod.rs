pub mod category;
pub mod job;
pub mod profile;
pub mod review;

pub use category::*;
pub use job::*;
pub use profile::*;
pub use review::*;
