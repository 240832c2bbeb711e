pub mod category;
pub mod job;
pub mod profile;
pub mod review;
