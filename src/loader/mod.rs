//! File formats: the tournament description and the persisted status file

pub mod description;
pub mod status;

pub use description::{Description, DescriptionLoader};
pub use status::{DecodeMode, StatusFile};
