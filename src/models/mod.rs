pub mod host;
pub mod trypod;
