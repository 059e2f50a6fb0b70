pub mod mapping;
pub mod trypod;
