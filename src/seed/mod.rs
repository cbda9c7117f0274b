pub mod catalog;

pub use catalog::CATALOG;
