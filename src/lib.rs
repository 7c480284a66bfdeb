#![doc = include_str!("../README.md")]

mod error;
pub mod feature;
pub mod mbr;
pub mod prtree;
mod r#type;

pub use error::{PRTreeError, Result};
pub use mbr::{Mbr, PointND, SimpleMbr, SimpleMbr2D};
pub use r#type::IndexableNum;

#[cfg(test)]
pub(crate) mod test;
