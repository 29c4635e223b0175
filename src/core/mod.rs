pub mod convert;
pub mod extract;
pub mod header;
pub mod report;
pub mod sheet;
pub mod sort;

pub use convert::ConvertLogic;
