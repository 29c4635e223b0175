pub mod cell;
pub mod event;

pub use cell::Cell;
pub use event::WorkshopEvent;
