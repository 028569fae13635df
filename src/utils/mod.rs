pub mod colors;
pub mod date;
pub mod decimal;
pub mod formatting;
pub mod path;
pub mod table;

pub use formatting::hours2readable;
