pub mod coatings;
pub mod decorations;
pub mod templates;

pub use coatings::*;
pub use decorations::*;
pub use templates::*;
