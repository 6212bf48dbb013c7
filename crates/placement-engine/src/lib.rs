pub mod perimeter;
pub mod ring;
pub mod scatter;

pub use perimeter::{square_outline, Edge, EdgePoint};
pub use ring::{ring, RingPoint};
pub use scatter::{scatter_disk, scatter_square};
