mod optics;
mod distance;

pub use optics::{Optics, Neighbors, EuclideanNeighbors};
pub use distance::{Distance, Euclidean};