mod vec3;
mod rototranslation;

pub use vec3::{Vec3, planar_angle2, planar_angle3, dihedral_angle4,
               random_unit_versor, random_point_nearby};
pub use rototranslation::*;