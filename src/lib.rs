//! This crate generates synthetic images
//! for a toy manifold-learning experiment:
//! a filled ball that moves around a fixed circle,
//! parameterized by a single angle.
//! The images form a sample of a circle embedded
//! in pixel space, and the angle helpers measure
//! distances on the circle itself.

pub mod angle;
pub mod ball;
pub mod binary_image;
pub mod distance_field;
pub mod error;

pub mod prelude {
    pub use crate::{
        eps_ball,
        gen_data_s1,
        dtheta,
        r2_norm
    };

    pub use crate::angle::{
        dtheta_elementwise, r2_norm_elementwise
    };

    pub use crate::ball::{
        circle_center, circle_centers, sample_angles,
        S1Options, DEFAULT_SEED
    };

    pub use crate::binary_image::BinaryImage;
    pub use crate::distance_field::Grid;
    pub use crate::error::{ Error, Result };

    #[cfg(feature = "piston_image")]
    pub use crate::binary_image::piston_image as binary_piston_image;
}


pub use angle::{ dtheta, r2_norm };
pub use ball::gen_data_s1;
pub use distance_field::eps_ball;
