//! Camera pose ownership and write authority.

mod authority;
mod pose;

pub use authority::{AuthorityMode, CameraAuthority, OrbitControls};
pub use pose::{
    look_rotation_degrees, round_angles, round_hundredths, CameraPose,
};
