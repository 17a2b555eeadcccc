use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection defaults and interaction gates.
///
/// Applied when the asset has no authored camera; an authored camera's own
/// projection parameters win.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Projection zoom factor.
    #[schemars(skip)]
    pub zoom: f32,
    /// Kiosk mode: orbit rotation is never enabled (pan/zoom still are).
    #[schemars(title = "Kiosk Mode")]
    pub kiosk: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: crate::framing::DEFAULT_FOVY_DEG,
            znear: 0.1,
            zfar: 1000.0,
            zoom: 1.0,
            kiosk: false,
        }
    }
}
