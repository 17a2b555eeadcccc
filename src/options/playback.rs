use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Playback", inline)]
#[serde(default)]
/// Animation playback behavior.
pub struct PlaybackOptions {
    /// Start the first discovered clip automatically after load.
    #[schemars(title = "Autoplay")]
    pub autoplay: bool,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self { autoplay: true }
    }
}
