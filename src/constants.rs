// DOM hooks and labels shared by the player wiring.
// Elements are located by data attributes so the markup can be styled freely.

pub const PLAYER_ROOT: &str = "[data-player]";
pub const AUDIO: &str = "[data-audio]";
pub const PLAY_BUTTON: &str = "[data-play]";
pub const PLAY_TEXT: &str = "[data-play-text]";
pub const SEEK: &str = "[data-seek]";
pub const CURRENT_TIME: &str = "[data-current]";
pub const DURATION: &str = "[data-duration]";
pub const VOLUME: &str = "[data-volume]";
pub const SNOW_CANVAS: &str = "[data-snow]"; // looked up on the document, not the player root

// Attributes written back for styling
pub const ATTR_STATE: &str = "data-state";
pub const ATTR_ACTIVE: &str = "data-active";
pub const ATTR_ARIA_LABEL: &str = "aria-label";

pub const LABEL_PLAY: &str = "Play / 再生";
pub const LABEL_PAUSE: &str = "Pause / 一時停止";

pub const STATE_PLAYING: &str = "playing";
pub const STATE_PAUSED: &str = "paused";

// Seek bar is a 0..=100 range input
pub const SEEK_MAX: f64 = 100.0;

pub const SNOW_FILL_RGB: &str = "255, 255, 255";
