pub mod controls;
pub mod playback;

pub use controls::wire_controls;
pub use playback::wire_playback;
