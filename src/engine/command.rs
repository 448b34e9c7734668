//! Playback controls a host UI can trigger.
//!
//! Buttons, sliders and key bindings all map onto a `PlaybackCommand`;
//! the view never cares which one fired.

/// A discrete or parameterized playback operation.
///
/// ```ignore
/// view.execute(PlaybackCommand::TogglePlayback);
/// view.execute(PlaybackCommand::SetSpeed { value: 1500.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackCommand {
    /// Start revealing items.
    Play,
    /// Stop revealing items.
    Pause,
    /// Play/pause button: pause when playing, otherwise play.
    TogglePlayback,
    /// Hide the most recently revealed item.
    StepBack,
    /// Hide everything and return to the first item.
    Rewind,
    /// Move the speed slider.
    SetSpeed {
        /// Slider value; clamped into the configured range.
        value: f32,
    },
}
