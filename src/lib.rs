// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests unwrap freely and build fixtures by value
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::panic,
        clippy::needless_pass_by_value,
        clippy::wildcard_imports
    )
)]

//! Interactive control layer for 3D container-packing views.
//!
//! Packview turns raw pointer and touch input into a stable orbit camera
//! around a packed container, and steps through the placed items with a
//! timed reveal animation. Rendering stays with the host: it feeds events
//! in, applies the [`camera::CameraPose`] each frame and toggles item
//! visibility from [`playback::PlaybackEvent`]s.
//!
//! # Key entry points
//!
//! - [`engine::PackingView`] - per-view owner wiring input, camera and
//!   playback together
//! - [`camera::CameraController`] - spherical orbit/pan/zoom with clamps
//! - [`input::GestureAdapter`] - pointer/touch state machine producing
//!   device-independent [`input::GestureDelta`]s
//! - [`playback::PlaybackSequencer`] - play/pause/step/rewind over an
//!   injectable [`playback::Scheduler`]
//! - [`options::Options`] - TOML-backed limits and speeds
//!
//! # Architecture
//!
//! Input events flow through the gesture adapter into the camera, which
//! batches them until [`camera::CameraController::update`] runs once per
//! frame. Playback commands drive the sequencer independently; its timer
//! ticks arrive from the host's event loop. Everything is single-threaded
//! and nothing blocks.

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod playback;
pub mod scene;
