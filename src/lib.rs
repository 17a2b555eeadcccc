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
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Scene framing, camera authority, and animation playback core for an
//! interactive 3D asset viewer.
//!
//! Vantage sits between an external asset loader (which decodes a container
//! into a node graph) and an external renderer (which owns rasterization and
//! projection matrices). It decides *where the camera goes* and *what the
//! active animation clip is doing*, and nothing else.
//!
//! # Key entry points
//!
//! - [`session::ViewerSession`] - per-asset orchestration: load sequencing,
//!   visibility gating, command dispatch
//! - [`camera::CameraAuthority`] - the single source of truth for camera
//!   pose, mediating orbit interaction and manual field edits
//! - [`playback::PlaybackController`] - the clip playback state machine
//! - [`framing`] - pure camera-framing math for assets without an authored
//!   camera
//! - [`options::Options`] - runtime configuration with TOML preset support
//!
//! # Architecture
//!
//! Everything runs on one logical thread of event dispatch: state transitions
//! happen synchronously in response to discrete events (drag deltas, form
//! edits, a new-asset signal, a render-frame tick). Exclusivity is achieved
//! by construction - an authority flag for the camera, a state machine for
//! playback - not by locking.

pub mod asset;
pub mod camera;
pub mod command;
pub mod error;
pub mod framing;
pub mod input;
pub mod options;
pub mod playback;
pub mod session;

pub use command::ViewerCommand;
pub use error::ViewerError;
pub use session::ViewerSession;
