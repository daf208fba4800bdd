//! # ArtPad Core
//!
//! Drawing model for the ArtPad sketch pad. Nothing in here touches a
//! browser: the recorder and stamper mutate plain data and hand back
//! [`DrawOp`]s, which a renderer turns into pixels.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 artpad-core                 │
//! ├─────────────────────────────────────────────┤
//! │  Mode Resolver   │  Pad State               │
//! │  - Colors        │  - Idle / Drawing        │
//! │  - Dash patterns │  - Dirty flag            │
//! ├─────────────────────────────────────────────┤
//! │  Scene           │  Router                  │
//! │  - Strokes       │  - Menu  (/)             │
//! │  - Stamps        │  - Play  (/about)        │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod element;
pub mod error;
pub mod event;
pub mod mode;
pub mod router;
pub mod scene;
pub mod state;

pub use element::{
    Color, DashPattern, Point, ShapeKind, Stamp, Stroke, StrokeStyle, STAMP_RADIUS, STAMP_SIZE,
};
pub use error::{PadError, PadResult};
pub use event::{PointerEvent, PointerPhase};
pub use mode::{resolve_style, Mode, Style};
pub use router::{Route, Router};
pub use scene::{DrawOp, Scene};
pub use state::{PadState, Phase};

/// Width of the drawing surface in logical pixels.
pub const SURFACE_WIDTH: u32 = 900;

/// Height of the drawing surface in logical pixels.
pub const SURFACE_HEIGHT: u32 = 600;

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
