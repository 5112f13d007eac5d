//! Pan/zoom viewport state for the workflow canvas.
//!
//! The viewport owns the scale and screen-space offset applied to world
//! coordinates, and translates pointer input into pan and zoom mutations.
//! It knows nothing about documents or rendering; the canvas component
//! feeds it pointer positions and reads back the world-to-screen mapping.

pub mod viewport;

pub use viewport::{
    BUTTON_ZOOM_STEP, FIT_SCALE, MAX_SCALE, MIN_SCALE, Viewport, WHEEL_ZOOM_STEP,
};
