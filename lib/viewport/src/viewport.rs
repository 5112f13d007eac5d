//! The viewport state machine.
//!
//! A viewport maps world coordinates onto the screen:
//!
//! ```text
//! screen = world * scale + offset
//! ```
//!
//! `scale` is clamped to `[MIN_SCALE, MAX_SCALE]`; `offset` is
//! unconstrained screen-space translation. Panning tracks the pointer 1:1
//! in screen pixels via a drag anchor recorded on `begin_pan`.

use amber_relay_core::{Bounds, Point, Size};

/// Smallest permitted zoom scale.
pub const MIN_SCALE: f64 = 0.2;

/// Largest permitted zoom scale.
pub const MAX_SCALE: f64 = 2.0;

/// The scale used when fitting a document into view.
pub const FIT_SCALE: f64 = 0.6;

/// Zoom increment for the discrete zoom-in/zoom-out controls.
pub const BUTTON_ZOOM_STEP: f64 = 0.2;

/// Zoom increment per wheel tick; scrolling forward zooms in.
pub const WHEEL_ZOOM_STEP: f64 = 0.1;

/// Pan/zoom state for one viewer session.
///
/// Every operation is a synchronous read-modify-write; the viewport
/// performs no I/O and holds no resources beyond its own fields. State is
/// discarded when the viewer closes.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    scale: f64,
    offset: Point,
    /// Screen-space anchor while a pan is active: `pointer - offset` at
    /// the moment the drag started.
    drag_anchor: Option<Point>,
}

impl Viewport {
    /// Creates a viewport at `FIT_SCALE` with the center of `bounds`
    /// mapped onto the center of `size`.
    ///
    /// Documents use arbitrary tool-specific coordinate origins, so this
    /// is the only initialization that guarantees the graph is visible.
    #[must_use]
    pub fn centered(bounds: Bounds, size: Size) -> Self {
        let mut viewport = Self {
            scale: FIT_SCALE,
            offset: Point::ORIGIN,
            drag_anchor: None,
        };
        viewport.reset(bounds, size);
        viewport
    }

    /// The current zoom scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The current screen-space offset.
    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Whether a pan drag is currently active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Starts a pan drag anchored at the given pointer position.
    ///
    /// The caller is responsible for hit-testing precedence: pointer-down
    /// on a node card must not reach this method.
    pub fn begin_pan(&mut self, pointer: Point) {
        self.drag_anchor = Some(pointer - self.offset);
    }

    /// Moves the offset so it tracks the pointer 1:1 in screen pixels.
    ///
    /// No-op when no drag is active.
    pub fn continue_pan(&mut self, pointer: Point) {
        if let Some(anchor) = self.drag_anchor {
            self.offset = pointer - anchor;
        }
    }

    /// Ends any active pan drag.
    ///
    /// Safe to call unconditionally; also wired to pointer-leave so a
    /// drag cannot stick when the pointer exits the canvas mid-press.
    pub fn end_pan(&mut self) {
        self.drag_anchor = None;
    }

    /// Adjusts the scale by `delta`, clamped to `[MIN_SCALE, MAX_SCALE]`.
    pub fn zoom_by(&mut self, delta: f64) {
        self.scale = (self.scale + delta).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Re-centers on `bounds` with the scale pinned back to `FIT_SCALE`.
    ///
    /// `offset = size/2 - center(bounds) * FIT_SCALE`, so the bounds
    /// center lands on the viewport center regardless of the document's
    /// coordinate range.
    pub fn reset(&mut self, bounds: Bounds, size: Size) {
        let center = bounds.center();
        self.scale = FIT_SCALE;
        self.offset = Point::new(
            size.width / 2.0 - center.x * FIT_SCALE,
            size.height / 2.0 - center.y * FIT_SCALE,
        );
    }

    /// Maps a world point to screen coordinates under the current state.
    #[must_use]
    pub fn to_screen(&self, world: Point) -> Point {
        Point::new(
            world.x * self.scale + self.offset.x,
            world.y * self.scale + self.offset.y,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::centered(Bounds::ZERO, Size::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::centered(Bounds::new(0.0, 0.0, 200.0, 100.0), Size::new(800.0, 600.0))
    }

    #[test]
    fn centered_uses_fit_scale() {
        assert_eq!(viewport().scale(), FIT_SCALE);
    }

    #[test]
    fn centered_maps_bounds_center_to_viewport_center() {
        let bounds = Bounds::new(-300.0, 150.0, 500.0, 950.0);
        let size = Size::new(1024.0, 768.0);
        let viewport = Viewport::centered(bounds, size);
        assert_eq!(viewport.to_screen(bounds.center()), size.center());
    }

    #[test]
    fn to_screen_applies_scale_then_offset() {
        let mut viewport = viewport();
        viewport.zoom_by(0.4); // scale = 1.0
        let offset = viewport.offset();
        let screen = viewport.to_screen(Point::new(10.0, 20.0));
        assert_eq!(screen, Point::new(10.0 + offset.x, 20.0 + offset.y));
    }

    #[test]
    fn pan_tracks_pointer_one_to_one() {
        let mut viewport = viewport();
        let before = viewport.offset();
        viewport.begin_pan(Point::new(100.0, 100.0));
        viewport.continue_pan(Point::new(130.0, 80.0));
        let after = viewport.offset();
        assert_eq!(after - before, Point::new(30.0, -20.0));
    }

    #[test]
    fn continue_pan_without_begin_is_noop() {
        let mut viewport = viewport();
        let before = viewport.offset();
        viewport.continue_pan(Point::new(500.0, 500.0));
        assert_eq!(viewport.offset(), before);
        assert!(!viewport.is_panning());
    }

    #[test]
    fn end_pan_clears_drag_unconditionally() {
        let mut viewport = viewport();
        viewport.end_pan();
        assert!(!viewport.is_panning());

        viewport.begin_pan(Point::new(10.0, 10.0));
        assert!(viewport.is_panning());
        viewport.end_pan();
        assert!(!viewport.is_panning());

        // Movement after the drag ended must not pan.
        let before = viewport.offset();
        viewport.continue_pan(Point::new(999.0, 999.0));
        assert_eq!(viewport.offset(), before);
    }

    #[test]
    fn zoom_clamps_at_maximum() {
        let mut viewport = viewport();
        for _ in 0..5 {
            viewport.zoom_by(10.0);
        }
        assert_eq!(viewport.scale(), MAX_SCALE);
    }

    #[test]
    fn zoom_clamps_at_minimum() {
        let mut viewport = viewport();
        for _ in 0..5 {
            viewport.zoom_by(-10.0);
        }
        assert_eq!(viewport.scale(), MIN_SCALE);
    }

    #[test]
    fn zoom_does_not_move_offset() {
        let mut viewport = viewport();
        let before = viewport.offset();
        viewport.zoom_by(BUTTON_ZOOM_STEP);
        viewport.zoom_by(-WHEEL_ZOOM_STEP);
        assert_eq!(viewport.offset(), before);
    }

    #[test]
    fn reset_restores_fit_scale_and_centering() {
        let bounds = Bounds::new(100.0, 100.0, 700.0, 500.0);
        let size = Size::new(1280.0, 720.0);
        let mut viewport = Viewport::centered(bounds, size);

        viewport.zoom_by(1.0);
        viewport.begin_pan(Point::ORIGIN);
        viewport.continue_pan(Point::new(250.0, -40.0));
        viewport.end_pan();

        viewport.reset(bounds, size);
        assert_eq!(viewport.scale(), FIT_SCALE);
        assert_eq!(viewport.to_screen(bounds.center()), size.center());
    }

    #[test]
    fn empty_bounds_center_on_origin() {
        let size = Size::new(640.0, 480.0);
        let viewport = Viewport::centered(Bounds::ZERO, size);
        assert_eq!(viewport.to_screen(Point::ORIGIN), size.center());
    }
}
