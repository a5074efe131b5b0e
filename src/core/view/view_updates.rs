//! Input-driven view changes. Each marks the render state dirty so the field is recomputed.

use log::debug;
use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;
use crate::core::view::render_state::RenderState;
use crate::core::view::view_transform::{ViewLimits, ViewTransform};

pub fn pan(view: &mut ViewTransform, state: &mut RenderState, pointer: Point, screen: ScreenSize) {
    view.pan(pointer, screen);
    state.mark_dirty();
    debug!("pan to ({:.6}, {:.6})", view.center_real(), -view.center_imag());
}

pub fn zoom(
    view: &mut ViewTransform,
    state: &mut RenderState,
    pointer: Point,
    screen: ScreenSize,
    limits: &ViewLimits,
) {
    view.zoom(pointer, screen, limits);
    state.mark_dirty();
    debug!("zoom scale {:e} at ({:.6}, {:.6})", view.zoom_scale(), view.center_real(), -view.center_imag());
}

pub fn reset(view: &mut ViewTransform, state: &mut RenderState, limits: &ViewLimits) {
    view.reset(limits);
    state.mark_dirty();
    debug!("view reset");
}

pub fn double_iteration_limit(state: &mut RenderState) {
    state.double_iteration_limit();
    debug!("iteration limit {}", state.iteration_limit());
}

pub fn halve_iteration_limit(state: &mut RenderState, min_iteration_limit: u32) {
    state.halve_iteration_limit(min_iteration_limit);
    debug!("iteration limit {}", state.iteration_limit());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotPaletteKinds;

    fn fixture() -> (ViewTransform, RenderState, ScreenSize, ViewLimits) {
        let limits = ViewLimits::default();
        let mut state = RenderState::new(200, MandelbrotPaletteKinds::default());
        state.take_dirty();

        (
            ViewTransform::new(&limits),
            state,
            ScreenSize::new(640, 480, 20).unwrap(),
            limits,
        )
    }

    #[test]
    fn every_update_marks_dirty() {
        let (mut view, mut state, screen, limits) = fixture();

        pan(&mut view, &mut state, Point { x: 10, y: 10 }, screen);
        assert!(state.take_dirty());

        zoom(&mut view, &mut state, Point { x: 10, y: 10 }, screen, &limits);
        assert!(state.take_dirty());

        reset(&mut view, &mut state, &limits);
        assert!(state.take_dirty());

        double_iteration_limit(&mut state);
        assert!(state.take_dirty());

        halve_iteration_limit(&mut state, 1);
        assert!(state.take_dirty());
    }

    #[test]
    fn zoom_once_at_centre_from_initial_state() {
        let (mut view, mut state, screen, limits) = fixture();

        zoom(&mut view, &mut state, Point { x: 320, y: 240 }, screen, &limits);

        assert!((view.zoom_scale() - 0.007 * 0.35).abs() < 1e-15);
        assert_eq!((view.center_real(), view.center_imag()), (0.0, 0.0));
    }

    #[test]
    fn reset_restores_initial_transform() {
        let (mut view, mut state, screen, limits) = fixture();
        let initial = view;

        pan(&mut view, &mut state, Point { x: 0, y: 479 }, screen);
        reset(&mut view, &mut state, &limits);

        assert_eq!(view, initial);
    }
}
