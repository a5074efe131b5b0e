use std::num::NonZeroU32;
use crate::core::data::double_buffered::BufferIndex;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotPaletteKinds;
use crate::core::fractals::mandelbrot::colour_mapping::ycbcr::ColourMapper;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    iteration_limit: NonZeroU32,
    palette: MandelbrotPaletteKinds,
    cycling: bool,
    cycle_offset: u32,
    active_buffer: BufferIndex,
    dirty: bool,
}

impl RenderState {
    /// Starts dirty so the first frame computes the field.
    #[must_use]
    pub fn new(iteration_limit: u32, palette: MandelbrotPaletteKinds) -> Self {
        Self {
            iteration_limit: NonZeroU32::new(iteration_limit).unwrap_or(NonZeroU32::MIN),
            palette,
            cycling: false,
            cycle_offset: 0,
            active_buffer: BufferIndex::default(),
            dirty: true,
        }
    }

    #[must_use]
    pub fn iteration_limit(&self) -> u32 {
        self.iteration_limit.get()
    }

    #[must_use]
    pub fn nonzero_iteration_limit(&self) -> NonZeroU32 {
        self.iteration_limit
    }

    #[must_use]
    pub fn palette(&self) -> MandelbrotPaletteKinds {
        self.palette
    }

    #[must_use]
    pub fn is_cycling(&self) -> bool {
        self.cycling
    }

    #[must_use]
    pub fn cycle_offset(&self) -> u32 {
        self.cycle_offset
    }

    #[must_use]
    pub fn active_buffer(&self) -> BufferIndex {
        self.active_buffer
    }

    #[must_use]
    pub fn back_buffer(&self) -> BufferIndex {
        self.active_buffer.other()
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn colour_mapper(&self) -> ColourMapper {
        ColourMapper::new(self.palette, self.iteration_limit.get())
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a recompute is due and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn toggle_cycling(&mut self) {
        self.cycling = !self.cycling;
    }

    pub fn advance_cycle(&mut self) {
        if self.cycling {
            self.cycle_offset = self.cycle_offset.wrapping_add(1);
        }
    }

    /// Cached colours depend on the palette, so a change invalidates them.
    pub fn next_palette(&mut self) {
        self.palette = self.palette.next();
        self.dirty = true;
    }

    pub fn previous_palette(&mut self) {
        self.palette = self.palette.previous();
        self.dirty = true;
    }

    pub fn double_iteration_limit(&mut self) {
        let doubled = self.iteration_limit.get().saturating_mul(2);

        self.iteration_limit = NonZeroU32::new(doubled).unwrap_or(NonZeroU32::MAX);
        self.dirty = true;
    }

    pub fn halve_iteration_limit(&mut self, min_iteration_limit: u32) {
        let floor = NonZeroU32::new(min_iteration_limit).unwrap_or(NonZeroU32::MIN);
        let halved = NonZeroU32::new(self.iteration_limit.get() / 2).unwrap_or(NonZeroU32::MIN);

        self.iteration_limit = halved.max(floor);
        self.dirty = true;
    }

    pub fn swap_buffers(&mut self) {
        self.active_buffer = self.active_buffer.other();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial_state() -> RenderState {
        RenderState::new(200, MandelbrotPaletteKinds::default())
    }

    #[test]
    fn new_state_starts_dirty() {
        let mut state = initial_state();

        assert!(state.take_dirty());
        assert!(!state.take_dirty());
    }

    #[test]
    fn doubling_three_times_then_halving_once() {
        let mut state = initial_state();

        state.double_iteration_limit();
        state.double_iteration_limit();
        state.double_iteration_limit();
        assert_eq!(state.iteration_limit(), 1600);

        state.halve_iteration_limit(1);
        assert_eq!(state.iteration_limit(), 800);
        assert!(state.is_dirty());
    }

    #[test]
    fn halving_never_drops_below_floor() {
        let mut state = RenderState::new(3, MandelbrotPaletteKinds::default());

        state.halve_iteration_limit(1);
        assert_eq!(state.iteration_limit(), 1);

        state.halve_iteration_limit(1);
        assert_eq!(state.iteration_limit(), 1);
    }

    #[test]
    fn zero_limit_is_raised_to_one() {
        let state = RenderState::new(0, MandelbrotPaletteKinds::default());

        assert_eq!(state.iteration_limit(), 1);
        assert_eq!(state.nonzero_iteration_limit().get(), 1);
    }

    #[test]
    fn doubling_saturates() {
        let mut state = RenderState::new(u32::MAX / 2 + 1, MandelbrotPaletteKinds::default());

        state.double_iteration_limit();

        assert_eq!(state.iteration_limit(), u32::MAX);
    }

    #[test]
    fn cycle_offset_only_advances_while_cycling() {
        let mut state = initial_state();

        state.advance_cycle();
        assert_eq!(state.cycle_offset(), 0);

        state.toggle_cycling();
        state.advance_cycle();
        state.advance_cycle();
        assert_eq!(state.cycle_offset(), 2);

        state.toggle_cycling();
        state.advance_cycle();
        assert_eq!(state.cycle_offset(), 2);
    }

    #[test]
    fn palette_changes_wrap_and_mark_dirty() {
        let mut state = RenderState::new(200, MandelbrotPaletteKinds::Copper);
        state.take_dirty();

        state.next_palette();
        assert_eq!(state.palette(), MandelbrotPaletteKinds::Grayscale);
        assert!(state.take_dirty());

        state.previous_palette();
        assert_eq!(state.palette(), MandelbrotPaletteKinds::Copper);
        assert!(state.take_dirty());
    }

    #[test]
    fn swap_buffers_alternates_active_and_back() {
        let mut state = initial_state();
        let first = state.active_buffer();

        assert_eq!(state.back_buffer(), first.other());

        state.swap_buffers();
        assert_eq!(state.active_buffer(), first.other());
        assert_eq!(state.back_buffer(), first);
    }
}
