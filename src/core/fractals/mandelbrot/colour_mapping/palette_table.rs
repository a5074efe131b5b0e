use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotPaletteKinds;

/// Iterations before a palette repeats.
#[must_use]
pub fn palette_period(palette: MandelbrotPaletteKinds) -> u32 {
    palette.stops().len() as u32 * palette.steps_per_stop()
}

/// Base colour for an iteration count. Periodic, so any count (including cycling offsets) is valid.
#[must_use]
pub fn palette_colour(palette: MandelbrotPaletteKinds, iterations: u32) -> Colour {
    let stops = palette.stops();
    let steps = palette.steps_per_stop();
    let phase = iterations % palette_period(palette);
    let stop = (phase / steps) as usize;
    let step = phase % steps;

    stops[stop].lerp(stops[(stop + 1) % stops.len()], step, steps)
}
