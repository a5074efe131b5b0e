use crate::core::actions::compose_surface::ports::colour_map::ColourMap;
use crate::core::data::field_grid::{FieldGrid, FractalField};
use crate::core::data::output_surface::OutputSurface;
use crate::core::data::packed_pixel::PackedPixel;

/// Packed colour per output pixel for the non-cycling case, rebuilt with the field.
pub type ColourCache = FieldGrid<PackedPixel>;

pub fn generate_colour_cache<CMap: ColourMap>(field: &FractalField, mapper: &CMap, cache: &mut ColourCache) {
    for ((_, counts), (_, packed)) in field.rows().zip(cache.rows_mut()) {
        for (pair, cell) in counts.chunks_exact(2).zip(packed.iter_mut()) {
            *cell = mapper.pack_pair(pair[0], pair[1], 0);
        }
    }
}

/// Colours every field row from scratch, shifting palette lookups by `offset`.
pub fn compose_from_field<CMap: ColourMap>(
    field: &FractalField,
    mapper: &CMap,
    offset: u32,
    surface: &mut OutputSurface,
) {
    for (y, counts) in field.rows() {
        let Some(out) = surface.row_mut(y) else {
            continue;
        };

        for (pair, pixel) in counts.chunks_exact(2).zip(out.iter_mut()) {
            *pixel = mapper.pack_pair(pair[0], pair[1], offset);
        }
    }
}

pub fn compose_from_cache(cache: &ColourCache, surface: &mut OutputSurface) {
    for (y, packed) in cache.rows() {
        if let Some(out) = surface.row_mut(y) {
            let len = out.len().min(packed.len());
            out[..len].copy_from_slice(&packed[..len]);
        }
    }
}
