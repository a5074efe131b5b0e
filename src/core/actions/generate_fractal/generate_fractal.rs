use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::field_grid::FieldGrid;
use crate::core::data::point::Point;

/// Recomputes every cell of `field` in place, row by row.
pub fn generate_fractal<Alg, T>(field: &mut FieldGrid<T>, algorithm: &Alg)
where
    Alg: FractalAlgorithm<Success = T>,
    T: Copy + Default,
{
    let columns = field.rect().columns();

    for (y, row) in field.rows_mut() {
        for (x, cell) in columns.clone().zip(row.iter_mut()) {
            *cell = algorithm.compute(Point { x, y });
        }
    }
}
