pub mod kinds;
pub mod palette_table;
pub mod ycbcr;
