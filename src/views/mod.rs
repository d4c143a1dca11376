//! Pure projections of kernel state for the host to render.

pub mod status;
pub mod tab_row;
