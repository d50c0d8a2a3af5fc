//! Hash kernels and the building blocks they share.

pub mod constants;
pub mod mixer;
pub mod portable;
pub mod primitives;
