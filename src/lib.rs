#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::return_self_not_must_use
)]

//! List-style slicing for fixed-size indexed color palettes.
//!
//! [`PaletteSlice`] wraps a [`Palette`] and adds slice reads and writes,
//! insertion, deletion and linear search, all while preserving each
//! entry's transparency flag. Slice semantics follow Python lists:
//! negative indices count from the end, out-of-range bounds clamp and a
//! negative step walks the selection in reverse.

mod palette_handling;
pub use palette_handling::*;

mod slice;
pub use slice::*;

mod palette_slice;
pub use palette_slice::*;

mod slice_errors;
pub use slice_errors::*;

pub type SliceResult<T> = Result<T, SliceError>;
