// THEORY:
// This file is the main entry point for the `chromakey` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the
// public API that will be exposed to external consumers.
//
// The primary goal is to export the two pixel transformers together with the
// argument types they normalize (`Rgb`, `ColorSpec`, `ImageInput`) as the
// clean, high-level interface for the crate. The synchronous operations live
// at the crate root; their async twins live under the `task` module, so the
// blocking and non-blocking surfaces stay visibly separate at the call site.

pub mod color;
pub mod error;
pub mod input;
pub mod ops;
pub mod task;

pub use color::{ColorSpec, Rgb};
pub use error::{Error, Result};
pub use input::ImageInput;
pub use ops::{DEFAULT_DELTA_RANK, make_transparent, replace_color};
