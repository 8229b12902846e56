//! Procedural drawing of app icon assets.
//!
//! Main features:
//!  - Per-pixel gradient fills (vertical bands, diagonal, angular)
//!  - Shape compositing with alpha blending in strict draw order
//!  - Atomic PNG export
//!  - Resizing an existing image into the icon size set
//!
#![deny(warnings)]

mod canvas;
mod color;
mod export;
mod font;
mod geometry;
mod grad;
mod icons;
mod resize;
mod scene;
mod utils;

pub use canvas::{Canvas, Image, ImageIter, ImageMut, ImageMutIter, ImageOwned, Shape};
pub use color::{Color, ColorError, Rgba};
pub use export::{Emitted, ExportError, ExportOptions, write_png};
pub use font::FontBook;
pub use geometry::{BBox, EPSILON, PI, Point, Scalar};
pub use grad::{
    EdgeHighlight, GradAngular, GradBands, GradDiagonal, GradStop, GradStops, Paint, Region,
    gradient_fill,
};
pub use icons::{IconStyle, generate, render};
pub use resize::{RESIZE_OUTPUTS, ResizeError, open_source, resize_to, update_icons};
pub use scene::{Figure, Primitive, Scene, Stroke};
pub use utils::clamp;
