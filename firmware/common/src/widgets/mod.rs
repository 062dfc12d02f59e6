//! Widget components for the watchface.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod art;
mod bitmap;
mod outlined;
mod text_layer;

pub use art::{draw_background, draw_cloud, draw_rain, draw_snow, draw_sun, draw_unknown};
pub use bitmap::{Bitmap, BitmapLayer, ResourceId};
pub use outlined::OutlinedText;
pub use text_layer::TextLayer;
