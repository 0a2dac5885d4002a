//! Cardflow renders "cover flow" card galleries: flat picture cards placed in a 3D scene,
//! projected through a pinhole camera and painted onto a 2D pixel surface with depth shading and
//! a fading floor reflection.
//!
//! # Pipeline overview
//!
//! 1. **Project**: [`Scene::project`] maps the four world-space corners of a card to surface
//!    pixels, keeping a depth per corner for shading.
//! 2. **Rasterize**: a [`Rasterizer`] fills the projected trapezoid column by column, sampling
//!    one source image column per screen column, darkening receding columns and mirroring the
//!    card below itself.
//! 3. **Pick**: every painted card caches its projected quad ([`RenderState`]), so
//!    [`pick_card`] can hit-test surface points against the last frame.
//!
//! The key constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Yaw-only cameras**: picture rasterization needs the projected left and right card edges
//!   to be vertical; a rolled or pitched view fails with [`CardflowError::Precondition`].
//! - **Straight RGBA8** surfaces: [`Surface`] is implemented for [`image::RgbaImage`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod assets;
mod config;
mod foundation;
mod geometry;
mod render;
mod scene;
mod shape;

pub use assets::decode::{MAX_SVG_SIDE, decode_image, load_image_file, rasterize_svg};
pub use config::model::{Configuration, RasterStrategy};
pub use config::scene_file::{CameraSpec, CardSpec, Orientation, SceneFile};
pub use foundation::core::{Point, Rgba8, SurfaceSize};
pub use foundation::error::{CardflowError, CardflowResult};
pub use geometry::point::{Point3D, PointOps};
pub use geometry::rotation::RotationMatrix;
pub use render::composite::over;
pub use render::pipeline::{FrameStats, paint_order, pick_card, render_frame};
pub use render::raster::{
    CardCorners, CardLayout, Column, ColumnBlitRasterizer, ExactRasterizer, Rasterizer,
    rasterizer_for,
};
pub use render::shading::{ShadingPolicy, depth_intensity};
pub use render::surface::{Surface, blit_over};
pub use scene::projection::{ProjectionFit, ProjectionWindow, Scene};
pub use shape::hit::{ProjectedQuad, RenderState};
pub use shape::picture::Picture;
pub use shape::rectangle::Rectangle;
pub use shape::{Card, Shape, ShapeGeometry};
