use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;

use crate::{
    assets::decode::load_image_file,
    config::model::Configuration,
    foundation::{
        core::{Rgba8, SurfaceSize},
        error::{CardflowError, CardflowResult},
    },
    geometry::{point::Point3D, rotation::RotationMatrix},
    scene::projection::{ProjectionFit, Scene},
    shape::{Card, Shape, picture::Picture, rectangle::Rectangle},
};

/// Yaw, pitch and roll in radians, applied in that order.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Orientation {
    /// Rotation about the y axis.
    pub yaw: f64,
    /// Rotation about the x axis.
    pub pitch: f64,
    /// Rotation about the z axis.
    pub roll: f64,
}

impl Orientation {
    /// Matrix form.
    pub fn matrix(&self) -> RotationMatrix {
        RotationMatrix::from_yaw_pitch_roll(self.yaw, self.pitch, self.roll)
    }

    fn is_finite(&self) -> bool {
        self.yaw.is_finite() && self.pitch.is_finite() && self.roll.is_finite()
    }
}

/// Camera placement of a [`SceneFile`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CameraSpec {
    /// World-space camera origin.
    pub location: [f64; 3],
    /// Camera orientation.
    pub rotation: Orientation,
    /// Eye offset `x`, `y` and focal distance `z`.
    pub viewer: [f64; 3],
    /// Window fitting policy.
    pub fit: ProjectionFit,
}

impl Default for CameraSpec {
    fn default() -> Self {
        Self {
            location: [0.0, 0.0, -1.0],
            rotation: Orientation::default(),
            viewer: [0.0, 0.0, 1.0],
            fit: ProjectionFit::Cover,
        }
    }
}

/// One card of a [`SceneFile`].
///
/// With `image` set the card is a [`Picture`]; otherwise a [`Rectangle`] filled with `color`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardSpec {
    /// Image path, relative to the scene file's directory.
    #[serde(default)]
    pub image: Option<PathBuf>,
    /// Width in world units. Derived from the image aspect when only `height` is given.
    #[serde(default)]
    pub width: Option<f64>,
    /// Height in world units. Derived from the image aspect when only `width` is given.
    #[serde(default)]
    pub height: Option<f64>,
    /// World position of the card centre.
    pub location: [f64; 3],
    /// Card orientation.
    #[serde(default)]
    pub rotation: Orientation,
    /// Fill colour of image-less cards.
    #[serde(default)]
    pub color: Option<Rgba8>,
}

/// JSON description of a frame: surface, camera, tunables and cards.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneFile {
    /// Output surface size in pixels.
    pub surface: SurfaceSize,
    /// Camera and viewer.
    #[serde(default)]
    pub camera: CameraSpec,
    /// Painting tunables.
    #[serde(default)]
    pub config: Configuration,
    /// Index of the card drawn with the active border.
    #[serde(default)]
    pub active: Option<usize>,
    /// Longest edge, in pixels, SVG images are rasterized at.
    #[serde(default = "default_svg_side")]
    pub svg_side: u32,
    /// Cards in input order.
    #[serde(default)]
    pub cards: Vec<CardSpec>,
}

fn default_svg_side() -> u32 {
    512
}

/// Card size used when a card gives neither `width` nor `height`.
const DEFAULT_CARD_WIDTH: f64 = 1.0;

impl SceneFile {
    /// Read and validate a scene file.
    pub fn load(path: &Path) -> CardflowResult<Self> {
        let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
        let scene: SceneFile = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse scene JSON '{}'", path.display()))?;
        scene.validate()?;
        Ok(scene)
    }

    /// Check sizes, indices and tunables.
    pub fn validate(&self) -> CardflowResult<()> {
        SurfaceSize::new(self.surface.width, self.surface.height)?;
        self.config.validate()?;

        let cam = &self.camera;
        if !cam.location.iter().chain(&cam.viewer).all(|v| v.is_finite())
            || !cam.rotation.is_finite()
        {
            return Err(CardflowError::validation("camera values must be finite"));
        }
        if cam.viewer[2] == 0.0 {
            return Err(CardflowError::validation("viewer focal distance must be non-zero"));
        }
        if let Some(active) = self.active
            && active >= self.cards.len()
        {
            return Err(CardflowError::validation(format!(
                "active card {active} out of range ({} cards)",
                self.cards.len()
            )));
        }

        for (i, card) in self.cards.iter().enumerate() {
            if !card.location.iter().all(|v| v.is_finite()) || !card.rotation.is_finite() {
                return Err(CardflowError::validation(format!(
                    "card {i}: location and rotation must be finite"
                )));
            }
            for dim in [card.width, card.height].into_iter().flatten() {
                if !dim.is_finite() || dim <= 0.0 {
                    return Err(CardflowError::validation(format!(
                        "card {i}: width/height must be finite and > 0"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Scene described by the camera block.
    pub fn build_scene(&self) -> Scene {
        let [x, y, z] = self.camera.location;
        let [vx, vy, vz] = self.camera.viewer;
        Scene::new(
            Point3D::new(x, y, z),
            self.camera.rotation.matrix(),
            Point3D::new(vx, vy, vz),
        )
        .with_fit(self.camera.fit)
    }

    /// Load images and place every card; relative image paths resolve against `base_dir`.
    pub fn build_cards(&self, base_dir: &Path) -> CardflowResult<Vec<Card>> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let card = build_card(entry, base_dir, self.svg_side)?;
                tracing::trace!(card = i, "card loaded");
                Ok(card)
            })
            .collect()
    }
}

fn build_card(entry: &CardSpec, base_dir: &Path, svg_side: u32) -> CardflowResult<Card> {
    let mut card = match &entry.image {
        Some(rel) => {
            let path = base_dir.join(rel);
            let image = load_image_file(&path, svg_side)?;
            let aspect = f64::from(image.height()) / f64::from(image.width());
            let (w, h) = match (entry.width, entry.height) {
                (Some(w), Some(h)) => (w, h),
                (Some(w), None) => (w, w * aspect),
                (None, Some(h)) => (h / aspect, h),
                (None, None) => (DEFAULT_CARD_WIDTH, DEFAULT_CARD_WIDTH * aspect),
            };
            Card::from(
                Picture::new(Arc::new(image))
                    .with_label(rel.display().to_string())
                    .with_size(w, h),
            )
        }
        None => {
            let w = entry.width.unwrap_or(DEFAULT_CARD_WIDTH);
            let h = entry.height.unwrap_or(w);
            Card::from(Rectangle::new(
                Point3D::new(-w / 2.0, -h / 2.0, 0.0),
                Point3D::new(w / 2.0, h / 2.0, 0.0),
                entry.color.unwrap_or(Rgba8::WHITE),
            ))
        }
    };

    let [x, y, z] = entry.location;
    let geometry = card.geometry_mut();
    geometry.location = Point3D::new(x, y, z);
    geometry.rotation = entry.rotation.matrix();
    Ok(card)
}

#[cfg(test)]
#[path = "../../tests/unit/config/scene_file.rs"]
mod tests;
