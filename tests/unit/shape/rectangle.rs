use image::RgbaImage;

use super::*;
use crate::geometry::rotation::RotationMatrix;

fn front_scene() -> Scene {
    Scene::new(
        Point3D::origin(),
        RotationMatrix::identity(),
        Point3D::new(0.0, 0.0, 1.0),
    )
}

#[test]
fn fills_projected_quad_with_colour() {
    let red = Rgba8::opaque(255, 0, 0);
    let mut rect = Rectangle::new(
        Point3D::new(-0.25, -0.25, 0.0),
        Point3D::new(0.25, 0.25, 0.0),
        red,
    );
    rect.geometry_mut().location = Point3D::new(0.0, 0.0, 1.0);

    let mut surface = RgbaImage::new(64, 64);
    rect.paint(&mut surface, &front_scene(), false, &Configuration::default())
        .unwrap();

    // Covers pixel centres 24.5..39.5 on both axes.
    assert_eq!(Surface::get_pixel(&surface, 24, 24), red);
    assert_eq!(Surface::get_pixel(&surface, 39, 39), red);
    assert_eq!(Surface::get_pixel(&surface, 23, 30), Rgba8::TRANSPARENT);
    assert_eq!(Surface::get_pixel(&surface, 40, 30), Rgba8::TRANSPARENT);
    assert!(rect.contains(Point::new(32.0, 32.0)));
}

#[test]
fn off_surface_rectangle_clears_cache() {
    let mut rect = Rectangle::new(
        Point3D::new(-0.25, -0.25, 0.0),
        Point3D::new(0.25, 0.25, 0.0),
        Rgba8::WHITE,
    );
    rect.geometry_mut().location = Point3D::new(0.0, 0.0, 1.0);
    let mut surface = RgbaImage::new(64, 64);
    rect.paint(&mut surface, &front_scene(), false, &Configuration::default())
        .unwrap();
    assert!(rect.render_state().quad().is_some());

    rect.geometry_mut().location = Point3D::new(-9.0, 0.0, 1.0);
    rect.paint(&mut surface, &front_scene(), false, &Configuration::default())
        .unwrap();
    assert!(rect.render_state().quad().is_none());
    assert!(!rect.contains(Point::new(32.0, 32.0)));
}
