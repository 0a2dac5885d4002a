use super::*;

fn front_scene(f: f64) -> Scene {
    Scene::new(
        Point3D::origin(),
        RotationMatrix::identity(),
        Point3D::new(0.0, 0.0, f),
    )
}

#[test]
fn point_on_axis_projects_to_window_center() {
    let scene = front_scene(2.0);
    for (w, h) in [(64, 64), (640, 480), (300, 900), (1, 7)] {
        let size = SurfaceSize::new(w, h).unwrap();
        let p = scene.project(&Point3D::new(0.0, 0.0, 2.0), size);
        assert_eq!(p.x, f64::from(w) / 2.0);
        assert_eq!(p.y, f64::from(h) / 2.0);
    }
}

#[test]
fn projection_retains_camera_depth() {
    let scene = Scene::new(
        Point3D::new(0.0, 0.0, 1.0),
        RotationMatrix::identity(),
        Point3D::new(0.0, 0.0, -1.0),
    );
    let size = SurfaceSize::new(100, 100).unwrap();
    let p = scene.project(&Point3D::new(0.25, 0.0, -3.0), size);
    assert_eq!(p.z, -4.0);
    // (0.25 * -1 / -4 + 1) / 2 * 100
    assert_eq!(p.x, 53.125);
}

#[test]
fn focal_depth_is_measured_from_the_focal_plane() {
    // Looking down -z with the focal plane one unit ahead.
    let down_neg_z = Scene::new(
        Point3D::new(0.0, 0.0, 1.0),
        RotationMatrix::identity(),
        Point3D::new(0.0, 0.0, -1.0),
    );
    assert_eq!(down_neg_z.focal_depth(-4.0), 3.0);
    assert_eq!(down_neg_z.focal_depth(-1.0), 0.0);

    // Looking down +z with the focal plane two units ahead.
    let down_pos_z = Scene::new(
        Point3D::new(0.0, 0.0, -2.0),
        RotationMatrix::identity(),
        Point3D::new(0.0, 0.0, 2.0),
    );
    assert_eq!(down_pos_z.focal_depth(5.0), 3.0);
    assert_eq!(down_pos_z.focal_depth(2.0), 0.0);
    assert_eq!(down_pos_z.focal_depth(0.5), -1.5);
}

#[test]
fn viewer_offset_shifts_projection() {
    let mut scene = front_scene(1.0);
    let size = SurfaceSize::new(64, 64).unwrap();
    let centered = scene.project(&Point3D::new(0.0, 0.0, 1.0), size);
    scene.viewer = Point3D::new(0.5, 0.0, 1.0);
    let shifted = scene.project(&Point3D::new(0.0, 0.0, 1.0), size);
    assert_eq!(centered.x - shifted.x, 16.0);
    assert_eq!(centered.y, shifted.y);
}

#[test]
fn cover_window_centres_on_both_axes() {
    let wide = ProjectionWindow::fit(SurfaceSize::new(200, 100).unwrap(), ProjectionFit::Cover);
    assert_eq!(wide.side, 200.0);
    assert_eq!(wide.x_offset, 0.0);
    // Equal overflow above and below.
    assert_eq!(wide.y_offset, -50.0);
    assert_eq!(-wide.y_offset, wide.side + wide.y_offset - 100.0);

    let tall = ProjectionWindow::fit(SurfaceSize::new(100, 300).unwrap(), ProjectionFit::Cover);
    assert_eq!(tall.side, 300.0);
    assert_eq!(tall.x_offset, -100.0);
    assert_eq!(tall.y_offset, 0.0);
}

#[test]
fn contain_window_letterboxes_with_equal_positive_margins() {
    let wide = ProjectionWindow::fit(SurfaceSize::new(200, 100).unwrap(), ProjectionFit::Contain);
    assert_eq!(wide.side, 100.0);
    assert!(wide.x_offset > 0.0);
    assert_eq!(wide.x_offset, 200.0 - wide.side - wide.x_offset);
    assert_eq!(wide.y_offset, 0.0);

    let tall = ProjectionWindow::fit(SurfaceSize::new(100, 300).unwrap(), ProjectionFit::Contain);
    assert!(tall.y_offset > 0.0);
    assert_eq!(tall.y_offset, 300.0 - tall.side - tall.y_offset);
    assert_eq!(tall.x_offset, 0.0);
}

#[test]
fn square_surface_has_no_margins() {
    for fit in [ProjectionFit::Cover, ProjectionFit::Contain] {
        let win = ProjectionWindow::fit(SurfaceSize::new(128, 128).unwrap(), fit);
        assert_eq!(win.x_offset, 0.0);
        assert_eq!(win.y_offset, 0.0);
        assert_eq!(win.to_surface(-1.0, 1.0), (0.0, 128.0));
    }
}

#[test]
fn camera_yaw_rotates_world_before_projection() {
    let scene = Scene::new(
        Point3D::origin(),
        RotationMatrix::about_y(std::f64::consts::FRAC_PI_2),
        Point3D::new(0.0, 0.0, 1.0),
    );
    let d = scene.to_camera(&Point3D::new(-1.0, 0.0, 0.0));
    assert!((d.z - 1.0).abs() < 1e-12);
    assert!(d.x.abs() < 1e-12);
}

#[test]
fn point_on_viewer_plane_is_not_finite() {
    let scene = front_scene(1.0);
    let p = scene.project(
        &Point3D::new(0.5, 0.0, 0.0),
        SurfaceSize::new(10, 10).unwrap(),
    );
    assert!(!p.x.is_finite());
}
