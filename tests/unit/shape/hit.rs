use super::*;

fn square() -> ProjectedQuad {
    ProjectedQuad::from_xy([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
}

#[test]
fn axis_aligned_quad_hit_test() {
    let q = square();
    assert!(q.contains(Point::new(5.0, 5.0)));
    assert!(!q.contains(Point::new(15.0, 5.0)));
    assert!(!q.contains(Point::new(5.0, -0.5)));
}

#[test]
fn hidden_state_never_hits() {
    let visible = RenderState::Visible(square());
    assert!(visible.contains(Point::new(5.0, 5.0)));

    let cleared = RenderState::Hidden;
    assert!(!cleared.contains(Point::new(5.0, 5.0)));
    assert!(cleared.quad().is_none());
}

#[test]
fn winding_direction_does_not_matter() {
    let q = ProjectedQuad::from_xy([(0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]);
    assert!(q.contains(Point::new(2.0, 8.0)));
    assert!(!q.contains(Point::new(-2.0, 8.0)));
}

#[test]
fn trapezoid_respects_slanted_edges() {
    // Right edge shorter than left, as a card turned away from the viewer.
    let q = ProjectedQuad::from_xy([(0.0, 0.0), (10.0, 2.0), (10.0, 8.0), (0.0, 10.0)]);
    assert!(q.contains(Point::new(9.0, 5.0)));
    assert!(!q.contains(Point::new(9.0, 1.0)));
    assert!(!q.contains(Point::new(9.0, 9.5)));
    assert!(q.contains(Point::new(1.0, 0.5)));
}
