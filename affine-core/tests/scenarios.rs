//! End-to-end scenarios across the parameter holders, composer and projection.
use affine_core::{
    apply, Camera2D, Config, Mat3, Mat4, OrthographicBounds, Point, PointGroup, ProjectionParams,
    Rotation, Scale, ScaledPoint, Translation, Trs, Vec2, Vec3, Vec4,
};
use approx::assert_abs_diff_eq;

#[test]
fn translate_rotate_scale_at_origin() {
    let trs = Trs::new(Translation::new(3.0, 1.0), Rotation::new(0.0), Scale::new(2.0, 2.0));
    assert_eq!(apply(&trs, None, Vec2::ZERO), Vec2::new(3.0, 1.0));
}

#[test]
fn reapplying_parameters_is_idempotent() {
    let camera = Camera2D::new(Vec2::new(-3.0, 4.0), 0.5, 200.0);
    let mut group = PointGroup::with_points(
        Trs::new(Translation::new(1.0, 2.0), Rotation::new(-45.0), Scale::new(3.0, 0.5)),
        vec![
            ScaledPoint::new(Vec2::new(1.0, 1.0), Vec2::ONE),
            ScaledPoint::new(Vec2::new(-2.0, 0.5), Vec2::new(2.0, 2.0)),
        ],
    );
    group.update(Some(&camera));
    let first = group.points.clone();
    group.update(Some(&camera));
    assert_eq!(group.points, first);
}

#[test]
fn animated_rotation_traces_circle() {
    let mut trs = Trs::default();
    let mut point = Point::new(2.0, 0.0);
    let mut group = PointGroup::new(trs);
    group.add_point(point);
    for _ in 0..8 {
        trs.rotation.rotate(45.0);
        group.trs = trs;
        group.update(None);
        point = group.points[0];
        assert_abs_diff_eq!(point.transformed.length(), 2.0, epsilon = 1e-5);
    }
    // eight eighth-turns come back around
    assert_abs_diff_eq!(point.transformed.x, 2.0, epsilon = 1e-4);
    assert_abs_diff_eq!(point.transformed.y, 0.0, epsilon = 1e-4);
}

#[test]
fn camera_world_matrix_applies_after_model() {
    let trs = Trs::new(Translation::new(1.0, 0.0), Rotation::default(), Scale::default());
    let camera = Camera2D::new(Vec2::new(1.0, 0.0), 3.0, 0.0);
    // model -> (2, 0); rotate 0; zoom 3 -> (6, 0); pan -1 -> (5, 0)
    assert_eq!(apply(&trs, Some(&camera), Vec2::new(1.0, 0.0)), Vec2::new(5.0, 0.0));
}

#[test]
fn matrix_product_rows() {
    let a = Mat3::from_rows([[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]]);
    let b = Mat3::from_rows([[-1.0, 4.0, -7.0], [2.0, -5.0, 8.0], [-3.0, 6.0, -9.0]]);
    let c = a * b;
    assert_eq!(c.row0(), Vec3::new(-14.0, 26.0, -38.0));
    assert_eq!(c.row1(), Vec3::new(-16.0, 31.0, -46.0));
    assert_eq!(c.row2(), Vec3::new(-18.0, 36.0, -54.0));
}

#[test]
fn projection_from_config() {
    let text = r#"
projection:
  bounds: { near: 0.1, far: 100.0, left: -1.0, right: 1.0, top: 1.0, bottom: -1.0 }
"#;
    let config = Config::from_yaml_str(text).unwrap();
    let m = config.projection.try_matrix().unwrap();
    assert_eq!(m, Mat4::orthographic_core(&config.projection.bounds));
    assert_eq!(m.x_axis, Vec4::new(1.0, 0.0, 0.0, 0.0));
    assert_eq!(m.y_axis, Vec4::new(0.0, 1.0, 0.0, 0.0));
}

#[test]
fn projection_follows_camera_position() {
    let mut params = ProjectionParams::new(OrthographicBounds::symmetric(2.0, 2.0, 1.0, 3.0));
    let centre = params.project(Vec3::new(0.0, 0.0, -2.0));
    assert_abs_diff_eq!(centre.x, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(centre.z, 0.0, epsilon = 1e-6);

    params.translate(0.5, 0.0, 0.0);
    let moved = params.project(Vec3::new(0.0, 0.0, -2.0));
    assert_abs_diff_eq!(moved.x, 0.5, epsilon = 1e-6);
}
