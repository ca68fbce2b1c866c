extern crate cl_math;
#[macro_use] extern crate approx;

use std::f32::consts::PI;

use cl_math::{Mat, Vec2, Vec3, Vec4};
use cl_math::config::Settings;

fn settings() -> Settings {
    Settings::parse("[compare]\ntolerance = 0.0001\n").unwrap()
}

#[test]
fn model_view_chain() {
    let tolerance = settings().tolerance;

    let model = Mat::translation_vec(Vec3::new(0., 0., -5.))
        * Mat::rotation_y(0.5 * PI)
        * Mat::scale_vec(Vec3::new(2., 2., 2.));

    // Scale, rotate x -> -z, then push back
    let point = model.transform_point(Vec3::right());
    assert!(point.approx_eq(Vec3::new(0., 0., -7.), tolerance));

    let view = Mat::look_at(Vec3::new(0., 0., 1.), Vec3::zero(), Vec3::up());
    let point = view.transform_point(point);
    assert!(point.approx_eq(Vec3::new(0., 0., -8.), tolerance));

    // Composition order matches applying each stage in turn
    let combined = (view * model).transform_point(Vec3::right());
    assert!(combined.approx_eq(point, tolerance));
}

#[test]
fn ortho_identity_except_depth() {
    let mat = Mat::ortho(-1., 1., -1., 1., -1., 1.);
    let rows = mat.to_rows();

    assert_abs_diff_eq!(rows[0][0], 1.);
    assert_abs_diff_eq!(rows[1][1], 1.);
    assert_abs_diff_eq!(rows[2][2], -1.);
    assert_abs_diff_eq!(rows[3][3], 1.);

    for row in rows.iter().take(3) {
        assert_abs_diff_eq!(row[3], 0.);
    }
}

#[test]
fn ortho_screen_space() {
    let projection = Mat::ortho(0., 1280., 720., 0., -1., 1.);

    // Top-left pixel maps to the top-left of clip space
    let corner = projection * Vec4::point(Vec3::zero());
    assert_abs_diff_eq!(corner.x, -1., epsilon = 0.0001);
    assert_abs_diff_eq!(corner.y, 1., epsilon = 0.0001);

    let center = projection.transform_point(Vec3::new(640., 360., 0.));
    assert_abs_diff_eq!(center.x, 0., epsilon = 0.0001);
    assert_abs_diff_eq!(center.y, 0., epsilon = 0.0001);
}

#[test]
fn look_at_orthonormal() {
    let view = Mat::look_at(
        Vec3::new(3., 4., -2.),
        Vec3::new(-1., 0., 5.),
        Vec3::new(0.2, 1., 0.1),
    );

    let rows = view.to_rows();
    let basis: Vec<Vec3> = rows.iter()
        .take(3)
        .map(|row| Vec3::new(row[0], row[1], row[2]))
        .collect();

    for (i, a) in basis.iter().enumerate() {
        assert_relative_eq!(a.mag(), 1., epsilon = 0.0001);

        for b in basis.iter().skip(i + 1) {
            assert_abs_diff_eq!(a.dot(*b), 0., epsilon = 0.0001);
        }
    }

    // The eye maps to the origin of view space
    let eye = view.transform_point(Vec3::new(3., 4., -2.));
    assert!(eye.approx_eq(Vec3::zero(), 0.0001));
}

#[test]
fn rotations_preserve_length() {
    let vec = Vec3::new(1., -2., 3.);

    for step in 0..16 {
        let angle = step as f32 * PI / 8.;

        for mat in [
            Mat::rotation_x(angle),
            Mat::rotation_y(angle),
            Mat::rotation_z(angle),
        ].iter() {
            assert_relative_eq!((*mat * vec).mag(), vec.mag(), epsilon = 0.0001);
        }
    }
}

#[test]
fn planar_helpers() {
    let mat = Mat::translation_2d(Vec2::new(3., -1.))
        * Mat::scale_2d(Vec2::new(2., 4.));

    let point = mat * Vec4::new(1., 1., 7., 1.);

    assert_abs_diff_eq!(point.x, 5.);
    assert_abs_diff_eq!(point.y, 3.);
    assert_abs_diff_eq!(point.z, 7.);
    assert_abs_diff_eq!(point.w, 1.);

    let a = Vec2::new(2., 0.);
    let b = Vec2::new(0., -3.);

    assert_abs_diff_eq!(a.signed_angle(b), -0.5 * PI, epsilon = 0.0001);
    assert_abs_diff_eq!(a.dist(b), 13f32.sqrt());
}
