extern crate cl_math;
extern crate env_logger;
#[macro_use] extern crate log;

use std::f32::consts::PI;

use cl_math::{Mat, Vec3};
use cl_math::config::Settings;
use cl_math::debug;

const SETTINGS_PATH: &str = "cl_math.ini";

fn main() {
    env_logger::init();

    let settings = match Settings::load_or_default(SETTINGS_PATH) {
        Ok(settings) => settings,
        Err(e) => {
            error!("{}", e);
            Settings::default()
        }
    };

    let projection = Mat::ortho(-4., 4., -3., 3., 0.1, 100.);

    let view = Mat::look_at(
        Vec3::new(2., 3., 10.),
        Vec3::zero(),
        Vec3::up(),
    );

    let model = Mat::translation(1., 0., -2.)
        * Mat::rotation(0., 0.25 * PI, 0.)
        * Mat::scale(0.5, 0.5, 0.5);

    println!("Projection:");
    debug::print_with(&projection, &settings);
    println!("\nView:");
    debug::print_with(&view, &settings);
    println!("\nModel:");
    debug::print_with(&model, &settings);

    let mvp = projection * view * model;
    println!("\nModel-view-projection:");
    debug::print_with(&mvp, &settings);

    let corner = mvp.transform_point(Vec3::one());
    info!("Unit cube corner in clip space: {}", corner);

    let stdout = std::io::stdout();
    if let Err(e) = debug::write_vec3(&mut stdout.lock(), corner, settings.precision) {
        error!("{}", e);
    }
}
