mod app;
mod core;
mod input;
mod rendering;
mod state;
mod ui;

use macroquad::prelude::Conf;

fn window_conf() -> Conf {
    Conf {
        window_title: "Sylvaire Logo Studio".to_owned(),
        window_width: 960,
        window_height: 560,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    app::run().await;
}
