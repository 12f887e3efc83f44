mod app;
mod phone;
mod ui;
mod wa;

use adw::prelude::*;
use adw::Application;

fn main() {
    env_logger::init();

    let app = Application::builder()
        .application_id("com.example.ZapsendGtk")
        .build();
    app.connect_activate(|app| {
        crate::app::build_ui(app);
    });
    app.run();
}
