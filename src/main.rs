use eframe::egui;
use longhaul_dashboard::app::DashboardApp;
use longhaul_dashboard::config::DashboardConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::from_env();
    log::debug!("startup config: {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Long Haul Operations – Order Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(&config)))),
    )
}
