#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Windows release: hide console window
use {
    clap::Parser,
    eframe::NativeOptions,
    initiative_tracker::{Cli, PERSISTENCE, run_app},
    std::{panic, path::PathBuf},
};

fn main() -> eframe::Result {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("initiative_tracker"), my_code_level)
        .init();

    let args = Cli::parse();
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(PERSISTENCE.app.state_path)),
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([520.0, 720.0])
            .with_title("Initiative Tracker"),
        ..Default::default()
    };

    eframe::run_native(
        "Initiative Tracker",
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, args)))),
    )
}
