use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

mod resize;

use resize::settings::{ResizeSettings, CURSOR_FILES};
use resize::thumbnail::resize_all;

fn main() {
    // Diagnostics go to stderr; stdout carries one status line per file
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let settings = ResizeSettings::default();
    let reports = resize_all(&CURSOR_FILES, &settings);

    for report in &reports {
        println!("{}", report);
    }

    let failed = reports.iter().filter(|r| !r.is_ok()).count();
    if failed > 0 {
        log::warn!("{} of {} cursor images could not be resized", failed, reports.len());
    }
}
