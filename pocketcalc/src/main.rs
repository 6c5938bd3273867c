//! pocketcalc — a pocket calculator
//!
//! Digit entry, one pending operation at a time, arbitrary-precision
//! decimal arithmetic. All calculator logic lives in `calccore`.

mod app;
mod theme;

use app::CalcApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([260.0, 340.0])
            .with_resizable(false)
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(|cc| {
            theme::CalcTheme::default().apply(&cc.egui_ctx);
            Box::new(CalcApp::new(cc))
        }),
    )
}
