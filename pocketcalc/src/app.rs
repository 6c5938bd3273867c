//! Calculator application shell.
//!
//! Renders the display and the button grid, classifies every press
//! into a `calccore` action, and re-reads the display afterwards.
//! The shell owns no arithmetic.

use calccore::{Action, CalcError, Operation, Session};
use egui::{Context, Key};

use crate::theme::InkColors;

/// The 5x4 button grid. `(`, `)`, `.`, and `%` are rendered
/// for layout fidelity but carry no action; the classifier rejects
/// them and the session stays untouched.
const BUTTON_ROWS: [[&str; 4]; 5] = [
    ["C", "(", ")", "/"],
    ["7", "8", "9", "*"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
    ["0", ".", "%", "="],
];

pub struct CalcApp {
    session: Session,
}

impl CalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            session: Session::new(),
        }
    }

    /// Apply an already-classified action. Rejected actions leave the
    /// display unchanged and are logged to stderr.
    fn press(&mut self, action: Action) {
        if let Err(err) = self.session.apply(action) {
            log_rejection(&err);
        }
    }

    /// Classify a button label and apply it.
    fn press_label(&mut self, label: &str) {
        match Action::classify(label) {
            Ok(action) => self.press(action),
            Err(err) => log_rejection(&err),
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // Digit keys (shift-modified number keys are operators)
            if !i.modifiers.shift {
                for d in 0..=9u8 {
                    if i.key_pressed(digit_key(d)) {
                        self.press(Action::Digit(d));
                    }
                }
            }

            // Operations
            if i.key_pressed(Key::Plus) || (i.modifiers.shift && i.key_pressed(Key::Equals)) {
                self.press(Action::Operator(Operation::Add));
            }
            if i.key_pressed(Key::Minus) {
                self.press(Action::Operator(Operation::Subtract));
            }
            if i.modifiers.shift && i.key_pressed(Key::Num8) {
                self.press(Action::Operator(Operation::Multiply));
            }
            if i.key_pressed(Key::Slash) {
                self.press(Action::Operator(Operation::Divide));
            }

            // Enter/equals
            if i.key_pressed(Key::Enter) || (!i.modifiers.shift && i.key_pressed(Key::Equals)) {
                self.press(Action::Equals);
            }

            // Clear
            if i.key_pressed(Key::Escape) || i.key_pressed(Key::C) {
                self.press(Action::Clear);
            }
        });
    }

    fn render_button(&self, ui: &mut egui::Ui, label: &str, width: f32, height: f32) -> bool {
        ui.add_sized([width, height], egui::Button::new(label)).clicked()
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let display_height = 48.0;
        egui::Frame::none()
            .fill(InkColors::WHITE)
            .stroke(egui::Stroke::new(1.0, InkColors::BLACK))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
            .show(ui, |ui| {
                ui.set_min_height(display_height);
                ui.set_max_height(display_height);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.session.display())
                            .font(egui::FontId::proportional(28.0))
                            .strong(),
                    );
                });
            });
    }

    fn render_buttons(&mut self, ui: &mut egui::Ui) {
        let btn_w = (ui.available_width() - 24.0) / 4.0;
        let btn_h = 38.0;

        for row in BUTTON_ROWS {
            ui.horizontal(|ui| {
                for label in row {
                    if self.render_button(ui, label, btn_w, btn_h) {
                        self.press_label(label);
                    }
                }
            });
        }
    }
}

impl eframe::App for CalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(InkColors::WHITE)
                    .inner_margin(egui::Margin::same(8.0)),
            )
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(8.0);
                self.render_buttons(ui);
            });
    }
}

fn log_rejection(err: &CalcError) {
    eprintln!("[pocketcalc] rejected input: {err}");
}

fn digit_key(d: u8) -> Key {
    match d {
        1 => Key::Num1,
        2 => Key::Num2,
        3 => Key::Num3,
        4 => Key::Num4,
        5 => Key::Num5,
        6 => Key::Num6,
        7 => Key::Num7,
        8 => Key::Num8,
        9 => Key::Num9,
        _ => Key::Num0,
    }
}
