//! Desktop simulator for the tunable-white fixture controller
//!
//! Wires the controller to simulated hardware: a quadrature encoder, the mode
//! button, the serial keypress interface, a multiplexed seven-segment display
//! and the two PWM output modules.

use std::fmt::Write as _;
use std::time::Instant as StdInstant;

use eframe::egui::{self};
use tunable_white::color::preview_color;
use tunable_white::diagnostics::{write_duty_table, write_help, write_led_summary, write_status};
use tunable_white::{
    ButtonLevel, Controller, DigitPosition, DutyPair, FixtureConfig, Instant,
    InputChannel, InputFrontend, KeyCommand, KeyResponse, LedChannel, Module, PwmSink,
    ScanScheduler, SegmentSink, SharedDisplay,
};

/// Input channel size
const INPUT_CHANNEL_SIZE: usize = 16;

/// Encoder readings `(A << 1) | B` for one clockwise cycle
const GRAY_SEQUENCE: [u8; 4] = [0b00, 0b10, 0b11, 0b01];

/// Height of one rendered digit in pixels
const DIGIT_HEIGHT: f32 = 96.0;

/// Segment stroke width in pixels
const SEGMENT_WIDTH: f32 = 10.0;

/// Size of each module swatch
const SWATCH_SIZE: f32 = 120.0;

/// Maximum number of lines kept in the console
const CONSOLE_LINES: usize = 200;

/// Static input channel between the simulated interrupt and the controller
static INPUTS: InputChannel<INPUT_CHANNEL_SIZE> = InputChannel::<INPUT_CHANNEL_SIZE>::new();

/// Display buffer shared with the scan timer
static DISPLAY: SharedDisplay = SharedDisplay::new();

/// PWM sink that remembers the last duty of every channel
#[derive(Default)]
struct SimPwm {
    duty: [[u16; 2]; 2],
}

impl SimPwm {
    fn module(&self, module: Module) -> DutyPair {
        let duty = self.duty[module.index()];
        DutyPair {
            warm: duty[LedChannel::Warm.index()],
            cold: duty[LedChannel::Cold.index()],
        }
    }
}

impl PwmSink for SimPwm {
    fn set_duty(&mut self, module: Module, channel: LedChannel, duty: u16) {
        self.duty[module.index()][channel.index()] = duty;
    }
}

/// Segment lines with simulated persistence of vision
///
/// Each digit keeps the pattern it was last lit with.
#[derive(Default)]
struct SimSegments {
    pattern: u8,
    lit: [u8; 2],
    scans: u64,
}

impl SegmentSink for SimSegments {
    fn deselect_all(&mut self) {}

    fn write_segments(&mut self, pattern: u8) {
        self.pattern = pattern;
    }

    fn select(&mut self, position: DigitPosition) {
        self.lit[position.index()] = self.pattern;
        self.scans += 1;
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 620.0])
            .with_title("Tunable White Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "tunable-white-preview",
        options,
        Box::new(|_cc| match PreviewApp::new() {
            Ok(app) => Ok(Box::new(app) as Box<dyn eframe::App>),
            Err(err) => Err(format!("cannot build duty table: {err}").into()),
        }),
    )
}

struct PreviewApp {
    config: FixtureConfig,
    /// The controller instance
    controller: Controller<'static, SimPwm, INPUT_CHANNEL_SIZE>,
    /// Interrupt side of the input path
    frontend: InputFrontend<'static, INPUT_CHANNEL_SIZE>,
    /// Digit scan timer
    scanner: ScanScheduler<'static, SimSegments>,

    // Simulation state
    /// Position in the Gray sequence
    encoder_phase: usize,
    /// Whether the mode button is held down
    button_held: bool,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Time of the next debounce tick
    next_debounce_ms: u64,
    /// Time of the next digit scan
    next_scan_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Serial console output
    console: Vec<String>,
    /// Duty table dump
    table_dump: String,
}

impl PreviewApp {
    fn new() -> Result<Self, tunable_white::TableError> {
        let config = FixtureConfig::DEFAULT;
        let controller =
            Controller::new(&config, SimPwm::default(), &DISPLAY, INPUTS.receiver())?;
        let scanner = ScanScheduler::with_period(
            &DISPLAY,
            SimSegments::default(),
            config.timings.display_refresh,
        );

        let mut table_dump = String::new();
        let _ = write_duty_table(&mut table_dump, controller.table());

        let mut app = Self {
            config,
            controller,
            frontend: InputFrontend::new(INPUTS.sender()),
            scanner,
            encoder_phase: 0,
            button_held: false,
            t_ms: 0,
            next_debounce_ms: 0,
            next_scan_ms: 0,
            last_frame: StdInstant::now(),
            console: Vec::new(),
            table_dump,
        };

        let mut banner = String::new();
        let _ = write_led_summary(&mut banner, &app.config);
        let _ = write_help(&mut banner);
        app.print(&banner);
        Ok(app)
    }

    /// Append text to the console
    fn print(&mut self, text: &str) {
        self.console.extend(text.lines().map(str::to_owned));
        if self.console.len() > CONSOLE_LINES {
            let excess = self.console.len() - CONSOLE_LINES;
            self.console.drain(..excess);
        }
    }

    /// Move the encoder by one transition, as the edge interrupt would see it
    fn turn(&mut self, clockwise: bool) {
        let len = GRAY_SEQUENCE.len();
        self.encoder_phase = if clockwise {
            (self.encoder_phase + 1) % len
        } else {
            (self.encoder_phase + len - 1) % len
        };
        self.frontend.on_encoder_edge(GRAY_SEQUENCE[self.encoder_phase]);
    }

    fn key(&mut self, key: char) {
        let Some(command) = KeyCommand::from_char(key) else {
            return;
        };
        let mut text = String::new();
        match self.controller.handle_key(command) {
            KeyResponse::Help => {
                let _ = write_help(&mut text);
            }
            KeyResponse::Lighting(state) => {
                let _ = write_status(&mut text, state);
            }
            KeyResponse::Percent { channel, percent } => {
                let _ = writeln!(text, "[0][{}] = {} percent", channel.as_str(), percent);
            }
        }
        self.print(&text);
    }

    /// Advance synthetic time, running the scan timer and debounce ticks
    fn advance(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        #[allow(clippy::cast_possible_truncation)]
        let delta_ms = delta.as_millis().min(1000) as u64;
        let target = self.t_ms + delta_ms;

        let processed = self.controller.process_pending();
        if processed > 0 {
            let mut text = String::new();
            let _ = write_status(&mut text, self.controller.state());
            self.print(&text);
        }

        while self.next_debounce_ms <= target {
            let level = if self.button_held {
                ButtonLevel::Held
            } else {
                ButtonLevel::Released
            };
            self.controller.debounce_tick(level);
            self.next_debounce_ms += self.config.timings.debounce_tick.as_millis();
        }

        while self.next_scan_ms <= target {
            let result = self.scanner.tick(Instant::from_millis(self.next_scan_ms));
            self.next_scan_ms = result.next_deadline.as_millis().max(self.next_scan_ms + 1);
        }
        self.t_ms = target;
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Keyboard: serial keys as text, arrows as the encoder, space as the button
        let (typed, right, left, space_down, space_pressed) = ctx.input(|i| {
            let typed: Vec<char> = i
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Text(text) => Some(text.chars().collect::<Vec<_>>()),
                    _ => None,
                })
                .flatten()
                .collect();
            (
                typed,
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_down(egui::Key::Space),
                i.key_pressed(egui::Key::Space),
            )
        });
        for key in typed {
            self.key(key);
        }
        if right {
            self.turn(true);
        }
        if left {
            self.turn(false);
        }
        if space_pressed {
            self.frontend.on_button_edge();
        }

        ctx.request_repaint_after(std::time::Duration::from_millis(16));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <Encoder>
                ui.vertical(|ui| {
                    ui.label("Encoder (←/→, space):");
                    ui.horizontal(|ui| {
                        if ui.button("⟲ CCW").clicked() {
                            self.turn(false);
                        }
                        if ui.button("⟳ CW").clicked() {
                            self.turn(true);
                        }
                        let mode_button = ui.button("Mode");
                        if mode_button.clicked() {
                            self.frontend.on_button_edge();
                        }
                        self.button_held = space_down || mode_button.is_pointer_button_down_on();
                    });
                    ui.label(format!("mode: {}", self.controller.mode().as_str()));
                    ui.label(format!("button: {:?}", self.controller.button_state()));
                    ui.label(format!(
                        "raw: intensity {} / color {}",
                        self.controller.intensity_steps().raw(),
                        self.controller.color_steps().raw()
                    ));
                    ui.label(format!("dropped events: {}", INPUTS.overflows()));
                });
                // </Encoder>
                ui.add_space(24.0);
                // <SevenSegment>
                let lit = self.scanner.sink().lit;
                let (response, painter) = ui.allocate_painter(
                    egui::vec2(DIGIT_HEIGHT * 1.4, DIGIT_HEIGHT + 8.0),
                    egui::Sense::hover(),
                );
                painter.rect_filled(response.rect, 6.0, egui::Color32::from_gray(20));
                for (slot, pattern) in lit.iter().enumerate() {
                    #[allow(clippy::cast_precision_loss)]
                    let origin = response.rect.min
                        + egui::vec2(8.0 + slot as f32 * DIGIT_HEIGHT * 0.65, 4.0);
                    draw_digit(&painter, origin, *pattern);
                }
                // </SevenSegment>
            });

            ui.add_space(16.0);

            // === Output modules ===
            ui.horizontal(|ui| {
                for module in Module::ALL {
                    let duty = self.controller.output().sink().module(module);
                    let color = preview_color(&self.config, duty);
                    ui.vertical(|ui| {
                        let (response, painter) = ui.allocate_painter(
                            egui::vec2(SWATCH_SIZE, SWATCH_SIZE),
                            egui::Sense::hover(),
                        );
                        painter.rect_filled(
                            response.rect,
                            8.0,
                            egui::Color32::from_rgb(color.r, color.g, color.b),
                        );
                        ui.label(format!("module {}", module.index()));
                        ui.monospace(format!("warm {:>4}", duty.warm));
                        ui.monospace(format!("cold {:>4}", duty.cold));
                    });
                    ui.add_space(16.0);
                }
                let state = self.controller.state();
                ui.vertical(|ui| {
                    ui.label(format!("color: {}00 K", state.color));
                    ui.label(format!("brightness: {}", state.intensity));
                    ui.label(format!("t = {} ms", self.t_ms));
                    ui.label(format!("scans: {}", self.scanner.sink().scans));
                });
            });

            ui.add_space(16.0);

            ui.collapsing("LED lookup table", |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.table_dump.as_str())
                        .font(egui::TextStyle::Monospace)
                        .desired_width(f32::INFINITY),
                );
            });

            ui.separator();
            ui.label("Serial console (h, b, c/d, q/a, w/s):");
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for line in &self.console {
                        ui.monospace(line);
                    }
                });
        });

        self.advance();
    }
}

/// Paint one digit from its segment pattern
fn draw_digit(painter: &egui::Painter, origin: egui::Pos2, pattern: u8) {
    let w = DIGIT_HEIGHT * 0.5;
    let h = DIGIT_HEIGHT / 2.0 - SEGMENT_WIDTH / 2.0;
    let t = SEGMENT_WIDTH;
    let horizontal = |x: f32, y: f32| {
        egui::Rect::from_min_size(origin + egui::vec2(x + t, y), egui::vec2(w - 2.0 * t, t))
    };
    let vertical = |x: f32, y: f32| {
        egui::Rect::from_min_size(origin + egui::vec2(x, y + t), egui::vec2(t, h - t))
    };
    // Segments A..G, then the decimal point
    let segments = [
        horizontal(0.0, 0.0),
        vertical(w - t, 0.0),
        vertical(w - t, h),
        horizontal(0.0, 2.0 * h),
        vertical(0.0, h),
        vertical(0.0, 0.0),
        horizontal(0.0, h),
        egui::Rect::from_min_size(origin + egui::vec2(w + 2.0, 2.0 * h), egui::vec2(t, t)),
    ];
    for (bit, rect) in segments.iter().enumerate() {
        let on = pattern & (1 << bit) != 0;
        let color = if on {
            egui::Color32::from_rgb(255, 40, 30)
        } else {
            egui::Color32::from_rgb(50, 20, 20)
        };
        painter.rect_filled(*rect, 2.0, color);
    }
}
