use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use rand::{rngs::StdRng, SeedableRng};
use shared::domain::FactTrigger;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::shell::{Panel, ShellState};
use crate::ui::theme::{self, ColorTransition};
use crate::ui::transitions::{Presence, PresenceMode, Transition};

const CARD_MAX_WIDTH: f32 = 672.0;
const CONTENT_MIN_HEIGHT: f32 = 128.0;
const REFRESH_LABEL: &str = "Generate New Fact";

pub struct FactWidgetApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    title: String,
    shell: ShellState,
    rng: StdRng,
    mounted: bool,

    background: ColorTransition,
    card: Presence<FactTrigger>,
    content: Presence<Panel>,
}

impl FactWidgetApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        title: impl Into<String>,
    ) -> Self {
        let mut rng = StdRng::from_entropy();
        let shell = ShellState::new(&mut rng);
        let background = ColorTransition::settled(shell.background().to_color32());
        Self {
            cmd_tx,
            ui_rx,
            title: title.into(),
            shell,
            rng,
            mounted: false,
            background,
            card: Presence::new(Transition::CARD, PresenceMode::Replace),
            content: Presence::new(Transition::FADE, PresenceMode::Wait),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.shell.apply(event);
        }
    }

    fn refresh(&mut self) {
        self.shell.refresh(&self.cmd_tx, &mut self.rng);
    }

    fn show_card(&mut self, ui: &mut egui::Ui, now: f64) {
        let avail = ui.available_size();
        let card_width = (avail.x - 32.0).clamp(240.0, CARD_MAX_WIDTH);
        let (_, card_pose) = self.card.frame(&self.shell.trigger(), now);
        let (panel, content_pose) = self.content.frame(&self.shell.panel(), now);

        let top_space = (avail.y * 0.25).clamp(16.0, 220.0);
        ui.add_space(top_space + card_pose.offset_y);

        ui.vertical_centered(|ui| {
            ui.set_max_width(card_width);

            ui.scope(|ui| {
                ui.multiply_opacity(card_pose.opacity);
                egui::Frame::NONE
                    .fill(theme::CARD_FILL)
                    .corner_radius(8.0)
                    .stroke(egui::Stroke::new(1.0, egui::Color32::from_black_alpha(24)))
                    .inner_margin(egui::Margin::same(32))
                    .show(ui, |ui| {
                        ui.set_width(card_width - 64.0);
                        ui.vertical_centered(|ui| {
                            ui.label(
                                egui::RichText::new(&self.title)
                                    .size(30.0)
                                    .strong()
                                    .color(theme::HEADING_TEXT),
                            );
                            ui.add_space(24.0);
                            ui.scope(|ui| {
                                ui.multiply_opacity(content_pose.opacity);
                                show_panel(ui, &panel);
                            });
                        });
                    });
            });

            ui.add_space((24.0 - card_pose.offset_y).max(0.0));

            let button = egui::Button::new(
                egui::RichText::new(REFRESH_LABEL)
                    .strong()
                    .color(theme::HEADING_TEXT),
            )
            .fill(egui::Color32::WHITE)
            .min_size(egui::vec2(180.0, 36.0));
            if ui.add_enabled(self.shell.refresh_enabled(), button).clicked() {
                self.refresh();
            }

            if let Some(status) = self.shell.status() {
                ui.add_space(12.0);
                ui.label(egui::RichText::new(status).small().color(theme::ERROR_TEXT));
            }
        });
    }
}

fn show_panel(ui: &mut egui::Ui, panel: &Panel) {
    match panel {
        Panel::Empty => {
            ui.add_space(CONTENT_MIN_HEIGHT);
        }
        Panel::Loading => {
            ui.add_sized(
                [ui.available_width(), CONTENT_MIN_HEIGHT],
                egui::Spinner::new().size(32.0).color(theme::SPINNER),
            );
        }
        Panel::Error(message) => {
            ui.label(egui::RichText::new(format!("Error: {message}")).color(theme::ERROR_TEXT));
        }
        Panel::Fact(text) => {
            ui.label(
                egui::RichText::new(text)
                    .size(20.0)
                    .color(theme::BODY_TEXT),
            );
            ui.add_space(24.0);
        }
    }
}

impl eframe::App for FactWidgetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        if !self.mounted {
            self.mounted = true;
            self.refresh();
        }

        let now = ctx.input(|i| i.time);
        self.background.retarget(self.shell.background().to_color32(), now);
        let fill = self.background.sample(now);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(fill).inner_margin(egui::Margin::same(16)))
            .show(ctx, |ui| self.show_card(ui, now));

        if self.card.is_animating()
            || self.content.is_animating()
            || !self.background.is_settled(now)
        {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
