//! Query input, search button, notice block and result list.

use crossbeam_channel::Sender;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::orchestration::submit_search;
use crate::controller::reducer::{SearchNotice, SearchTrigger, SearchWidgetState};
use crate::ui::profile_card::{results_header, ProfileCard};
use crate::ui::theme;

pub const QUERY_HINT: &str = "Ex: What profiles are from Stockhom, Sweden? ...";
const INPUT_ID: &str = "search_query_input";
const ROW_HEIGHT: f32 = 36.0;
const BUTTON_WIDTH: f32 = 120.0;

pub struct SearchWidget {
    state: SearchWidgetState,
    cmd_tx: Sender<BackendCommand>,
}

impl SearchWidget {
    pub fn new(cmd_tx: Sender<BackendCommand>) -> Self {
        Self {
            state: SearchWidgetState::new(),
            cmd_tx,
        }
    }

    pub fn state(&self) -> &SearchWidgetState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SearchWidgetState {
        &mut self.state
    }

    pub fn submit(&mut self, trigger: SearchTrigger) {
        submit_search(&mut self.state, trigger, &self.cmd_tx);
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        self.show_query_row(ui);

        if let Some(notice) = self.state.notice() {
            ui.add_space(8.0);
            show_notice(ui, notice);
        }

        let results = self.state.results();
        if !results.is_empty() {
            ui.add_space(16.0);
            ui.heading(results_header(results.len()));
            ui.add_space(8.0);
            egui::ScrollArea::vertical()
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    for record in results {
                        ProfileCard::from_record(record).show(ui);
                        ui.add_space(8.0);
                    }
                });
        }
    }

    fn show_query_row(&mut self, ui: &mut egui::Ui) {
        let mut trigger = None;

        ui.horizontal(|ui| {
            let input_width = (ui.available_width() - BUTTON_WIDTH - ui.spacing().item_spacing.x)
                .max(120.0);
            let edit = egui::TextEdit::singleline(self.state.query_mut())
                .id_salt(INPUT_ID)
                .hint_text(QUERY_HINT)
                .vertical_align(egui::Align::Center);
            let response = ui.add_sized([input_width, ROW_HEIGHT], edit);

            // Enter is accepted while loading; only the button is disabled.
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                trigger = Some(SearchTrigger::EnterKey);
                response.request_focus();
            }

            let label = egui::RichText::new(self.state.action_label()).strong();
            let button = egui::Button::new(label).min_size(egui::vec2(BUTTON_WIDTH, ROW_HEIGHT));
            if ui.add_enabled(self.state.action_enabled(), button).clicked() {
                trigger = Some(SearchTrigger::Button);
            }
        });

        if let Some(trigger) = trigger {
            self.submit(trigger);
        }
    }
}

fn show_notice(ui: &mut egui::Ui, notice: SearchNotice) {
    let (fill, text) = theme::error_block_colors(ui.visuals());
    egui::Frame::NONE
        .fill(fill)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(notice.message()).color(text));
        });
}
