use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::Settings;
use crate::controller::events::UiEvent;
use crate::controller::reducer::apply_event;
use crate::ui::page_shell::PageShell;
use crate::ui::search_widget::SearchWidget;
use crate::ui::theme;

pub struct DesktopGuiApp {
    ui_rx: Receiver<UiEvent>,
    shell: PageShell,
    search: SearchWidget,
}

impl DesktopGuiApp {
    pub fn bootstrap(
        ctx: &egui::Context,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        settings: &Settings,
    ) -> Self {
        theme::apply(ctx);
        Self {
            ui_rx,
            shell: PageShell::new(ctx, settings.title.clone(), settings.logo_path.as_deref()),
            search: SearchWidget::new(cmd_tx),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            apply_event(self.search.state_mut(), event);
        }
    }
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let search = &mut self.search;
        self.shell.show(ctx, |ui| search.show(ui));

        // Poll the worker while a request is in flight.
        if search.state().is_loading() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
