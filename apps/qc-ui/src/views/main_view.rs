//! Main menu screen.

use qc_app::{Event, NavController};

#[derive(Default)]
pub struct MainView;

impl MainView {
    pub fn show(&mut self, ui: &mut egui::Ui, nav: &NavController) -> Option<Event> {
        let mut event = None;

        ui.horizontal(|ui| {
            ui.label(format!("User: {}", nav.session().current_user));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🔒 Lock").clicked() {
                    event = Some(Event::LockSession);
                }
            });
        });
        ui.separator();

        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            if ui
                .add_sized(
                    [400.0, 110.0],
                    egui::Button::new("New Experiment\nStart a new experiment run"),
                )
                .clicked()
            {
                event = Some(Event::OpenPretest);
            }
            ui.add_space(20.0);
            if ui
                .add_sized([400.0, 110.0], egui::Button::new("History\nView past results"))
                .clicked()
            {
                event = Some(Event::OpenReport);
            }
        });

        event
    }
}
