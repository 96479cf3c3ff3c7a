//! Experiment setup and instruction screens.

use qc_app::{Event, NavController};

/// Project name entry. An empty name is rejected in place.
#[derive(Default)]
pub struct PretestView {
    project_name: String,
}

impl PretestView {
    pub fn show(&mut self, ui: &mut egui::Ui, _nav: &NavController) -> Option<Event> {
        let mut event = None;

        if ui.button("← Back").clicked() {
            event = Some(Event::Back);
        }

        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            ui.heading("Experiment Setup");
            ui.add_space(30.0);

            ui.add_sized(
                [320.0, 40.0],
                egui::TextEdit::singleline(&mut self.project_name).hint_text("Project Name"),
            );

            ui.add_space(30.0);
            if ui
                .add_sized([240.0, 50.0], egui::Button::new("Start"))
                .clicked()
            {
                event = Some(Event::SubmitProject {
                    name: self.project_name.clone(),
                });
            }
        });

        event
    }
}

#[derive(Default)]
pub struct InstructionView;

impl InstructionView {
    pub fn show(&mut self, ui: &mut egui::Ui, _nav: &NavController) -> Option<Event> {
        let mut event = None;

        if ui.button("← Back").clicked() {
            event = Some(Event::Back);
        }

        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            ui.heading("Instructions");
            ui.add_space(30.0);
            ui.label("1. Load samples");
            ui.label("2. Check system");
            ui.label("3. Click Continue");

            ui.add_space(40.0);
            if ui
                .add_sized([240.0, 50.0], egui::Button::new("Continue"))
                .clicked()
            {
                event = Some(Event::ContinueToRun);
            }
        });

        event
    }
}
