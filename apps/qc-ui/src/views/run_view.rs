//! Run screen: progress readout and start/stop controls.
//!
//! Back, start, and view-report are disabled while the simulator is
//! running; the controller guards the same transitions as a second line of
//! defense.

use qc_app::{Event, NavController};

#[derive(Default)]
pub struct RunView;

impl RunView {
    pub fn show(&mut self, ui: &mut egui::Ui, nav: &NavController) -> Option<Event> {
        let mut event = None;
        let sim = nav.sim();
        let locked = sim.is_running();

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!locked, egui::Button::new("← Back"))
                .clicked()
            {
                event = Some(Event::Back);
            }
            ui.label(if locked { "Running..." } else { "Ready" });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(locked, egui::Button::new("⏹ Stop"))
                    .clicked()
                {
                    event = Some(Event::StopRun);
                }
            });
        });
        ui.separator();

        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(format!(
                "Cycle: {} / {}",
                sim.current_cycle(),
                sim.total_cycles()
            ));
            ui.add_space(20.0);
            ui.add(
                egui::ProgressBar::new(sim.progress())
                    .desired_width(400.0)
                    .show_percentage(),
            );
            ui.add_space(20.0);
            ui.label(format!("Temp: {:.1} °C", sim.temp_c()));

            ui.add_space(50.0);
            ui.horizontal(|ui| {
                let width = ui.available_width();
                ui.add_space(width / 2.0 - 250.0);
                if ui
                    .add_enabled(!locked, egui::Button::new("Start").min_size([240.0, 50.0].into()))
                    .clicked()
                {
                    event = Some(Event::StartRun);
                }
                let has_report = nav.session().last_report.is_some();
                if ui
                    .add_enabled(
                        !locked && has_report,
                        egui::Button::new("View Report").min_size([240.0, 50.0].into()),
                    )
                    .clicked()
                {
                    event = Some(Event::ViewReport);
                }
            });
        });

        event
    }
}
