//! Report screen: the single most recent export, or an empty state.

use qc_app::{Event, NavController};

#[derive(Default)]
pub struct ReportView;

impl ReportView {
    pub fn show(&mut self, ui: &mut egui::Ui, nav: &NavController) -> Option<Event> {
        let mut event = None;

        if ui.button("← Back").clicked() {
            event = Some(Event::Back);
        }

        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading("Experiment Reports");
            ui.add_space(30.0);

            match &nav.session().last_report {
                Some(report) => {
                    ui.group(|ui| {
                        ui.label(format!("📄 {} - {}", report.project_name, report.timestamp));
                        ui.weak(report.csv_path.display().to_string());
                    });
                }
                None => {
                    ui.label("No data");
                }
            }
        });

        event
    }
}
