//! Lock, login, and create-user screens.

use qc_app::{Event, NavController};

/// User carousel plus the login / create-user entry points.
#[derive(Default)]
pub struct LockView;

impl LockView {
    pub fn show(&mut self, ui: &mut egui::Ui, nav: &NavController) -> Option<Event> {
        let mut event = None;

        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.heading(nav.selected_username().unwrap_or("No Users"));
            ui.add_space(20.0);

            ui.horizontal(|ui| {
                let width = ui.available_width();
                ui.add_space(width / 2.0 - 80.0);
                if ui.add_sized([60.0, 40.0], egui::Button::new("<")).clicked() {
                    event = Some(Event::PrevUser);
                }
                if ui.add_sized([60.0, 40.0], egui::Button::new(">")).clicked() {
                    event = Some(Event::NextUser);
                }
            });

            ui.add_space(60.0);
            if ui
                .add_sized([240.0, 50.0], egui::Button::new("Login"))
                .clicked()
            {
                event = Some(Event::OpenLogin);
            }
            ui.add_space(10.0);
            if ui
                .add_sized([240.0, 50.0], egui::Button::new("Create User"))
                .clicked()
            {
                event = Some(Event::OpenCreateUser);
            }
        });

        event
    }
}

/// Password prompt for the user selected on the lock screen.
#[derive(Default)]
pub struct LoginView {
    password: String,
}

impl LoginView {
    pub fn clear(&mut self) {
        self.password.clear();
    }

    pub fn show(&mut self, ui: &mut egui::Ui, nav: &NavController) -> Option<Event> {
        let mut event = None;

        if ui.button("← Back").clicked() {
            event = Some(Event::Back);
        }

        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.heading(format!("User: {}", nav.login_username().unwrap_or("?")));
            ui.add_space(30.0);

            ui.add_sized(
                [280.0, 40.0],
                egui::TextEdit::singleline(&mut self.password)
                    .password(true)
                    .hint_text("Enter Password"),
            );

            ui.add_space(30.0);
            if ui
                .add_sized([240.0, 50.0], egui::Button::new("Login"))
                .clicked()
            {
                event = Some(Event::SubmitLogin {
                    password: std::mem::take(&mut self.password),
                });
            }
        });

        event
    }
}

/// New-user form. Rejections stay in place with a notice.
#[derive(Default)]
pub struct CreateUserView {
    username: String,
    password: String,
}

impl CreateUserView {
    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
    }

    pub fn show(&mut self, ui: &mut egui::Ui, _nav: &NavController) -> Option<Event> {
        let mut event = None;

        if ui.button("← Back").clicked() {
            event = Some(Event::Back);
        }

        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            ui.heading("Create New User");
            ui.add_space(30.0);

            ui.add_sized(
                [280.0, 40.0],
                egui::TextEdit::singleline(&mut self.username).hint_text("Username"),
            );
            ui.add_space(10.0);
            ui.add_sized(
                [280.0, 40.0],
                egui::TextEdit::singleline(&mut self.password)
                    .password(true)
                    .hint_text("Password"),
            );

            ui.add_space(30.0);
            if ui
                .add_sized([240.0, 50.0], egui::Button::new("Create"))
                .clicked()
            {
                event = Some(Event::SubmitNewUser {
                    username: self.username.clone(),
                    password: self.password.clone(),
                });
            }
        });

        event
    }
}
