//! Screen state machine and transition dispatch.

use crate::error::AppResult;
use crate::session::Session;
use qc_report::ReportStore;
use qc_sim::{RunOutcome, RunSimulator, SimOptions, TickOutcome, DEFAULT_TOTAL_CYCLES};
use qc_users::{UserStore, UsersError};
use std::time::Duration;

/// Settle delay before the homing screen advances to the lock screen.
pub const HOMING_SETTLE_DELAY: Duration = Duration::from_millis(500);
/// Confirmation delay after a successful user creation.
pub const CREATE_CONFIRM_DELAY: Duration = Duration::from_millis(1500);

/// The fixed set of screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Homing,
    Lock,
    UserLogin,
    CreateUser,
    Main,
    Pretest,
    Instruction,
    Isothermal,
    Report,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Homing => "homing",
            Screen::Lock => "lock",
            Screen::UserLogin => "user_login",
            Screen::CreateUser => "create_user",
            Screen::Main => "main",
            Screen::Pretest => "pretest",
            Screen::Instruction => "instruction",
            Screen::Isothermal => "isothermal",
            Screen::Report => "report",
        }
    }
}

/// Everything the adapter can ask the controller to do. Events that do not
/// apply to the current screen are ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Homing settle delay elapsed.
    HomingSettled,
    /// Lock screen user carousel.
    PrevUser,
    NextUser,
    /// Lock screen: confirm the selected user.
    OpenLogin,
    OpenCreateUser,
    SubmitLogin {
        password: String,
    },
    SubmitNewUser {
        username: String,
        password: String,
    },
    /// Create-user confirmation delay elapsed.
    CreateConfirmed,
    /// Context-sensitive back action.
    Back,
    /// Main screen actions.
    LockSession,
    OpenPretest,
    OpenReport,
    SubmitProject {
        name: String,
    },
    ContinueToRun,
    /// Run screen actions.
    StartRun,
    StopRun,
    ViewReport,
    /// One simulator tick period elapsed.
    Tick,
}

/// A timed transition the adapter must schedule. The controller itself is
/// clock-free.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAuto {
    pub event: Event,
    pub after: Duration,
}

/// Navigation and session controller.
///
/// A named-state machine over [`Screen`], holding the [`Session`] and
/// dispatching transitions on user actions and simulator events. Owns the
/// user store, the run simulator, and the report store exclusively.
pub struct NavController {
    screen: Screen,
    session: Session,
    users: UserStore,
    sim: RunSimulator,
    reports: ReportStore,
    selected_user: usize,
    login_username: Option<String>,
    notice: Option<String>,
    pending_auto: Option<PendingAuto>,
}

impl NavController {
    pub fn new(users: UserStore, reports: ReportStore, sim_opts: SimOptions) -> Self {
        Self {
            screen: Screen::Homing,
            session: Session::default(),
            users,
            sim: RunSimulator::new(sim_opts),
            reports,
            selected_user: 0,
            login_username: None,
            notice: None,
            pending_auto: Some(PendingAuto {
                event: Event::HomingSettled,
                after: HOMING_SETTLE_DELAY,
            }),
        }
    }

    /// Controller wired to the well-known home-directory paths.
    pub fn open_default() -> AppResult<Self> {
        let users = UserStore::open_default();
        let reports = ReportStore::open_default()?;
        Ok(Self::new(users, reports, SimOptions::default()))
    }

    /// Dispatch one event against the current screen.
    ///
    /// Validation failures surface as notices and return `Ok`; storage
    /// write failures propagate as errors and abort only the triggering
    /// action.
    pub fn handle(&mut self, event: Event) -> AppResult<()> {
        match event {
            Event::HomingSettled => {
                if self.screen == Screen::Homing {
                    self.session.homed_ok = true;
                    self.enter_lock();
                }
            }
            Event::PrevUser => {
                if self.screen == Screen::Lock && !self.users.is_empty() {
                    let n = self.users.len();
                    self.selected_user = (self.selected_user + n - 1) % n;
                }
            }
            Event::NextUser => {
                if self.screen == Screen::Lock && !self.users.is_empty() {
                    self.selected_user = (self.selected_user + 1) % self.users.len();
                }
            }
            Event::OpenLogin => {
                if self.screen == Screen::Lock {
                    if self.users.is_empty() {
                        self.notice = Some("No users. Please create one.".to_string());
                    } else {
                        self.login_username = self
                            .users
                            .username_at(self.selected_user)
                            .map(str::to_string);
                        self.goto(Screen::UserLogin);
                    }
                }
            }
            Event::OpenCreateUser => {
                if self.screen == Screen::Lock {
                    self.goto(Screen::CreateUser);
                }
            }
            Event::SubmitLogin { password } => {
                if self.screen == Screen::UserLogin {
                    let username = self.login_username.clone().unwrap_or_default();
                    if self.users.authenticate(&username, password.trim()) {
                        self.session.current_user = username;
                        self.goto(Screen::Main);
                    } else {
                        self.notice = Some("Incorrect password".to_string());
                    }
                }
            }
            Event::SubmitNewUser { username, password } => {
                if self.screen == Screen::CreateUser {
                    match self.users.create(&username, &password) {
                        Ok(()) => {
                            self.notice = Some("User created successfully!".to_string());
                            self.pending_auto = Some(PendingAuto {
                                event: Event::CreateConfirmed,
                                after: CREATE_CONFIRM_DELAY,
                            });
                        }
                        Err(e) if e.is_validation() => {
                            self.notice = Some(validation_message(&e));
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
            }
            Event::CreateConfirmed => {
                if self.screen == Screen::CreateUser {
                    self.enter_lock();
                }
            }
            Event::Back => self.back(),
            Event::LockSession => {
                if self.screen == Screen::Main {
                    self.enter_lock();
                }
            }
            Event::OpenPretest => {
                if self.screen == Screen::Main {
                    self.goto(Screen::Pretest);
                }
            }
            Event::OpenReport => {
                if self.screen == Screen::Main {
                    self.goto(Screen::Report);
                }
            }
            Event::SubmitProject { name } => {
                if self.screen == Screen::Pretest {
                    let name = name.trim();
                    if name.is_empty() {
                        self.notice = Some("Please enter project name".to_string());
                    } else {
                        self.session.current_project = Some(name.to_string());
                        self.goto(Screen::Instruction);
                    }
                }
            }
            Event::ContinueToRun => {
                if self.screen == Screen::Instruction {
                    self.goto(Screen::Isothermal);
                }
            }
            Event::StartRun => {
                if self.screen == Screen::Isothermal && !self.sim.is_running() {
                    self.sim.start(DEFAULT_TOTAL_CYCLES)?;
                    self.notice = None;
                }
            }
            Event::StopRun => {
                if self.screen == Screen::Isothermal {
                    self.sim.request_stop();
                }
            }
            Event::ViewReport => {
                if self.screen == Screen::Isothermal && !self.sim.is_running() {
                    self.goto(Screen::Report);
                }
            }
            Event::Tick => self.on_tick()?,
        }
        Ok(())
    }

    /// Context-sensitive back navigation. Disabled on the run screen while
    /// the simulator is running.
    fn back(&mut self) {
        match self.screen {
            Screen::UserLogin | Screen::CreateUser => self.enter_lock(),
            Screen::Pretest => self.goto(Screen::Main),
            Screen::Instruction => self.goto(Screen::Pretest),
            Screen::Isothermal => {
                if !self.sim.is_running() {
                    self.goto(Screen::Instruction);
                }
            }
            Screen::Report => self.goto(Screen::Main),
            _ => {}
        }
    }

    fn on_tick(&mut self) -> AppResult<()> {
        if let TickOutcome::Finished(outcome) = self.sim.tick() {
            let records = self.sim.take_records();
            self.sim.reset();

            let project = self
                .session
                .current_project
                .clone()
                .unwrap_or_else(|| "Unnamed".to_string());
            let report = self.reports.save_report(&project, &records)?;
            self.session.last_report = Some(report);

            self.notice = Some(
                match outcome {
                    RunOutcome::Completed => "Complete!",
                    RunOutcome::Stopped => "Stopped",
                }
                .to_string(),
            );
        }
        Ok(())
    }

    /// Lock screen entry: re-read the user file and reset the carousel.
    fn enter_lock(&mut self) {
        self.users.reload();
        self.selected_user = 0;
        self.goto(Screen::Lock);
    }

    fn goto(&mut self, screen: Screen) {
        tracing::info!(from = self.screen.name(), to = screen.name(), "screen change");
        self.screen = screen;
        self.notice = None;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn users(&self) -> &UserStore {
        &self.users
    }

    pub fn sim(&self) -> &RunSimulator {
        &self.sim
    }

    /// Username currently shown on the lock screen carousel.
    pub fn selected_username(&self) -> Option<&str> {
        self.users.username_at(self.selected_user)
    }

    /// Username the login screen is asking a password for.
    pub fn login_username(&self) -> Option<&str> {
        self.login_username.as_deref()
    }

    /// Transient user-visible message, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Hand the next timed transition to the adapter, if one is due to be
    /// scheduled.
    pub fn take_pending_auto(&mut self) -> Option<PendingAuto> {
        self.pending_auto.take()
    }

    pub fn tick_interval(&self) -> Duration {
        self.sim.options().tick_interval
    }
}

fn validation_message(e: &UsersError) -> String {
    match e {
        UsersError::EmptyUsername | UsersError::EmptyPassword => {
            "Please enter username and password".to_string()
        }
        UsersError::DuplicateUsername { .. } => "Username already exists".to_string(),
        other => other.to_string(),
    }
}
