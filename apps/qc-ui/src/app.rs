use crate::views::{
    CreateUserView, InstructionView, LockView, LoginView, MainView, PretestView, ReportView,
    RunView,
};
use qc_app::{AppError, Event, NavController, Screen};
use std::time::{Duration, Instant};

/// Touchscreen adapter: owns the controller and every clock, holds no
/// business logic. Views return events; the controller decides.
pub struct QcycleApp {
    nav: NavController,
    /// Timed auto-advance handed over by the controller, with its due time.
    pending: Option<(Instant, Event)>,
    last_tick: Instant,
    lock_view: LockView,
    login_view: LoginView,
    create_view: CreateUserView,
    main_view: MainView,
    pretest_view: PretestView,
    instruction_view: InstructionView,
    run_view: RunView,
    report_view: ReportView,
}

impl QcycleApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, AppError> {
        Ok(Self {
            nav: NavController::open_default()?,
            pending: None,
            last_tick: Instant::now(),
            lock_view: LockView::default(),
            login_view: LoginView::default(),
            create_view: CreateUserView::default(),
            main_view: MainView::default(),
            pretest_view: PretestView::default(),
            instruction_view: InstructionView::default(),
            run_view: RunView::default(),
            report_view: ReportView::default(),
        })
    }

    fn dispatch(&mut self, event: Event) {
        // Fresh text buffers whenever an entry screen opens.
        match event {
            Event::OpenLogin => self.login_view.clear(),
            Event::OpenCreateUser => self.create_view.clear(),
            _ => {}
        }

        let started_run = matches!(event, Event::StartRun);
        if let Err(e) = self.nav.handle(event) {
            // Fatal to the action only; the application keeps running.
            tracing::error!(error = %e, "action failed");
            self.nav.set_notice(format!("Error: {e}"));
            return;
        }
        if started_run {
            self.last_tick = Instant::now();
        }
    }

    fn drive_timers(&mut self) {
        if let Some(auto) = self.nav.take_pending_auto() {
            self.pending = Some((Instant::now() + auto.after, auto.event));
        }
        let auto_due = self
            .pending
            .as_ref()
            .is_some_and(|(due, _)| Instant::now() >= *due);
        if auto_due {
            if let Some((_, event)) = self.pending.take() {
                self.dispatch(event);
            }
        }
        if self.nav.sim().is_running() && self.last_tick.elapsed() >= self.nav.tick_interval() {
            self.last_tick = Instant::now();
            self.dispatch(Event::Tick);
        }
    }
}

impl eframe::App for QcycleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drive_timers();

        // Panels before the central panel, per egui layout rules.
        if let Some(notice) = self.nav.notice().map(str::to_string) {
            egui::TopBottomPanel::bottom("notice_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(notice);
                    if ui.small_button("Dismiss").clicked() {
                        self.nav.dismiss_notice();
                    }
                });
            });
        }

        let mut event = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            event = match self.nav.screen() {
                Screen::Homing => {
                    ui.centered_and_justified(|ui| {
                        ui.heading("System Initializing...");
                    });
                    None
                }
                Screen::Lock => self.lock_view.show(ui, &self.nav),
                Screen::UserLogin => self.login_view.show(ui, &self.nav),
                Screen::CreateUser => self.create_view.show(ui, &self.nav),
                Screen::Main => self.main_view.show(ui, &self.nav),
                Screen::Pretest => self.pretest_view.show(ui, &self.nav),
                Screen::Instruction => self.instruction_view.show(ui, &self.nav),
                Screen::Isothermal => self.run_view.show(ui, &self.nav),
                Screen::Report => self.report_view.show(ui, &self.nav),
            };
        });

        if let Some(event) = event {
            self.dispatch(event);
        }

        // Keep timers moving even without input.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
