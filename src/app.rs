//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that delegates event handling and rendering to child
//! components. App coordinates between views, the modal stack and the
//! shared stores but keeps the table logic inside the views.

use crate::action::Action;
use crate::component::Component;
use crate::components::table_view::{self, TableController, TableOp};
use crate::components::{
    campaigns, complaints, draw_dashboard, issues, repairs, sms, tasks, users,
    CampaignsView, ComplaintsView, DashboardStats, FilterDialog, FormState, HelpDialog,
    IssuesView, LoginComponent, PageSizeDialog, QuitDialog, RepairsView, SmsView,
    TasksView, UsersView,
};
use crate::config::Config;
use crate::model::auth::AuthStore;
use crate::model::complaint::{Complaint, ComplaintStatus};
use crate::model::modal::{Modal, ModalStack};
use crate::model::repair::{RepairStatus, StbRepair};
use crate::model::ui::{AppMode, View};
use crate::query::QueryState;
use crate::services::{export, seed};
use crate::storage::{FileStorage, MemoryStorage, Storage};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use crate::components::layout::{calculate_main_layout, centered_popup};
use crate::model::taskboard::TaskStore;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Active view
    pub view: View,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Current config
    pub config: Config,

    /// Session store
    pub auth: AuthStore,

    /// Shared technician task board
    pub task_store: TaskStore,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub login: LoginComponent,
    pub complaints: ComplaintsView,
    pub campaigns: CampaignsView,
    pub issues: IssuesView,
    pub repairs: RepairsView,
    pub tasks: TasksView,
    pub sms: SmsView,
    pub users: UsersView,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub filter_dialog: FilterDialog,
    pub page_size_dialog: PageSizeDialog,

    /// Form behind the AddRecord/ComposeSms modal, if one is open
    pub form: Option<FormState>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App backed by the default file storage.
    pub fn new() -> App {
        let config = Config::load().unwrap_or_default();

        let auth_storage: Box<dyn Storage> = match FileStorage::open_default() {
            Ok(storage) => Box::new(storage),
            Err(_) => Box::new(MemoryStorage::new()),
        };
        let task_storage: Box<dyn Storage> = match FileStorage::open_default() {
            Ok(storage) => Box::new(storage),
            Err(_) => Box::new(MemoryStorage::new()),
        };

        Self::with_storage(config, auth_storage, task_storage)
    }

    /// Create an App with injected storage. Test seam.
    pub fn with_storage(
        config: Config,
        auth_storage: Box<dyn Storage>,
        task_storage: Box<dyn Storage>,
    ) -> App {
        let auth = AuthStore::new(auth_storage);
        let mut task_store = TaskStore::new(task_storage);

        // First run: put the starter tasks on the board.
        let mut board = task_store.load();
        if board.is_empty() {
            board = seed::tasks();
            let _ = task_store.save(&board);
        }

        let page_size = config.page_size();
        let mode = if auth.current().is_some() {
            AppMode::Running
        } else {
            AppMode::Login
        };

        App {
            mode,
            view: View::Dashboard,
            modals: ModalStack::new(),
            should_quit: false,
            error: None,
            status_message: None,
            auth,
            task_store,
            login: LoginComponent::new(),
            complaints: ComplaintsView::new(page_size),
            campaigns: CampaignsView::new(page_size),
            issues: IssuesView::new(page_size),
            repairs: RepairsView::new(page_size),
            tasks: TasksView::new(page_size, board),
            sms: SmsView::new(page_size),
            users: UsersView::new(page_size),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            filter_dialog: FilterDialog::new(),
            page_size_dialog: PageSizeDialog::new(),
            form: None,
            config,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Table dispatch
    // ─────────────────────────────────────────────────────────────────────────

    fn apply_table_op(&mut self, op: TableOp) {
        match self.view {
            View::Dashboard => {}
            View::Complaints => self.complaints.apply(op),
            View::Campaigns => self.campaigns.apply(op),
            View::Issues => self.issues.apply(op),
            View::Repairs => self.repairs.apply(op),
            View::Tasks => self.tasks.apply(op),
            View::Sms => self.sms.apply(op),
            View::Users => self.users.apply(op),
        }
    }

    fn active_table(&self) -> Option<&TableController> {
        match self.view {
            View::Dashboard => None,
            View::Complaints => Some(&self.complaints.table),
            View::Campaigns => Some(&self.campaigns.table),
            View::Issues => Some(&self.issues.table),
            View::Repairs => Some(&self.repairs.table),
            View::Tasks => Some(&self.tasks.table),
            View::Sms => Some(&self.sms.table),
            View::Users => Some(&self.users.table),
        }
    }

    fn active_table_mut(&mut self) -> Option<&mut TableController> {
        match self.view {
            View::Dashboard => None,
            View::Complaints => Some(&mut self.complaints.table),
            View::Campaigns => Some(&mut self.campaigns.table),
            View::Issues => Some(&mut self.issues.table),
            View::Repairs => Some(&mut self.repairs.table),
            View::Tasks => Some(&mut self.tasks.table),
            View::Sms => Some(&mut self.sms.table),
            View::Users => Some(&mut self.users.table),
        }
    }

    /// Query state is owned by the view and does not survive navigating
    /// away from it.
    fn switch_view(&mut self, next: View) {
        let page_size = self.config.page_size();
        if let Some(table) = self.active_table_mut() {
            table.query = QueryState::new(page_size);
            table.filters.clear();
            table.cursor = 0;
            table.search_mode = false;
        }
        self.view = next;
    }

    fn search_mode_active(&self) -> bool {
        self.active_table().map(|t| t.search_mode).unwrap_or(false)
    }

    fn has_selection(&self) -> bool {
        match self.view {
            View::Dashboard => false,
            View::Complaints => self.complaints.selected().is_some(),
            View::Campaigns => self.campaigns.selected().is_some(),
            View::Issues => self.issues.selected().is_some(),
            View::Repairs => self.repairs.selected().is_some(),
            View::Tasks => self.tasks.selected().is_some(),
            View::Sms => self.sms.selected().is_some(),
            View::Users => self.users.selected().is_some(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Key handling helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_running_key(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Views
            KeyCode::Tab | KeyCode::Char(']') => Some(Action::NextView),
            KeyCode::BackTab | KeyCode::Char('[') => Some(Action::PrevView),

            // Rows
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),

            // Pages
            KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevPage),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::NextPage),
            KeyCode::Char('<') => Some(Action::FirstPage),
            KeyCode::Char('>') => Some(Action::LastPage),

            // Sorting: 1..9 address columns
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                Some(Action::SortColumn(index))
            }

            // Search & filters
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            KeyCode::Char('f') => Some(Action::OpenFilter),
            KeyCode::Char('c') => Some(Action::ClearFilters),
            KeyCode::Char('s') => Some(Action::OpenPageSize),

            // Records
            KeyCode::Char('a') => Some(Action::OpenAddForm),
            KeyCode::Char('t') => Some(Action::AssignTask),
            KeyCode::Char('R') => Some(Action::RefreshTasks),
            KeyCode::Char('m') => Some(Action::OpenCompose),
            KeyCode::Char('x') => Some(Action::ExportCsv),
            KeyCode::Enter => Some(Action::OpenDetail),

            // Session
            KeyCode::Char('o') => Some(Action::Logout),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),

            _ => None,
        };
        Ok(action)
    }

    fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }

    fn handle_form_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::SubmitForm),
            KeyCode::Tab | KeyCode::Down => Some(Action::FormNextField),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FormPrevField),
            KeyCode::Left => Some(Action::FormCycleLeft),
            KeyCode::Right => Some(Action::FormCycleRight),
            KeyCode::Backspace => Some(Action::FormBackspace),
            KeyCode::Char(c) => Some(Action::FormInput(c)),
            _ => None,
        };
        Ok(action)
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help { .. } => self.help_dialog.handle_key_event(key),
            Modal::Filter => self.filter_dialog.handle_key_event(key),
            Modal::PageSize => self.page_size_dialog.handle_key_event(key),
            Modal::AddRecord | Modal::ComposeSms => self.handle_form_key_event(key),
            Modal::Detail => {
                let action = match key.code {
                    KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => Some(Action::CloseModal),
                    _ => None,
                };
                Ok(action)
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Domain operations
    // ─────────────────────────────────────────────────────────────────────────

    fn submit_open_form(&mut self) {
        let mut form = match self.form.take() {
            Some(form) => form,
            None => return,
        };

        match self.modals.top().cloned() {
            Some(Modal::AddRecord) => {
                if !form.validate() {
                    self.form = Some(form);
                    return;
                }
                match self.view {
                    View::Complaints => {
                        self.complaints.submit_form(&form);
                        self.status_message = Some("Complaint added".to_string());
                    }
                    View::Issues => {
                        self.issues.submit_form(&form);
                        self.status_message = Some("Issue added".to_string());
                    }
                    View::Repairs => {
                        self.repairs.submit_form(&form);
                        self.status_message = Some("Repair request added".to_string());
                    }
                    View::Users => {
                        self.users.submit_form(&form);
                        self.status_message = Some("User added".to_string());
                    }
                    View::Campaigns => {
                        self.campaigns.submit_form(&form);
                        self.status_message = Some("Campaign scheduled".to_string());
                    }
                    View::Tasks => {
                        let task = self.tasks.build_task(&form);
                        match self.task_store.push(task) {
                            Ok(()) => {
                                self.tasks.records = self.task_store.load();
                                self.status_message = Some("Task added".to_string());
                            }
                            Err(e) => self.error = Some(format!("Could not save task: {}", e)),
                        }
                    }
                    _ => {}
                }
                self.modals.pop();
            }
            Some(Modal::ComposeSms) => match self.sms.compose_template {
                // Stage one: the template was chosen, build the message form.
                None => {
                    let index = form.fields.first().map(|f| f.choice).unwrap_or(0);
                    self.sms.compose_template = Some(index);
                    self.form = Some(self.sms.message_form(index));
                }
                Some(index) => {
                    if !form.validate() {
                        self.form = Some(form);
                        return;
                    }
                    match self.sms.send(index, &form) {
                        Some(recipient) => {
                            self.status_message = Some(format!("SMS sent to {}", recipient));
                        }
                        None => self.error = Some("Template no longer exists".to_string()),
                    }
                    self.sms.compose_template = None;
                    self.modals.pop();
                }
            },
            _ => {}
        }
    }

    fn assign_selected_issue(&mut self) {
        if self.view != View::Issues {
            return;
        }
        let board = self.task_store.load();
        let task = match self.issues.task_for_selected(&board) {
            Some(task) => task,
            None => return,
        };
        let technician = task.technician.clone();
        match self.task_store.push(task) {
            Ok(()) => {
                self.tasks.records = self.task_store.load();
                self.status_message = Some(format!("Task assigned to {}", technician));
            }
            Err(e) => self.error = Some(format!("Could not assign task: {}", e)),
        }
    }

    fn export_active_view(&mut self) {
        let (headers, rows) = match self.view {
            View::Dashboard => return,
            View::Complaints => self.complaints.table.export_rows(&self.complaints.records),
            View::Campaigns => self.campaigns.table.export_rows(&self.campaigns.records),
            View::Issues => self.issues.table.export_rows(&self.issues.records),
            View::Repairs => self.repairs.table.export_rows(&self.repairs.records),
            View::Tasks => self.tasks.table.export_rows(&self.tasks.records),
            View::Sms => self.sms.table.export_rows(&self.sms.records),
            View::Users => self.users.table.export_rows(&self.users.records),
        };

        let result = export::export_path(self.view.slug())
            .and_then(|path| export::write_csv(&path, &headers, &rows).map(|()| path));
        match result {
            Ok(path) => {
                self.status_message =
                    Some(format!("Exported {} rows to {}", rows.len(), path.display()));
            }
            Err(e) => self.error = Some(format!("Export failed: {}", e)),
        }
    }

    fn open_add_form(&mut self) -> Option<Action> {
        match self.view {
            View::Dashboard => None,
            View::Complaints => {
                self.form = Some(ComplaintsView::add_form());
                self.modals.push(Modal::AddRecord);
                None
            }
            View::Issues => {
                self.form = Some(IssuesView::add_form());
                self.modals.push(Modal::AddRecord);
                None
            }
            View::Repairs => {
                self.form = Some(RepairsView::add_form());
                self.modals.push(Modal::AddRecord);
                None
            }
            View::Tasks => {
                self.form = Some(TasksView::add_form());
                self.modals.push(Modal::AddRecord);
                None
            }
            View::Users => {
                self.form = Some(UsersView::add_form());
                self.modals.push(Modal::AddRecord);
                None
            }
            View::Campaigns => {
                self.form = Some(CampaignsView::add_form());
                self.modals.push(Modal::AddRecord);
                None
            }
            // Adding to the SMS log is composing a message.
            View::Sms => Some(Action::OpenCompose),
        }
    }

    fn open_filter_dialog(&mut self) {
        let options = match self.view {
            View::Dashboard => return,
            View::Complaints => ComplaintsView::filter_options(),
            View::Campaigns => CampaignsView::filter_options(),
            View::Issues => IssuesView::filter_options(),
            View::Repairs => RepairsView::filter_options(),
            View::Tasks => TasksView::filter_options(),
            View::Sms => SmsView::filter_options(),
            View::Users => UsersView::filter_options(),
        };
        let active = self
            .active_table()
            .map(|t| t.filters.clone())
            .unwrap_or_default();
        self.filter_dialog.set_options(options, &active);
        self.modals.push(Modal::Filter);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.mode {
            AppMode::Login => self.login.handle_key_event(key),
            AppMode::Running => {
                if let Some(modal) = self.modals.top().cloned() {
                    self.handle_modal_key_event(&modal, key)
                } else if self.search_mode_active() {
                    self.handle_search_key_event(key)
                } else {
                    self.handle_running_key(key)
                }
            }
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        // Status and error lines live until the next meaningful action.
        if !matches!(action, Action::Tick | Action::Resize(_, _)) {
            self.status_message = None;
            self.error = None;
        }

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {}
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Session
            // ─────────────────────────────────────────────────────────────────
            Action::LoginSubmit => {
                let username = self.login.username.clone();
                let password = self.login.password.clone();
                match self.auth.login(&username, &password) {
                    Ok(Some(user)) => {
                        self.login.reset();
                        self.mode = AppMode::Running;
                        self.status_message = Some(format!("Signed in as {}", user.email));
                    }
                    Ok(None) => {
                        self.login.error = Some("Invalid username or password".to_string());
                    }
                    Err(e) => {
                        self.login.error = Some(format!("Could not save session: {}", e));
                    }
                }
            }
            Action::Logout => {
                self.auth.logout();
                self.login.reset();
                self.modals = ModalStack::new();
                self.form = None;
                self.mode = AppMode::Login;
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => self.apply_table_op(TableOp::NextRow),
            Action::PrevItem => self.apply_table_op(TableOp::PrevRow),
            Action::FirstItem => self.apply_table_op(TableOp::FirstRow),
            Action::LastItem => self.apply_table_op(TableOp::LastRow),
            Action::NextView => {
                let next = self.view.next();
                self.switch_view(next);
            }
            Action::PrevView => {
                let prev = self.view.prev();
                self.switch_view(prev);
            }

            // ─────────────────────────────────────────────────────────────────
            // Pagination
            // ─────────────────────────────────────────────────────────────────
            Action::NextPage => self.apply_table_op(TableOp::NextPage),
            Action::PrevPage => self.apply_table_op(TableOp::PrevPage),
            Action::FirstPage => self.apply_table_op(TableOp::FirstPage),
            Action::LastPage => self.apply_table_op(TableOp::LastPage),
            Action::OpenPageSize => {
                let current = self.active_table().map(|t| t.query.page_size);
                if let Some(current) = current {
                    self.page_size_dialog.set_current(current);
                    self.modals.push(Modal::PageSize);
                }
            }
            Action::SetPageSize(size) => {
                self.apply_table_op(TableOp::SetPageSize(size));
                if matches!(self.modals.top(), Some(Modal::PageSize)) {
                    self.modals.pop();
                }
                self.config.default_page_size = size;
                let _ = self.config.save();
                self.status_message = Some(format!("Showing {} entries per page", size));
            }

            // ─────────────────────────────────────────────────────────────────
            // Search & Sort
            // ─────────────────────────────────────────────────────────────────
            Action::EnterSearchMode => {
                if let Some(table) = self.active_table_mut() {
                    table.search_mode = true;
                }
            }
            Action::ExitSearchMode => {
                if let Some(table) = self.active_table_mut() {
                    table.search_mode = false;
                }
            }
            Action::SearchInput(c) => self.apply_table_op(TableOp::SearchChar(c)),
            Action::SearchBackspace => self.apply_table_op(TableOp::SearchBackspace),
            Action::SortColumn(index) => self.apply_table_op(TableOp::Sort(index)),

            // ─────────────────────────────────────────────────────────────────
            // Exact Filters
            // ─────────────────────────────────────────────────────────────────
            Action::OpenFilter => self.open_filter_dialog(),
            Action::SetFilter { field, value } => {
                self.apply_table_op(TableOp::SetFilter { field, value });
                if matches!(self.modals.top(), Some(Modal::Filter)) {
                    self.modals.pop();
                }
            }
            Action::ClearFilters => {
                self.apply_table_op(TableOp::ClearFilters);
                if matches!(self.modals.top(), Some(Modal::Filter)) {
                    self.modals.pop();
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help { scroll_offset: 0 });
            }
            Action::OpenDetail => {
                if self.has_selection() {
                    self.modals.push(Modal::Detail);
                }
            }
            Action::CloseModal => {
                if matches!(
                    self.modals.top(),
                    Some(Modal::AddRecord) | Some(Modal::ComposeSms)
                ) {
                    self.form = None;
                    self.sms.compose_template = None;
                }
                self.modals.pop();
            }
            Action::ModalUp | Action::ModalDown => {}

            // ─────────────────────────────────────────────────────────────────
            // Forms
            // ─────────────────────────────────────────────────────────────────
            Action::OpenAddForm => {
                return Ok(self.open_add_form());
            }
            Action::OpenCompose => {
                if self.view == View::Sms {
                    self.sms.compose_template = None;
                    self.form = Some(self.sms.template_form());
                    self.modals.push(Modal::ComposeSms);
                }
            }
            Action::FormInput(c) => {
                if let Some(form) = self.form.as_mut() {
                    form.input(c);
                }
            }
            Action::FormBackspace => {
                if let Some(form) = self.form.as_mut() {
                    form.backspace();
                }
            }
            Action::FormNextField => {
                if let Some(form) = self.form.as_mut() {
                    form.next_field();
                }
            }
            Action::FormPrevField => {
                if let Some(form) = self.form.as_mut() {
                    form.prev_field();
                }
            }
            Action::FormCycleLeft => {
                if let Some(form) = self.form.as_mut() {
                    form.cycle(-1);
                }
            }
            Action::FormCycleRight => {
                if let Some(form) = self.form.as_mut() {
                    form.cycle(1);
                }
            }
            Action::SubmitForm => self.submit_open_form(),

            // ─────────────────────────────────────────────────────────────────
            // Domain Operations
            // ─────────────────────────────────────────────────────────────────
            Action::AssignTask => self.assign_selected_issue(),
            Action::RefreshTasks => {
                if self.view == View::Tasks {
                    self.tasks.records = self.task_store.load();
                    self.status_message = Some("Task board reloaded".to_string());
                }
            }
            Action::ExportCsv => self.export_active_view(),
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Login => self.login.draw(frame, area)?,
            AppMode::Running => {
                let layout = calculate_main_layout(area);

                self.render_tabs(frame, layout.tabs);
                self.render_body(frame, layout.body);
                self.render_status_bar(frame, layout.status);
                self.render_help_bar(frame, layout.help);

                if let Some(modal) = self.modals.top().cloned() {
                    self.draw_modal(frame, area, &modal)?;
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let all_views = View::all();
        let titles: Vec<&str> = all_views.iter().map(|v| v.name()).collect();
        let selected = all_views
            .iter()
            .position(|v| *v == self.view)
            .unwrap_or(0);

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM))
            .select(selected)
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }

    fn render_body(&mut self, frame: &mut Frame, area: Rect) {
        match self.view {
            View::Dashboard => {
                let stats = DashboardStats {
                    complaints_total: self.complaints.records.len(),
                    complaints_open: Complaint::count_with_status(
                        &self.complaints.records,
                        ComplaintStatus::Open,
                    ),
                    complaints_in_progress: Complaint::count_with_status(
                        &self.complaints.records,
                        ComplaintStatus::InProgress,
                    ),
                    complaints_resolved: Complaint::count_with_status(
                        &self.complaints.records,
                        ComplaintStatus::Resolved,
                    ),
                    repairs_pending: StbRepair::count_with_status(
                        &self.repairs.records,
                        RepairStatus::Pending,
                    ),
                    tasks_open: self.tasks.open_count(),
                    sms_delivered: self.sms.delivered_count(),
                    campaigns_active: self.campaigns.active_count(),
                };
                let recent: Vec<&Complaint> = self.complaints.records.iter().take(5).collect();
                draw_dashboard(frame, area, &stats, &recent, &self.config.support_number);
            }
            View::Complaints => self.complaints.draw(frame, area),
            View::Campaigns => self.campaigns.draw(frame, area),
            View::Issues => self.issues.draw(frame, area),
            View::Repairs => self.repairs.draw(frame, area),
            View::Tasks => self.tasks.draw(frame, area),
            View::Sms => self.sms.draw(frame, area),
            View::Users => self.users.draw(frame, area),
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![];

        if let Some(user) = self.auth.current() {
            spans.push(Span::styled(
                format!(" {} ", user.email),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }

        spans.push(Span::styled(
            self.view.name(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));

        if let Some(ref error) = self.error {
            spans.clear();
            spans.push(Span::styled(
                format!(" Error: {} ", error),
                Style::default().fg(Color::Red),
            ));
        } else if let Some(ref status) = self.status_message {
            spans.push(Span::styled(
                format!("  {}", status),
                Style::default().fg(Color::Yellow),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_help_bar(&self, frame: &mut Frame, area: Rect) {
        let spans = if self.search_mode_active() {
            let query = self
                .active_table()
                .map(|t| t.query.search.clone())
                .unwrap_or_default();
            vec![
                Span::styled(
                    " Esc/Enter ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Finish  "),
                Span::styled(
                    format!("Search: {}_", query),
                    Style::default().fg(Color::Cyan),
                ),
            ]
        } else {
            vec![
                Span::styled(
                    " q ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Quit "),
                Span::styled(
                    " Tab ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("View "),
                Span::styled(
                    " / ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Search "),
                Span::styled(
                    " a ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Add "),
                Span::styled(
                    " f ",
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Filter "),
                Span::styled(
                    " s ",
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Size "),
                Span::styled(
                    " x ",
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Export "),
                Span::styled(
                    " ? ",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Help"),
            ]
        };

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Help { .. } => self.help_dialog.draw(frame, area)?,
            Modal::Filter => self.filter_dialog.draw(frame, area)?,
            Modal::PageSize => self.page_size_dialog.draw(frame, area)?,
            Modal::AddRecord | Modal::ComposeSms => {
                if let Some(ref form) = self.form {
                    form.draw(frame, area);
                }
            }
            Modal::Detail => self.draw_detail(frame, area),
        }
        Ok(())
    }

    fn draw_detail(&self, frame: &mut Frame, area: Rect) {
        let (title, lines) = match self.view {
            View::Dashboard => return,
            View::Complaints => match self.complaints.selected() {
                Some(record) => (
                    "Complaint",
                    table_view::detail_lines(complaints::COLUMNS, record),
                ),
                None => return,
            },
            View::Issues => match self.issues.selected() {
                Some(record) => ("Issue", table_view::detail_lines(issues::COLUMNS, record)),
                None => return,
            },
            View::Repairs => match self.repairs.selected() {
                Some(record) => ("Repair", table_view::detail_lines(repairs::COLUMNS, record)),
                None => return,
            },
            View::Tasks => match self.tasks.selected() {
                Some(record) => ("Task", table_view::detail_lines(tasks::COLUMNS, record)),
                None => return,
            },
            View::Sms => match self.sms.selected() {
                Some(record) => ("Message", table_view::detail_lines(sms::COLUMNS, record)),
                None => return,
            },
            View::Users => match self.users.selected() {
                Some(record) => ("User", table_view::detail_lines(users::COLUMNS, record)),
                None => return,
            },
            View::Campaigns => match self.campaigns.selected() {
                Some(record) => (
                    "Campaign",
                    table_view::detail_lines(campaigns::COLUMNS, record),
                ),
                None => return,
            },
        };

        let popup_area = centered_popup(area, 76, lines.len() as u16 + 4);
        frame.render_widget(Clear, popup_area);

        let mut content = vec![Line::from("")];
        content.extend(lines);
        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::styled(
                " Esc ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Close"),
        ]));

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!(" {} Details ", title))
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        );

        frame.render_widget(paragraph, popup_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn test_app() -> App {
        App::with_storage(
            Config::default(),
            Box::new(MemoryStorage::new()),
            Box::new(MemoryStorage::new()),
        )
    }

    fn signed_in_app() -> App {
        let mut app = test_app();
        app.login.username = "admin".to_string();
        app.login.password = "123456".to_string();
        app.update(Action::LoginSubmit).unwrap();
        app
    }

    #[test]
    fn test_starts_on_login_without_a_session() {
        let app = test_app();
        assert_eq!(app.mode, AppMode::Login);
    }

    #[test]
    fn test_login_then_logout_roundtrip() {
        let mut app = signed_in_app();
        assert_eq!(app.mode, AppMode::Running);
        assert!(app.auth.current().is_some());

        app.update(Action::Logout).unwrap();
        assert_eq!(app.mode, AppMode::Login);
        assert!(app.auth.current().is_none());
    }

    #[test]
    fn test_bad_credentials_stay_on_login() {
        let mut app = test_app();
        app.login.username = "admin".to_string();
        app.login.password = "wrong".to_string();
        app.update(Action::LoginSubmit).unwrap();
        assert_eq!(app.mode, AppMode::Login);
        assert!(app.login.error.is_some());
    }

    #[test]
    fn test_leaving_a_view_resets_its_query_state() {
        let mut app = signed_in_app();
        app.update(Action::NextView).unwrap(); // complaints
        assert_eq!(app.view, View::Complaints);

        app.update(Action::EnterSearchMode).unwrap();
        app.update(Action::SearchInput('j')).unwrap();
        app.update(Action::ExitSearchMode).unwrap();
        assert_eq!(app.complaints.table.query.search, "j");

        app.update(Action::NextView).unwrap();
        assert_eq!(app.view, View::Issues);
        assert!(app.complaints.table.query.search.is_empty());
    }

    #[test]
    fn test_task_board_starts_seeded() {
        let app = test_app();
        assert_eq!(app.tasks.records.len(), 2);
    }

    #[test]
    fn test_assigning_an_issue_reaches_the_tasks_view() {
        let mut app = signed_in_app();
        app.view = View::Issues;
        let before = app.tasks.records.len();

        app.update(Action::AssignTask).unwrap();
        assert_eq!(app.tasks.records.len(), before + 1);
        assert!(app
            .status_message
            .as_deref()
            .unwrap_or_default()
            .starts_with("Task assigned to"));

        // The board store saw the same write.
        assert_eq!(app.task_store.load().len(), before + 1);
    }

    #[test]
    fn test_compose_flow_is_two_staged() {
        let mut app = signed_in_app();
        app.view = View::Sms;
        let before = app.sms.records.len();

        app.update(Action::OpenCompose).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::ComposeSms));

        // Stage one submits the template choice.
        app.update(Action::SubmitForm).unwrap();
        assert_eq!(app.sms.compose_template, Some(0));
        assert!(app.form.as_ref().unwrap().fields.len() > 1);

        // Fill every field so validation passes, then send.
        let field_count = app.form.as_ref().unwrap().fields.len();
        for i in 0..field_count {
            app.update(Action::FormInput('x')).unwrap();
            if i + 1 < field_count {
                app.update(Action::FormNextField).unwrap();
            }
        }
        app.update(Action::SubmitForm).unwrap();

        assert_eq!(app.sms.records.len(), before + 1);
        assert!(app.modals.is_empty());
        assert!(app.form.is_none());
    }

    #[test]
    fn test_add_complaint_through_the_form_modal() {
        let mut app = signed_in_app();
        app.view = View::Complaints;
        let before = app.complaints.records.len();

        app.update(Action::OpenAddForm).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::AddRecord));

        for i in 0..4 {
            app.update(Action::FormInput('7')).unwrap();
            if i < 3 {
                app.update(Action::FormNextField).unwrap();
            }
        }
        app.update(Action::SubmitForm).unwrap();

        assert_eq!(app.complaints.records.len(), before + 1);
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_invalid_form_stays_open_with_error() {
        let mut app = signed_in_app();
        app.view = View::Complaints;

        app.update(Action::OpenAddForm).unwrap();
        app.update(Action::SubmitForm).unwrap();

        assert_eq!(app.modals.top(), Some(&Modal::AddRecord));
        assert!(app.form.as_ref().unwrap().error.is_some());
    }

    #[test]
    fn test_page_size_applies_to_the_active_view() {
        let mut app = signed_in_app();
        app.view = View::Issues;

        app.update(Action::SetPageSize(50)).unwrap();
        assert_eq!(app.issues.table.query.page_size, 50);
        assert_eq!(app.issues.table.query.current_page, 1);
    }
}
