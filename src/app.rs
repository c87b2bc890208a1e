//! Application state management for TripGuide
//!
//! This module holds everything the UI shows: the current screen, the plan
//! form, the [`TripState`] produced by it, and the selector state of the
//! browse screens. Keyboard input is turned into state changes by
//! [`App::handle_key`]; rendering only reads from [`App`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::cli::StartupConfig;
use crate::config::{
    BudgetRange, PreferredStay, PreferredTransport, Settings, SettingsStore, TravelStyle,
};
use crate::data::explore::STATES;
use crate::data::{
    all_accommodations, all_explore_destinations, all_guides, all_trips, cycle, cycle_choice,
    Accommodation, AccommodationType, CatalogSource, Destination, ExploreCategory,
    ExploreDestination, Guide, GuideCategory, StaticCatalog, StaticWeather, TransportMode,
    TripRecord, TripStatus, WeatherReport, WeatherSource,
};
use crate::filter::{
    filter_accommodations, filter_catalog, filter_guides, filter_trips, CatalogQuery,
};
use crate::trip::{
    parse_expense_amount, rupees_to_paise, ExpenseCategory, TripError, TripParameters, TripState,
    BUDGET_STEP, MAX_DAYS, MIN_BUDGET, MIN_DAYS, QUICK_ADD_AMOUNTS,
};
use crate::ui::format_paise;

/// Top-level screens, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    PlanTrip,
    MyTrips,
    Explore,
    Guides,
    Profile,
}

impl Screen {
    pub fn all() -> &'static [Screen] {
        &[
            Screen::PlanTrip,
            Screen::MyTrips,
            Screen::Explore,
            Screen::Guides,
            Screen::Profile,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Screen::PlanTrip => "Plan Trip",
            Screen::MyTrips => "My Trips",
            Screen::Explore => "Explore",
            Screen::Guides => "Guides",
            Screen::Profile => "Profile",
        }
    }

    /// Parses a screen name as accepted by `--screen`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Screen> {
        match s.to_lowercase().trim() {
            "plan" | "plan-trip" | "home" => Some(Screen::PlanTrip),
            "trips" | "my-trips" => Some(Screen::MyTrips),
            "explore" => Some(Screen::Explore),
            "guides" => Some(Screen::Guides),
            "profile" => Some(Screen::Profile),
            _ => None,
        }
    }

    /// Screen bound to function key `n` (F1 is Plan Trip)
    pub fn from_function_key(n: u8) -> Option<Screen> {
        Screen::all().get((n as usize).checked_sub(1)?).copied()
    }
}

/// Rows of the plan form, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    CurrentLocation,
    Destination,
    Days,
    Budget,
    Mode,
    Submit,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            FormField::CurrentLocation,
            FormField::Destination,
            FormField::Days,
            FormField::Budget,
            FormField::Mode,
            FormField::Submit,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::CurrentLocation => "Current Location",
            FormField::Destination => "Destination",
            FormField::Days => "Number of Days",
            FormField::Budget => "Budget (₹)",
            FormField::Mode => "Transport Mode",
            FormField::Submit => "Create Trip Plan",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, FormField::CurrentLocation | FormField::Destination)
    }
}

/// The trip form as the user is editing it
#[derive(Debug, Clone, PartialEq)]
pub struct PlanForm {
    pub current_location: String,
    pub destination: String,
    pub days: u8,
    pub budget: u64,
    pub mode: TransportMode,
    pub focus: FormField,
    /// Last validation failure, shown under the form
    pub error: Option<TripError>,
}

impl PlanForm {
    /// Empty form prefilled with the configured defaults
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            current_location: String::new(),
            destination: String::new(),
            days: settings.default_days,
            budget: settings.default_budget,
            mode: settings.default_mode,
            focus: FormField::default(),
            error: None,
        }
    }

    pub fn params(&self) -> TripParameters {
        TripParameters {
            current_location: self.current_location.trim().to_string(),
            destination: self.destination.trim().to_string(),
            days: self.days,
            budget: self.budget,
            transport_mode: self.mode,
        }
    }

    /// Both locations filled in, so the submit row is enabled
    pub fn is_complete(&self) -> bool {
        !self.current_location.trim().is_empty() && !self.destination.trim().is_empty()
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::CurrentLocation => Some(&mut self.current_location),
            FormField::Destination => Some(&mut self.destination),
            _ => None,
        }
    }

    /// Left/Right on a stepper row. Days and budget stop at their limits;
    /// the transport mode wraps.
    fn adjust(&mut self, step: isize) {
        match self.focus {
            FormField::Days => {
                let days = if step > 0 {
                    self.days.saturating_add(1)
                } else {
                    self.days.saturating_sub(1)
                };
                self.days = days.clamp(MIN_DAYS, MAX_DAYS);
            }
            FormField::Budget => {
                let budget = if step > 0 {
                    self.budget.saturating_add(BUDGET_STEP)
                } else {
                    self.budget.saturating_sub(BUDGET_STEP)
                };
                self.budget = budget.max(MIN_BUDGET);
            }
            FormField::Mode => {
                self.mode = cycle(TransportMode::all(), self.mode, step);
            }
            _ => {}
        }
    }
}

/// Panels of the Plan Trip screen; all but the form need a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanPanel {
    #[default]
    Form,
    Itinerary,
    Stays,
    Budget,
}

impl PlanPanel {
    pub fn all() -> &'static [PlanPanel] {
        &[
            PlanPanel::Form,
            PlanPanel::Itinerary,
            PlanPanel::Stays,
            PlanPanel::Budget,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlanPanel::Form => "Trip Details",
            PlanPanel::Itinerary => "Itinerary",
            PlanPanel::Stays => "Accommodations",
            PlanPanel::Budget => "Budget Tracker",
        }
    }
}

/// Rows of the budget tracker's expense entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BudgetField {
    #[default]
    Category,
    Amount,
    /// Index into [`QUICK_ADD_AMOUNTS`]
    QuickAdd(usize),
}

impl BudgetField {
    pub fn all() -> &'static [BudgetField] {
        &[
            BudgetField::Category,
            BudgetField::Amount,
            BudgetField::QuickAdd(0),
            BudgetField::QuickAdd(1),
            BudgetField::QuickAdd(2),
        ]
    }
}

/// Selector focus on the Explore screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExploreField {
    #[default]
    Search,
    Category,
    Region,
}

impl ExploreField {
    pub fn all() -> &'static [ExploreField] {
        &[ExploreField::Search, ExploreField::Category, ExploreField::Region]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Overview,
    Settings,
    Preferences,
}

impl ProfileTab {
    pub fn all() -> &'static [ProfileTab] {
        &[ProfileTab::Overview, ProfileTab::Settings, ProfileTab::Preferences]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::Overview => "Overview",
            ProfileTab::Settings => "Settings",
            ProfileTab::Preferences => "Preferences",
        }
    }
}

/// Editable rows of the preferences tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceField {
    Transport,
    BudgetRange,
    TravelStyle,
    Accommodation,
    /// Index into [`crate::config::NOTIFICATION_ITEMS`]
    Notification(usize),
    Save,
}

impl PreferenceField {
    pub fn all() -> &'static [PreferenceField] {
        &[
            PreferenceField::Transport,
            PreferenceField::BudgetRange,
            PreferenceField::TravelStyle,
            PreferenceField::Accommodation,
            PreferenceField::Notification(0),
            PreferenceField::Notification(1),
            PreferenceField::Notification(2),
            PreferenceField::Notification(3),
            PreferenceField::Save,
        ]
    }
}

/// Main application struct managing state and data
pub struct App {
    /// Screen currently shown
    pub screen: Screen,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// One-line feedback shown in the footer
    pub status_message: Option<String>,
    pub settings: Settings,
    /// Preferences differ from what was last saved
    pub preferences_dirty: bool,

    pub form: PlanForm,
    pub trip: TripState,
    pub plan_panel: PlanPanel,
    /// Highlighted row in the itinerary browser
    pub itinerary_cursor: usize,
    pub stay_filter: Option<AccommodationType>,
    pub budget_focus: BudgetField,
    pub expense_category: ExpenseCategory,
    pub expense_input: String,

    pub trips: Vec<TripRecord>,
    pub trip_tab: TripStatus,

    pub explore_query: CatalogQuery<ExploreCategory>,
    pub explore_focus: ExploreField,

    pub guide_filter: Option<GuideCategory>,

    pub profile_tab: ProfileTab,
    /// `None` while the tab selector itself has focus
    pub preference_focus: Option<PreferenceField>,

    settings_store: Option<SettingsStore>,
    catalog: Box<dyn CatalogSource>,
    weather: Box<dyn WeatherSource>,
}

impl App {
    /// Creates an App backed by the built-in catalog and weather
    pub fn new(settings: Settings, settings_store: Option<SettingsStore>) -> Self {
        Self::with_sources(
            settings,
            settings_store,
            Box::new(StaticCatalog),
            Box::new(StaticWeather),
        )
    }

    /// Creates an App with custom catalog and weather sources
    pub fn with_sources(
        settings: Settings,
        settings_store: Option<SettingsStore>,
        catalog: Box<dyn CatalogSource>,
        weather: Box<dyn WeatherSource>,
    ) -> Self {
        Self {
            screen: Screen::default(),
            should_quit: false,
            show_help: false,
            status_message: None,
            form: PlanForm::from_settings(&settings),
            settings,
            preferences_dirty: false,
            trip: TripState::new(),
            plan_panel: PlanPanel::default(),
            itinerary_cursor: 0,
            stay_filter: None,
            budget_focus: BudgetField::default(),
            expense_category: ExpenseCategory::default(),
            expense_input: String::new(),
            trips: all_trips(),
            trip_tab: TripStatus::Upcoming,
            explore_query: CatalogQuery::default(),
            explore_focus: ExploreField::default(),
            guide_filter: None,
            profile_tab: ProfileTab::default(),
            preference_focus: None,
            settings_store,
            catalog,
            weather,
        }
    }

    /// Creates an App with CLI arguments applied on top of the settings.
    ///
    /// Prefilled values replace the configured form defaults. When both
    /// locations are given the plan is created right away.
    pub fn with_startup_config(
        config: StartupConfig,
        settings: Settings,
        settings_store: Option<SettingsStore>,
    ) -> Self {
        let mut app = Self::new(settings, settings_store);
        app.screen = config.screen;

        if let Some(from) = &config.from {
            app.form.current_location = from.clone();
        }
        if let Some(to) = &config.to {
            app.form.destination = to.clone();
        }
        if let Some(days) = config.days {
            app.form.days = days;
        }
        if let Some(budget) = config.budget {
            app.form.budget = budget;
        }
        if let Some(mode) = config.mode {
            app.form.mode = mode;
        }
        if config.plans_on_start() {
            app.form.focus = FormField::Submit;
            app.submit_plan();
        }
        app
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `Ctrl-C`: Quit from anywhere
    /// - `Tab`/`Shift-Tab`, `F1`-`F5`: Switch screens
    /// - `q`: Quit (outside text fields)
    /// - `?`: Toggle help (outside text fields)
    /// - `Up`/`Down`: Move focus or cursor
    /// - `Left`/`Right`: Change the focused selector or stepper
    /// - `Enter`/`Space`: Activate the focused row
    /// - `PageUp`/`PageDown` (Plan Trip): Switch panels once a plan exists
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            self.should_quit = true;
            return;
        }

        // Help overlay intercepts all keys when shown
        if self.show_help {
            if matches!(
                key_event.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return;
        }

        match key_event.code {
            KeyCode::Tab => return self.switch_screen(cycle(Screen::all(), self.screen, 1)),
            KeyCode::BackTab => return self.switch_screen(cycle(Screen::all(), self.screen, -1)),
            KeyCode::F(n) => {
                if let Some(screen) = Screen::from_function_key(n) {
                    self.switch_screen(screen);
                }
                return;
            }
            _ => {}
        }

        if self.text_input_focused() {
            if let Some(text) = self.focused_text_mut() {
                match key_event.code {
                    KeyCode::Char(c) => {
                        text.push(c);
                        return;
                    }
                    KeyCode::Backspace => {
                        text.pop();
                        return;
                    }
                    _ => {}
                }
            }
        } else {
            match key_event.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                    return;
                }
                _ => {}
            }
        }

        match self.screen {
            Screen::PlanTrip => self.handle_plan_key(key_event),
            Screen::MyTrips => match key_event.code {
                KeyCode::Left | KeyCode::Char('h') => {
                    self.trip_tab = cycle(TripStatus::all(), self.trip_tab, -1);
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.trip_tab = cycle(TripStatus::all(), self.trip_tab, 1);
                }
                _ => {}
            },
            Screen::Explore => self.handle_explore_key(key_event),
            Screen::Guides => match key_event.code {
                KeyCode::Left | KeyCode::Char('h') => {
                    self.guide_filter = cycle_choice(GuideCategory::all(), self.guide_filter, -1);
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.guide_filter = cycle_choice(GuideCategory::all(), self.guide_filter, 1);
                }
                _ => {}
            },
            Screen::Profile => self.handle_profile_key(key_event),
        }
    }

    fn switch_screen(&mut self, screen: Screen) {
        if screen != self.screen {
            tracing::debug!(from = self.screen.label(), to = screen.label(), "screen switched");
            self.screen = screen;
            self.status_message = None;
        }
    }

    /// True when printable keys go into a text field
    pub fn text_input_focused(&self) -> bool {
        match self.screen {
            Screen::PlanTrip => match self.plan_panel {
                PlanPanel::Form => self.form.focus.is_text(),
                PlanPanel::Budget => self.budget_focus == BudgetField::Amount,
                _ => false,
            },
            Screen::Explore => self.explore_focus == ExploreField::Search,
            _ => false,
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.screen {
            Screen::PlanTrip => match self.plan_panel {
                PlanPanel::Form => self.form.focused_text_mut(),
                PlanPanel::Budget if self.budget_focus == BudgetField::Amount => {
                    Some(&mut self.expense_input)
                }
                _ => None,
            },
            Screen::Explore if self.explore_focus == ExploreField::Search => {
                Some(&mut self.explore_query.search)
            }
            _ => None,
        }
    }

    // ------------------------------------------------------------------
    // Plan Trip
    // ------------------------------------------------------------------

    /// Panels the user can currently move between
    pub fn available_panels(&self) -> &'static [PlanPanel] {
        if self.trip.has_plan() {
            PlanPanel::all()
        } else {
            &PlanPanel::all()[..1]
        }
    }

    fn handle_plan_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::PageDown => {
                self.plan_panel = cycle(self.available_panels(), self.plan_panel, 1);
                return;
            }
            KeyCode::PageUp => {
                self.plan_panel = cycle(self.available_panels(), self.plan_panel, -1);
                return;
            }
            KeyCode::Esc if self.plan_panel != PlanPanel::Form => {
                self.plan_panel = PlanPanel::Form;
                return;
            }
            _ => {}
        }

        match self.plan_panel {
            PlanPanel::Form => match key_event.code {
                KeyCode::Up => {
                    self.form.focus = cycle(FormField::all(), self.form.focus, -1);
                }
                KeyCode::Down => {
                    self.form.focus = cycle(FormField::all(), self.form.focus, 1);
                }
                KeyCode::Left => self.form.adjust(-1),
                KeyCode::Right => self.form.adjust(1),
                KeyCode::Enter => {
                    if self.form.focus == FormField::Submit {
                        self.submit_plan();
                    } else {
                        self.form.focus = cycle(FormField::all(), self.form.focus, 1);
                    }
                }
                _ => {}
            },
            PlanPanel::Itinerary => match key_event.code {
                KeyCode::Up | KeyCode::Char('k') => self.move_itinerary_cursor(-1),
                KeyCode::Down | KeyCode::Char('j') => self.move_itinerary_cursor(1),
                KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected_destination(),
                _ => {}
            },
            PlanPanel::Stays => match key_event.code {
                KeyCode::Left | KeyCode::Char('h') => {
                    self.stay_filter = cycle_choice(AccommodationType::all(), self.stay_filter, -1);
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.stay_filter = cycle_choice(AccommodationType::all(), self.stay_filter, 1);
                }
                _ => {}
            },
            PlanPanel::Budget => match key_event.code {
                KeyCode::Up => {
                    self.budget_focus = cycle(BudgetField::all(), self.budget_focus, -1);
                }
                KeyCode::Down => {
                    self.budget_focus = cycle(BudgetField::all(), self.budget_focus, 1);
                }
                KeyCode::Left if self.budget_focus == BudgetField::Category => {
                    self.expense_category =
                        cycle(ExpenseCategory::all(), self.expense_category, -1);
                }
                KeyCode::Right if self.budget_focus == BudgetField::Category => {
                    self.expense_category = cycle(ExpenseCategory::all(), self.expense_category, 1);
                }
                KeyCode::Enter | KeyCode::Char(' ') => match self.budget_focus {
                    BudgetField::Amount => self.submit_expense_input(),
                    BudgetField::QuickAdd(i) => {
                        if let Some(rupees) = QUICK_ADD_AMOUNTS.get(i) {
                            let paise = i64::try_from(rupees_to_paise(*rupees)).unwrap_or(i64::MAX);
                            self.add_expense(paise);
                        }
                    }
                    BudgetField::Category => {
                        self.expense_category = cycle(ExpenseCategory::all(), self.expense_category, 1);
                    }
                },
                _ => {}
            },
        }
    }

    /// Creates the plan from the form, or records why it can't be created
    pub fn submit_plan(&mut self) {
        match self.trip.create_plan(self.form.params(), self.catalog.as_ref()) {
            Ok(next) => {
                self.trip = next;
                self.form.error = None;
                self.itinerary_cursor = 0;
                self.expense_input.clear();
                self.budget_focus = BudgetField::default();
                self.plan_panel = PlanPanel::Itinerary;
                self.status_message = Some(format!(
                    "Trip planned: {} to {}",
                    self.form.current_location.trim(),
                    self.form.destination.trim()
                ));
            }
            Err(e) => {
                tracing::info!(error = %e, "trip plan rejected");
                self.status_message = None;
                self.form.error = Some(e);
            }
        }
    }

    fn move_itinerary_cursor(&mut self, step: isize) {
        let count = self.trip.catalog().len() as isize;
        if count == 0 {
            return;
        }
        self.itinerary_cursor = (self.itinerary_cursor as isize + step).rem_euclid(count) as usize;
    }

    /// Catalog entry under the itinerary cursor
    pub fn highlighted_destination(&self) -> Option<&Destination> {
        self.trip.catalog().get(self.itinerary_cursor)
    }

    fn toggle_selected_destination(&mut self) {
        let Some(id) = self.highlighted_destination().map(|d| d.id.clone()) else {
            return;
        };
        match self.trip.toggle_destination(&id) {
            Ok(next) => self.trip = next,
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    /// Whether the typed amount would be accepted; drives the add button
    pub fn expense_input_valid(&self) -> bool {
        parse_expense_amount(&self.expense_input).is_ok()
    }

    fn submit_expense_input(&mut self) {
        match parse_expense_amount(&self.expense_input) {
            Ok(amount) => {
                if self.add_expense(amount) {
                    self.expense_input.clear();
                }
            }
            Err(e) => {
                tracing::debug!(input = %self.expense_input, "expense input rejected");
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Records an expense of `paise` in the selected category. Returns
    /// whether it was accepted.
    fn add_expense(&mut self, paise: i64) -> bool {
        match self.trip.add_expense(self.expense_category, paise) {
            Ok(next) => {
                self.trip = next;
                self.status_message = Some(format!(
                    "Added {} for {}",
                    format_paise(paise.unsigned_abs()),
                    self.expense_category.label()
                ));
                true
            }
            Err(e) => {
                self.status_message = Some(e.to_string());
                false
            }
        }
    }

    /// Weather at the origin and destination of the current plan
    pub fn plan_weather(&self) -> Option<(WeatherReport, WeatherReport)> {
        let params = self.trip.params()?;
        Some((
            self.weather.origin(&params.current_location),
            self.weather.destination(&params.destination),
        ))
    }

    pub fn filtered_stays(&self) -> Vec<&'static Accommodation> {
        filter_accommodations(all_accommodations(), self.stay_filter)
    }

    // ------------------------------------------------------------------
    // My Trips, Explore, Guides
    // ------------------------------------------------------------------

    pub fn filtered_trips(&self) -> Vec<&TripRecord> {
        filter_trips(&self.trips, self.trip_tab)
    }

    pub fn filtered_explore(&self) -> Vec<&'static ExploreDestination> {
        filter_catalog(all_explore_destinations(), &self.explore_query)
    }

    pub fn filtered_guides(&self) -> Vec<&'static Guide> {
        filter_guides(all_guides(), self.guide_filter)
    }

    fn handle_explore_key(&mut self, key_event: KeyEvent) {
        let step = match key_event.code {
            KeyCode::Up => {
                self.explore_focus = cycle(ExploreField::all(), self.explore_focus, -1);
                return;
            }
            KeyCode::Down => {
                self.explore_focus = cycle(ExploreField::all(), self.explore_focus, 1);
                return;
            }
            KeyCode::Esc => {
                self.explore_query = CatalogQuery::default();
                return;
            }
            KeyCode::Left => -1,
            KeyCode::Right => 1,
            _ => return,
        };
        match self.explore_focus {
            ExploreField::Search => {}
            ExploreField::Category => {
                self.explore_query.category =
                    cycle_choice(ExploreCategory::all(), self.explore_query.category, step);
            }
            ExploreField::Region => {
                let current = self
                    .explore_query
                    .region
                    .as_deref()
                    .and_then(|r| STATES.iter().copied().find(|s| *s == r));
                self.explore_query.region =
                    cycle_choice(&STATES, current, step).map(str::to_string);
            }
        }
    }

    // ------------------------------------------------------------------
    // Profile
    // ------------------------------------------------------------------

    fn handle_profile_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Up => self.move_preference_focus(-1),
            KeyCode::Down => self.move_preference_focus(1),
            KeyCode::Left => self.adjust_profile(-1),
            KeyCode::Right => self.adjust_profile(1),
            KeyCode::Enter | KeyCode::Char(' ') => match self.preference_focus {
                Some(PreferenceField::Notification(i)) => {
                    let prefs = &mut self.settings.preferences;
                    prefs.notifications = prefs.notifications.toggled(i);
                    self.preferences_dirty = true;
                }
                Some(PreferenceField::Save) => self.save_preferences(),
                Some(_) => self.adjust_profile(1),
                None => {}
            },
            _ => {}
        }
    }

    /// Moves through the tab selector and, on the preferences tab, its rows
    fn move_preference_focus(&mut self, step: isize) {
        if self.profile_tab != ProfileTab::Preferences {
            return;
        }
        let rows = PreferenceField::all();
        let len = rows.len() as isize + 1;
        let index = match self.preference_focus {
            None => 0,
            Some(field) => rows.iter().position(|f| *f == field).map_or(0, |i| i as isize + 1),
        };
        self.preference_focus = match (index + step).rem_euclid(len) {
            0 => None,
            i => Some(rows[(i - 1) as usize]),
        };
    }

    fn adjust_profile(&mut self, step: isize) {
        let prefs = &mut self.settings.preferences;
        match self.preference_focus {
            None => {
                self.profile_tab = cycle(ProfileTab::all(), self.profile_tab, step);
                return;
            }
            Some(PreferenceField::Transport) => {
                prefs.transport = cycle(PreferredTransport::all(), prefs.transport, step);
            }
            Some(PreferenceField::BudgetRange) => {
                prefs.budget_range = cycle(BudgetRange::all(), prefs.budget_range, step);
            }
            Some(PreferenceField::TravelStyle) => {
                prefs.travel_style = cycle(TravelStyle::all(), prefs.travel_style, step);
            }
            Some(PreferenceField::Accommodation) => {
                prefs.accommodation = cycle(PreferredStay::all(), prefs.accommodation, step);
            }
            Some(PreferenceField::Notification(_)) | Some(PreferenceField::Save) => return,
        }
        self.preferences_dirty = true;
    }

    /// Writes the settings file with the edited preferences
    pub fn save_preferences(&mut self) {
        let Some(store) = &self.settings_store else {
            self.status_message = Some("No settings location available".to_string());
            return;
        };
        match store.save(&self.settings) {
            Ok(()) => {
                self.preferences_dirty = false;
                self.status_message = Some("Preferences saved".to_string());
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to save preferences");
                self.status_message = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Coordinates, DestinationCategory, WeatherCondition};
    use crate::trip::Severity;
    use tempfile::TempDir;

    /// Helper to create a KeyEvent for testing
    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, codes: &[KeyCode]) {
        for code in codes {
            app.handle_key(key_event(*code));
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key_event(KeyCode::Char(c)));
        }
    }

    fn test_app() -> App {
        App::new(Settings::default(), None)
    }

    /// App with Kochi to Thrissur planned through the form
    fn planned_app() -> App {
        let mut app = test_app();
        type_text(&mut app, "Kochi");
        press(&mut app, &[KeyCode::Down]);
        type_text(&mut app, "Thrissur");
        app.form.focus = FormField::Submit;
        press(&mut app, &[KeyCode::Enter]);
        assert!(app.trip.has_plan());
        app
    }

    /// Catalog with two places one degree apart, west to east
    struct Line;

    impl CatalogSource for Line {
        fn destinations_for(&self, _params: &TripParameters) -> Vec<Destination> {
            let at = |id: &str, lng: f64| Destination {
                id: id.to_string(),
                name: format!("Stop {id}"),
                category: DestinationCategory::Attraction,
                rating: 4.0,
                description: String::new(),
                coordinates: Coordinates { lat: 10.0, lng },
                estimated_cost: 100,
                duration: "1 hour".to_string(),
            };
            vec![at("a", 76.0), at("b", 77.0)]
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    #[test]
    fn test_initial_state() {
        let app = test_app();
        assert_eq!(app.screen, Screen::PlanTrip);
        assert_eq!(app.plan_panel, PlanPanel::Form);
        assert!(!app.trip.has_plan());
        assert!(!app.should_quit);
        assert_eq!(app.form.days, 1);
        assert_eq!(app.form.budget, 5000);
    }

    #[test]
    fn test_tab_cycles_screens_and_wraps() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::Tab]);
        assert_eq!(app.screen, Screen::MyTrips);
        press(&mut app, &[KeyCode::Tab, KeyCode::Tab, KeyCode::Tab, KeyCode::Tab]);
        assert_eq!(app.screen, Screen::PlanTrip);
        press(&mut app, &[KeyCode::BackTab]);
        assert_eq!(app.screen, Screen::Profile);
    }

    #[test]
    fn test_function_keys_jump_to_screens() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::F(3)]);
        assert_eq!(app.screen, Screen::Explore);
        press(&mut app, &[KeyCode::F(5)]);
        assert_eq!(app.screen, Screen::Profile);
        press(&mut app, &[KeyCode::F(9)]);
        assert_eq!(app.screen, Screen::Profile);
        press(&mut app, &[KeyCode::F(1)]);
        assert_eq!(app.screen, Screen::PlanTrip);
    }

    #[test]
    fn test_q_types_into_text_field_but_quits_elsewhere() {
        let mut app = test_app();
        type_text(&mut app, "q");
        assert!(!app.should_quit);
        assert_eq!(app.form.current_location, "q");

        press(&mut app, &[KeyCode::F(2), KeyCode::Char('q')]);
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_text_field() {
        let mut app = test_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_overlay_intercepts_keys() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::F(2), KeyCode::Char('?')]);
        assert!(app.show_help);
        press(&mut app, &[KeyCode::Tab]);
        assert_eq!(app.screen, Screen::MyTrips, "keys are swallowed while help is shown");
        press(&mut app, &[KeyCode::Esc]);
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    // ========================================================================
    // Plan form
    // ========================================================================

    #[test]
    fn test_form_steppers_respect_limits() {
        let mut app = test_app();
        app.form.focus = FormField::Days;
        press(&mut app, &[KeyCode::Left]);
        assert_eq!(app.form.days, 1);
        for _ in 0..20 {
            press(&mut app, &[KeyCode::Right]);
        }
        assert_eq!(app.form.days, 14);

        app.form.focus = FormField::Budget;
        press(&mut app, &[KeyCode::Right]);
        assert_eq!(app.form.budget, 5500);
        for _ in 0..20 {
            press(&mut app, &[KeyCode::Left]);
        }
        assert_eq!(app.form.budget, 1000);

        app.form.focus = FormField::Mode;
        press(&mut app, &[KeyCode::Left]);
        assert_eq!(app.form.mode, TransportMode::Car);
    }

    #[test]
    fn test_enter_advances_until_submit() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(app.form.focus, FormField::Days);
        assert!(!app.trip.has_plan());
    }

    #[test]
    fn test_submit_with_missing_destination_shows_error() {
        let mut app = test_app();
        type_text(&mut app, "Kochi");
        app.form.focus = FormField::Submit;
        press(&mut app, &[KeyCode::Enter]);
        assert!(!app.trip.has_plan());
        assert_eq!(app.form.error, Some(TripError::MissingField("Destination")));
        assert_eq!(app.plan_panel, PlanPanel::Form);
    }

    #[test]
    fn test_backspace_edits_text_field() {
        let mut app = test_app();
        type_text(&mut app, "Kochx");
        press(&mut app, &[KeyCode::Backspace]);
        type_text(&mut app, "i");
        assert_eq!(app.form.current_location, "Kochi");
    }

    #[test]
    fn test_submit_creates_plan_and_moves_to_itinerary() {
        let app = planned_app();
        assert_eq!(app.plan_panel, PlanPanel::Itinerary);
        assert_eq!(app.trip.catalog().len(), 5);
        assert_eq!(app.trip.budget().total(), 500_000);
        assert!(app.form.error.is_none());
        assert_eq!(app.plan_weather().map(|(o, d)| (o.temperature, d.temperature)), Some((28, 32)));
    }

    #[test]
    fn test_panels_need_a_plan() {
        let mut app = test_app();
        assert_eq!(app.available_panels(), &[PlanPanel::Form]);
        press(&mut app, &[KeyCode::PageDown]);
        assert_eq!(app.plan_panel, PlanPanel::Form);

        let mut app = planned_app();
        press(&mut app, &[KeyCode::PageDown]);
        assert_eq!(app.plan_panel, PlanPanel::Stays);
        press(&mut app, &[KeyCode::PageDown]);
        assert_eq!(app.plan_panel, PlanPanel::Budget);
        press(&mut app, &[KeyCode::PageDown]);
        assert_eq!(app.plan_panel, PlanPanel::Form);
        press(&mut app, &[KeyCode::PageUp]);
        assert_eq!(app.plan_panel, PlanPanel::Budget);
        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(app.plan_panel, PlanPanel::Form);
    }

    // ========================================================================
    // Itinerary and budget
    // ========================================================================

    #[test]
    fn test_space_toggles_highlighted_destination() {
        let mut app = planned_app();
        press(&mut app, &[KeyCode::Char(' '), KeyCode::Down, KeyCode::Down, KeyCode::Char(' ')]);
        let ids: Vec<&str> = app.trip.itinerary().stops().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(app.trip.itinerary_cost(), 300);

        press(&mut app, &[KeyCode::Up, KeyCode::Up, KeyCode::Char(' ')]);
        assert_eq!(app.trip.itinerary_cost(), 300);
        assert_eq!(app.trip.itinerary().len(), 1);
    }

    #[test]
    fn test_itinerary_cursor_wraps() {
        let mut app = planned_app();
        press(&mut app, &[KeyCode::Up]);
        assert_eq!(app.itinerary_cursor, 4);
        press(&mut app, &[KeyCode::Down]);
        assert_eq!(app.itinerary_cursor, 0);
    }

    #[test]
    fn test_expense_entry_and_quick_add() {
        let mut app = planned_app();
        app.plan_panel = PlanPanel::Budget;
        press(&mut app, &[KeyCode::Right]);
        assert_eq!(app.expense_category, ExpenseCategory::Transport);

        press(&mut app, &[KeyCode::Down]);
        assert!(app.text_input_focused());
        type_text(&mut app, "abc");
        assert!(!app.expense_input_valid());
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.trip.budget().spent(), 0);
        assert_eq!(app.expense_input, "abc", "rejected input stays for correction");

        app.expense_input.clear();
        type_text(&mut app, "200");
        assert!(app.expense_input_valid());
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.trip.budget().spent(), 20_000);
        assert!(app.expense_input.is_empty());
        assert_eq!(app.status_message.as_deref(), Some("Added ₹200 for Transportation"));

        press(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.budget_focus, BudgetField::QuickAdd(1));
        assert_eq!(app.trip.budget().spent(), 30_000);
        assert_eq!(app.trip.budget().expenses()[1].category, ExpenseCategory::Transport);
    }

    #[test]
    fn test_overspending_is_flagged() {
        let mut app = planned_app();
        app.plan_panel = PlanPanel::Budget;
        app.budget_focus = BudgetField::Amount;
        type_text(&mut app, "5300");
        press(&mut app, &[KeyCode::Enter]);
        let status = app.trip.budget_status();
        assert!(status.exceeded);
        assert_eq!(status.remaining, -30_000);
        assert_eq!(status.severity, Severity::Critical);
    }

    #[test]
    fn test_fractional_expense_entry() {
        let mut app = planned_app();
        app.plan_panel = PlanPanel::Budget;
        app.budget_focus = BudgetField::Amount;
        type_text(&mut app, "12.5");
        assert!(app.expense_input_valid());
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.trip.budget().spent(), 1_250);
        assert_eq!(app.status_message.as_deref(), Some("Added ₹12.50 for Food & Dining"));

        type_text(&mut app, "3.999");
        assert!(!app.expense_input_valid());
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.trip.budget().spent(), 1_250);
    }

    #[test]
    fn test_replanning_resets_selection_and_budget() {
        let mut app = planned_app();
        press(&mut app, &[KeyCode::Char(' ')]);
        app.plan_panel = PlanPanel::Budget;
        app.budget_focus = BudgetField::QuickAdd(2);
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.trip.budget().spent(), 20_000);

        app.plan_panel = PlanPanel::Form;
        app.form.focus = FormField::Submit;
        press(&mut app, &[KeyCode::Enter]);
        assert!(app.trip.itinerary().is_empty());
        assert_eq!(app.trip.budget().spent(), 0);
    }

    #[test]
    fn test_stay_tabs_filter_accommodations() {
        let mut app = planned_app();
        app.plan_panel = PlanPanel::Stays;
        assert_eq!(app.filtered_stays().len(), 3);
        press(&mut app, &[KeyCode::Right]);
        assert_eq!(app.stay_filter, Some(AccommodationType::Hotel));
        assert!(app.filtered_stays().iter().all(|a| a.kind == AccommodationType::Hotel));
        press(&mut app, &[KeyCode::Left, KeyCode::Left]);
        assert_eq!(app.stay_filter, Some(AccommodationType::Resort));
    }

    #[test]
    fn test_custom_catalog_source_drives_route() {
        let mut app = App::with_sources(
            Settings::default(),
            None,
            Box::new(Line),
            Box::new(StaticWeather),
        );
        app.form.current_location = "A".to_string();
        app.form.destination = "B".to_string();
        app.submit_plan();
        assert_eq!(app.trip.catalog().len(), 2);
        assert_eq!(
            app.trip.route_direction().map(|d| d.label()),
            Some("West to East")
        );
        let (_, destination) = app.plan_weather().unwrap();
        assert_eq!(destination.condition, WeatherCondition::Sunny);
    }

    // ========================================================================
    // Browse screens
    // ========================================================================

    #[test]
    fn test_trip_tabs_cycle() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::F(2)]);
        assert_eq!(app.filtered_trips().len(), 1);
        press(&mut app, &[KeyCode::Right, KeyCode::Right]);
        assert_eq!(app.trip_tab, TripStatus::Completed);
        assert_eq!(app.filtered_trips().len(), 2);
        press(&mut app, &[KeyCode::Right]);
        assert_eq!(app.trip_tab, TripStatus::Upcoming);
    }

    #[test]
    fn test_explore_search_and_selectors() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::F(3)]);
        assert!(app.text_input_focused());
        type_text(&mut app, "mun");
        assert_eq!(app.filtered_explore().len(), 1);

        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(app.filtered_explore().len(), 6);

        press(&mut app, &[KeyCode::Down]);
        assert!(!app.text_input_focused());
        press(&mut app, &[KeyCode::Right, KeyCode::Right, KeyCode::Right]);
        assert_eq!(app.explore_query.category, Some(ExploreCategory::Heritage));

        press(&mut app, &[KeyCode::Down, KeyCode::Right, KeyCode::Right]);
        assert_eq!(app.explore_query.region.as_deref(), Some("Karnataka"));
        let names: Vec<&str> = app.filtered_explore().iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Hampi"]);
    }

    #[test]
    fn test_explore_region_cycles_back_to_all() {
        let mut app = test_app();
        app.screen = Screen::Explore;
        app.explore_focus = ExploreField::Region;
        press(&mut app, &[KeyCode::Left]);
        assert_eq!(app.explore_query.region.as_deref(), Some(STATES[STATES.len() - 1]));
        press(&mut app, &[KeyCode::Right]);
        assert_eq!(app.explore_query.region, None);
    }

    #[test]
    fn test_guide_tabs_include_all() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::F(4)]);
        assert_eq!(app.filtered_guides().len(), 5);
        press(&mut app, &[KeyCode::Left]);
        assert_eq!(app.guide_filter, Some(GuideCategory::Food));
        press(&mut app, &[KeyCode::Right]);
        assert_eq!(app.guide_filter, None);
    }

    // ========================================================================
    // Profile
    // ========================================================================

    #[test]
    fn test_profile_tabs_and_preference_rows() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::F(5)]);
        press(&mut app, &[KeyCode::Down]);
        assert_eq!(app.preference_focus, None, "rows only exist on the preferences tab");

        press(&mut app, &[KeyCode::Right, KeyCode::Right]);
        assert_eq!(app.profile_tab, ProfileTab::Preferences);
        press(&mut app, &[KeyCode::Down]);
        assert_eq!(app.preference_focus, Some(PreferenceField::Transport));
        press(&mut app, &[KeyCode::Left]);
        assert_eq!(app.settings.preferences.transport, PreferredTransport::Flight);
        assert!(app.preferences_dirty);

        press(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Down]);
        assert_eq!(app.preference_focus, Some(PreferenceField::Notification(0)));
        press(&mut app, &[KeyCode::Char(' ')]);
        assert!(!app.settings.preferences.notifications.trip_reminders);

        press(&mut app, &[KeyCode::Up, KeyCode::Up, KeyCode::Up, KeyCode::Up, KeyCode::Up]);
        assert_eq!(app.preference_focus, None);
    }

    #[test]
    fn test_save_preferences_writes_settings() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = SettingsStore::with_path(temp_dir.path().join("settings.json"));
        let mut app = App::new(Settings::default(), Some(store.clone()));
        app.screen = Screen::Profile;
        app.profile_tab = ProfileTab::Preferences;
        app.preference_focus = Some(PreferenceField::TravelStyle);
        press(&mut app, &[KeyCode::Right]);
        app.preference_focus = Some(PreferenceField::Save);
        press(&mut app, &[KeyCode::Enter]);

        assert!(!app.preferences_dirty);
        assert_eq!(app.status_message.as_deref(), Some("Preferences saved"));
        assert_eq!(store.load().preferences.travel_style, TravelStyle::Couple);
    }

    #[test]
    fn test_save_without_store_reports_message() {
        let mut app = test_app();
        app.save_preferences();
        assert_eq!(
            app.status_message.as_deref(),
            Some("No settings location available")
        );
    }

    // ========================================================================
    // Startup
    // ========================================================================

    #[test]
    fn test_startup_config_prefills_and_plans() {
        let config = StartupConfig {
            screen: Screen::PlanTrip,
            from: Some("Kochi".to_string()),
            to: Some("Thrissur".to_string()),
            days: Some(3),
            budget: Some(8000),
            mode: Some(TransportMode::Train),
            config_path: None,
        };
        let app = App::with_startup_config(config, Settings::default(), None);
        assert!(app.trip.has_plan());
        let params = app.trip.params().unwrap();
        assert_eq!(params.days, 3);
        assert_eq!(params.budget, 8000);
        assert_eq!(params.transport_mode, TransportMode::Train);
        assert_eq!(app.plan_panel, PlanPanel::Itinerary);
    }

    #[test]
    fn test_startup_config_without_both_ends_only_prefills() {
        let config = StartupConfig {
            screen: Screen::Guides,
            to: Some("Munnar".to_string()),
            ..StartupConfig::default()
        };
        let settings = Settings {
            default_days: 4,
            ..Settings::default()
        };
        let app = App::with_startup_config(config, settings, None);
        assert!(!app.trip.has_plan());
        assert_eq!(app.screen, Screen::Guides);
        assert_eq!(app.form.destination, "Munnar");
        assert_eq!(app.form.days, 4);
    }

    #[test]
    fn test_screen_from_str() {
        assert_eq!(Screen::from_str("home"), Some(Screen::PlanTrip));
        assert_eq!(Screen::from_str("MY-TRIPS"), Some(Screen::MyTrips));
        assert_eq!(Screen::from_str("beach"), None);
        assert_eq!(Screen::from_function_key(0), None);
    }
}
