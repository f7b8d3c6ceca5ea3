//! TuiApp — the TEA model.
//!
//! Owns the current catalog `Session` plus all form state (inputs,
//! selectors, highlighted rows). Update receives TuiMessages and replaces
//! the session with the snapshot each dispatched action returns. View reads
//! state only.

use crate::catalog::{Action, CatalogEvent, Session};
use crate::config::StartSection;

use super::event::TuiMessage;

/// Which section is currently visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    CourseTypes,   // F1, default
    Courses,       // F2
    Offerings,     // F3
    Registrations, // F4
    Activity,      // F5 (only when debug_mode)
}

impl From<StartSection> for Section {
    fn from(s: StartSection) -> Self {
        match s {
            StartSection::CourseTypes => Section::CourseTypes,
            StartSection::Courses => Section::Courses,
            StartSection::Offerings => Section::Offerings,
            StartSection::Registrations => Section::Registrations,
        }
    }
}

/// Which of the two label collections a pane edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    CourseType,
    Course,
}

impl LabelKind {
    pub fn add(self, name: String) -> Action {
        match self {
            LabelKind::CourseType => Action::AddCourseType(name),
            LabelKind::Course => Action::AddCourse(name),
        }
    }

    pub fn update(self, index: usize, name: String) -> Action {
        match self {
            LabelKind::CourseType => Action::UpdateCourseType { index, name },
            LabelKind::Course => Action::UpdateCourse { index, name },
        }
    }

    pub fn delete(self, index: usize) -> Action {
        match self {
            LabelKind::CourseType => Action::DeleteCourseType(index),
            LabelKind::Course => Action::DeleteCourse(index),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            LabelKind::CourseType => "Course Types",
            LabelKind::Course => "Courses",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            LabelKind::CourseType => "New Course Type",
            LabelKind::Course => "New Course",
        }
    }
}

/// Form state for a course-type or course section.
#[derive(Debug, Clone, Default)]
pub struct LabelPane {
    /// Text typed for the next `add`.
    pub input: String,
    /// Highlighted row.
    pub selected: usize,
    /// Row being edited in place, if any.
    pub editing: Option<usize>,
    /// Live text of the row being edited.
    pub edit_buffer: String,
}

/// Which selector has focus in the Offerings section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorFocus {
    CourseType,
    Course,
    Filter,
}

impl SelectorFocus {
    pub fn next(self) -> Self {
        match self {
            SelectorFocus::CourseType => SelectorFocus::Course,
            SelectorFocus::Course => SelectorFocus::Filter,
            SelectorFocus::Filter => SelectorFocus::CourseType,
        }
    }
}

/// A dropdown-like selector. Keeps the chosen *value*, not just the cursor,
/// so a later deletion from the source list leaves the selection intact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub cursor: Option<usize>,
    pub value: Option<String>,
}

impl Selector {
    /// Step through `options`, wrapping. No-op when there are none.
    pub fn cycle(&mut self, options: &[String], forward: bool) {
        if options.is_empty() {
            return;
        }
        let len = options.len();
        let next = match (self.cursor, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(c), true) => (c + 1) % len,
            (Some(c), false) => (c + len - 1) % len,
        };
        self.cursor = Some(next);
        self.value = Some(options[next].clone());
    }
}

/// Form state for the Offerings section.
#[derive(Debug, Clone)]
pub struct OfferingPane {
    pub focus: SelectorFocus,
    pub course_type: Selector,
    pub course: Selector,
    /// Filter prefix; `None` means "All Types".
    pub filter: Selector,
    /// Highlighted row within the filtered list.
    pub selected: usize,
}

impl Default for OfferingPane {
    fn default() -> Self {
        Self {
            focus: SelectorFocus::CourseType,
            course_type: Selector::default(),
            course: Selector::default(),
            filter: Selector::default(),
            selected: 0,
        }
    }
}

impl OfferingPane {
    /// Step the filter through "All Types" followed by each course type.
    pub fn cycle_filter(&mut self, course_types: &[String], forward: bool) {
        let len = course_types.len() + 1;
        let current = self.filter.cursor.map_or(0, |c| c + 1);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        if next == 0 {
            self.filter = Selector::default();
        } else {
            self.filter = Selector {
                cursor: Some(next - 1),
                value: Some(course_types[next - 1].clone()),
            };
        }
    }
}

/// Form state for the Registrations section.
#[derive(Debug, Clone, Default)]
pub struct RegistrationPane {
    pub student_input: String,
    /// Highlighted offering (position in the full offering list).
    pub selected: usize,
}

/// Short-lived status bar message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub text: String,
    pub applied: bool,
    /// Ticks left before it disappears.
    pub ttl: u8,
}

/// Maximum number of events in the activity ring buffer.
pub const EVENT_LOG_CAPACITY: usize = 256;

/// Ticks a flash message stays visible.
const FLASH_TICKS: u8 = 8;

/// The main TUI application state (TEA model).
pub struct TuiApp {
    /// Current catalog snapshot. Replaced, never mutated in place.
    pub session: Session,
    /// Which section is currently visible.
    pub section: Section,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Whether debug mode is enabled (--debug flag). Controls Activity tab visibility.
    pub debug_mode: bool,
    pub course_types: LabelPane,
    pub courses: LabelPane,
    pub offerings: OfferingPane,
    pub registrations: RegistrationPane,
    /// Recent catalog events (ring buffer).
    pub event_log: Vec<CatalogEvent>,
    pub flash: Option<Flash>,
}

impl TuiApp {
    /// Create a new TuiApp over an empty session.
    pub fn new() -> Self {
        Self::with_session(Session::new())
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session,
            section: Section::CourseTypes,
            should_quit: false,
            debug_mode: false,
            course_types: LabelPane::default(),
            courses: LabelPane::default(),
            offerings: OfferingPane::default(),
            registrations: RegistrationPane::default(),
            event_log: Vec::new(),
            flash: None,
        }
    }

    /// Handle a TUI message (TEA update).
    pub fn update(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Input(key) => {
                super::input::handle_key(self, key);
            }
            TuiMessage::Tick => {
                if let Some(flash) = self.flash.as_mut() {
                    flash.ttl = flash.ttl.saturating_sub(1);
                    if flash.ttl == 0 {
                        self.flash = None;
                    }
                }
            }
            TuiMessage::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Run an action against the session and swap in the result.
    /// Returns whether the snapshot changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let (next, event) = self.session.dispatch(action);
        let applied = event.is_applied();
        self.session = next;
        self.flash = Some(Flash {
            text: event.action().to_string(),
            applied,
            ttl: FLASH_TICKS,
        });
        self.event_log.push(event);
        if self.event_log.len() > EVENT_LOG_CAPACITY {
            self.event_log.remove(0);
        }
        self.clamp_selections();
        applied
    }

    /// Keep every highlighted row inside its (possibly shrunken) list.
    pub fn clamp_selections(&mut self) {
        fn clamp(sel: &mut usize, len: usize) {
            *sel = (*sel).min(len.saturating_sub(1));
        }
        clamp(&mut self.course_types.selected, self.session.course_types().len());
        clamp(&mut self.courses.selected, self.session.courses().len());
        let visible = self.visible_offerings().len();
        clamp(&mut self.offerings.selected, visible);
        clamp(&mut self.registrations.selected, self.session.offerings().len());

        for (pane, len) in [
            (&mut self.course_types, self.session.course_types().len()),
            (&mut self.courses, self.session.courses().len()),
        ] {
            if pane.editing.is_some_and(|row| row >= len) {
                pane.editing = None;
                pane.edit_buffer.clear();
            }
        }
    }

    /// The label pane shown by the current section, if any.
    pub fn label_pane(&self) -> Option<(LabelKind, &LabelPane)> {
        match self.section {
            Section::CourseTypes => Some((LabelKind::CourseType, &self.course_types)),
            Section::Courses => Some((LabelKind::Course, &self.courses)),
            _ => None,
        }
    }

    pub fn label_pane_mut(&mut self) -> Option<(LabelKind, &mut LabelPane)> {
        match self.section {
            Section::CourseTypes => Some((LabelKind::CourseType, &mut self.course_types)),
            Section::Courses => Some((LabelKind::Course, &mut self.courses)),
            _ => None,
        }
    }

    pub fn labels_for(&self, kind: LabelKind) -> &[String] {
        match kind {
            LabelKind::CourseType => self.session.course_types().as_slice(),
            LabelKind::Course => self.session.courses().as_slice(),
        }
    }

    /// Whether a label row is being edited in the current section.
    pub fn is_editing(&self) -> bool {
        self.label_pane().is_some_and(|(_, p)| p.editing.is_some())
    }

    /// Offerings passing the current filter, with their full positions.
    pub fn visible_offerings(&self) -> Vec<(usize, &str)> {
        self.session
            .offerings()
            .filter_indexed(self.offerings.filter.value.as_deref())
            .collect()
    }

    /// Offering label highlighted in the Registrations section.
    pub fn registration_target(&self) -> Option<&str> {
        self.session.offerings().get(self.registrations.selected)
    }

    /// Move selection up in the current section.
    pub fn move_up(&mut self) {
        let sel = match self.section {
            Section::CourseTypes => &mut self.course_types.selected,
            Section::Courses => &mut self.courses.selected,
            Section::Offerings => &mut self.offerings.selected,
            Section::Registrations => &mut self.registrations.selected,
            Section::Activity => return,
        };
        *sel = sel.saturating_sub(1);
    }

    /// Move selection down in the current section.
    pub fn move_down(&mut self) {
        let len = match self.section {
            Section::CourseTypes => self.session.course_types().len(),
            Section::Courses => self.session.courses().len(),
            Section::Offerings => self.visible_offerings().len(),
            Section::Registrations => self.session.offerings().len(),
            Section::Activity => return,
        };
        let sel = match self.section {
            Section::CourseTypes => &mut self.course_types.selected,
            Section::Courses => &mut self.courses.selected,
            Section::Offerings => &mut self.offerings.selected,
            Section::Registrations => &mut self.registrations.selected,
            Section::Activity => return,
        };
        if *sel + 1 < len {
            *sel += 1;
        }
    }

    /// Switch sections. Leaving a section ends any in-place edit.
    pub fn switch_section(&mut self, section: Section) {
        if section == Section::Activity && !self.debug_mode {
            return;
        }
        for pane in [&mut self.course_types, &mut self.courses] {
            pane.editing = None;
            pane.edit_buffer.clear();
        }
        self.section = section;
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(types: &[&str], courses: &[&str]) -> TuiApp {
        TuiApp::with_session(Session::seeded(
            types.iter().copied(),
            courses.iter().copied(),
        ))
    }

    #[test]
    fn app_default_state() {
        let app = TuiApp::new();
        assert_eq!(app.section, Section::CourseTypes);
        assert!(!app.should_quit);
        assert!(app.event_log.is_empty());
        assert!(app.flash.is_none());
    }

    #[test]
    fn quit_message() {
        let mut app = TuiApp::new();
        app.update(TuiMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn dispatch_replaces_session_and_logs() {
        let mut app = TuiApp::new();
        assert!(app.dispatch(Action::AddCourseType("Math".into())));
        assert!(!app.dispatch(Action::AddCourseType("Math".into())));
        assert_eq!(app.session.course_types().as_slice(), &["Math"]);
        assert_eq!(app.event_log.len(), 2);
        assert!(app.event_log[0].is_applied());
        assert!(!app.event_log[1].is_applied());
    }

    #[test]
    fn event_log_ring_buffer() {
        let mut app = TuiApp::new();
        for i in 0..300 {
            app.dispatch(Action::AddCourse(format!("c{i}")));
        }
        assert_eq!(app.event_log.len(), EVENT_LOG_CAPACITY);
    }

    #[test]
    fn flash_expires_on_ticks() {
        let mut app = TuiApp::new();
        app.dispatch(Action::AddCourse("Algebra".into()));
        assert!(app.flash.is_some());
        for _ in 0..FLASH_TICKS {
            app.update(TuiMessage::Tick);
        }
        assert!(app.flash.is_none());
    }

    #[test]
    fn delete_last_row_clamps_selection() {
        let mut app = app_with(&["A", "B", "C"], &[]);
        app.course_types.selected = 2;
        app.dispatch(Action::DeleteCourseType(2));
        assert_eq!(app.course_types.selected, 1);
    }

    #[test]
    fn deleting_edited_row_ends_edit() {
        let mut app = app_with(&["A"], &[]);
        app.course_types.editing = Some(0);
        app.course_types.edit_buffer = "A".into();
        app.dispatch(Action::DeleteCourseType(0));
        assert!(app.course_types.editing.is_none());
    }

    #[test]
    fn move_clamped() {
        let mut app = app_with(&["A", "B"], &[]);
        app.move_up();
        assert_eq!(app.course_types.selected, 0);
        app.move_down();
        app.move_down();
        assert_eq!(app.course_types.selected, 1);
    }

    #[test]
    fn selector_cycles_and_wraps() {
        let opts = vec!["Math".to_string(), "Science".to_string()];
        let mut s = Selector::default();
        s.cycle(&opts, true);
        assert_eq!(s.value.as_deref(), Some("Math"));
        s.cycle(&opts, true);
        s.cycle(&opts, true);
        assert_eq!(s.value.as_deref(), Some("Math"));
        s.cycle(&opts, false);
        assert_eq!(s.value.as_deref(), Some("Science"));
    }

    #[test]
    fn selector_without_options_stays_unset() {
        let mut s = Selector::default();
        s.cycle(&[], true);
        assert_eq!(s, Selector::default());
    }

    #[test]
    fn filter_cycles_through_all_types() {
        let types = vec!["Math".to_string()];
        let mut pane = OfferingPane::default();
        pane.cycle_filter(&types, true);
        assert_eq!(pane.filter.value.as_deref(), Some("Math"));
        pane.cycle_filter(&types, true);
        assert_eq!(pane.filter.value, None);
        pane.cycle_filter(&types, false);
        assert_eq!(pane.filter.value.as_deref(), Some("Math"));
    }

    #[test]
    fn visible_offerings_follow_filter() {
        let mut app = TuiApp::new();
        app.dispatch(Action::AddOffering {
            course_type: Some("Math".into()),
            course: Some("Algebra".into()),
        });
        app.dispatch(Action::AddOffering {
            course_type: Some("Science".into()),
            course: Some("Biology".into()),
        });
        app.offerings.filter.value = Some("Science".into());
        assert_eq!(app.visible_offerings(), vec![(1, "Science - Biology")]);
    }

    #[test]
    fn activity_hidden_without_debug() {
        let mut app = TuiApp::new();
        app.switch_section(Section::Activity);
        assert_eq!(app.section, Section::CourseTypes);
        app.debug_mode = true;
        app.switch_section(Section::Activity);
        assert_eq!(app.section, Section::Activity);
    }

    #[test]
    fn start_section_maps() {
        assert_eq!(Section::from(StartSection::Offerings), Section::Offerings);
    }
}
