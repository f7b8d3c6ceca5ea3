//! Session — one immutable snapshot of the whole catalog.
//!
//! Every mutation takes `&self` and returns the next snapshot. The owner
//! (the TUI model) replaces its copy; the previous snapshot is untouched.

use tracing::{debug, info};

use super::action::Action;
use super::events::{now_secs, CatalogEvent};
use super::labels::LabelRegistry;
use super::ledger::{Registration, RegistrationLedger};
use super::offering::OfferingRegistry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    course_types: LabelRegistry,
    courses: LabelRegistry,
    offerings: OfferingRegistry,
    registrations: RegistrationLedger,
}

impl Session {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-filled with course types and courses, added through the
    /// regular `add` path.
    pub fn seeded<T, C>(course_types: T, courses: C) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            course_types: course_types.into_iter().collect(),
            courses: courses.into_iter().collect(),
            ..Self::default()
        }
    }

    // ── course types ──

    pub fn add_course_type(&self, name: &str) -> Self {
        Self {
            course_types: self.course_types.add(name),
            ..self.clone()
        }
    }

    pub fn update_course_type(&self, index: usize, name: &str) -> Self {
        Self {
            course_types: self.course_types.update(index, name),
            ..self.clone()
        }
    }

    pub fn delete_course_type(&self, index: usize) -> Self {
        Self {
            course_types: self.course_types.delete(index),
            ..self.clone()
        }
    }

    // ── courses ──

    pub fn add_course(&self, name: &str) -> Self {
        Self {
            courses: self.courses.add(name),
            ..self.clone()
        }
    }

    pub fn update_course(&self, index: usize, name: &str) -> Self {
        Self {
            courses: self.courses.update(index, name),
            ..self.clone()
        }
    }

    pub fn delete_course(&self, index: usize) -> Self {
        Self {
            courses: self.courses.delete(index),
            ..self.clone()
        }
    }

    // ── offerings ──

    pub fn add_offering(&self, course_type: Option<&str>, course: Option<&str>) -> Self {
        Self {
            offerings: self.offerings.add(course_type, course),
            ..self.clone()
        }
    }

    pub fn update_offering(&self, index: usize, course: &str, course_type: &str) -> Self {
        Self {
            offerings: self.offerings.update(index, course, course_type),
            ..self.clone()
        }
    }

    pub fn delete_offering(&self, index: usize) -> Self {
        Self {
            offerings: self.offerings.delete(index),
            ..self.clone()
        }
    }

    pub fn filter_offerings<'a>(
        &'a self,
        prefix: Option<&'a str>,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.offerings.filter(prefix)
    }

    // ── registrations ──

    pub fn register(&self, offering: &str, student_name: &str) -> Self {
        Self {
            registrations: self.registrations.register(offering, student_name),
            ..self.clone()
        }
    }

    pub fn students_for<'a>(&'a self, offering: &'a str) -> impl Iterator<Item = &'a Registration> + 'a {
        self.registrations.list_for(offering)
    }

    // ── dispatch ──

    /// Apply one action and return the next snapshot.
    pub fn apply(&self, action: &Action) -> Self {
        match action {
            Action::AddCourseType(name) => self.add_course_type(name),
            Action::UpdateCourseType { index, name } => self.update_course_type(*index, name),
            Action::DeleteCourseType(index) => self.delete_course_type(*index),
            Action::AddCourse(name) => self.add_course(name),
            Action::UpdateCourse { index, name } => self.update_course(*index, name),
            Action::DeleteCourse(index) => self.delete_course(*index),
            Action::AddOffering {
                course_type,
                course,
            } => self.add_offering(course_type.as_deref(), course.as_deref()),
            Action::UpdateOffering {
                index,
                course,
                course_type,
            } => self.update_offering(*index, course, course_type),
            Action::DeleteOffering(index) => self.delete_offering(*index),
            Action::Register {
                offering,
                student_name,
            } => self.register(offering, student_name),
        }
    }

    /// Apply an action, log it, and report whether it changed anything.
    pub fn dispatch(&self, action: Action) -> (Self, CatalogEvent) {
        let next = self.apply(&action);
        let at = now_secs();
        let event = if next == *self {
            debug!(%action, "catalog action ignored");
            CatalogEvent::Ignored { action, at }
        } else {
            info!(%action, "catalog action applied");
            CatalogEvent::Applied { action, at }
        };
        (next, event)
    }

    // ── read access ──

    pub fn course_types(&self) -> &LabelRegistry {
        &self.course_types
    }

    pub fn courses(&self) -> &LabelRegistry {
        &self.courses
    }

    pub fn offerings(&self) -> &OfferingRegistry {
        &self.offerings
    }

    pub fn registrations(&self) -> &RegistrationLedger {
        &self.registrations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let s = Session::new();
        assert!(s.course_types().is_empty());
        assert!(s.courses().is_empty());
        assert!(s.offerings().is_empty());
        assert!(s.registrations().is_empty());
    }

    #[test]
    fn collections_are_independent() {
        let s = Session::new().add_course_type("Math").add_course("Math");
        assert_eq!(s.course_types().as_slice(), &["Math"]);
        assert_eq!(s.courses().as_slice(), &["Math"]);
        let s = s.delete_course(0);
        assert_eq!(s.course_types().len(), 1);
        assert!(s.courses().is_empty());
    }

    #[test]
    fn deleting_type_does_not_cascade_to_offerings() {
        let s = Session::new()
            .add_course_type("Math")
            .add_course("Algebra")
            .add_offering(Some("Math"), Some("Algebra"))
            .delete_course_type(0);
        assert!(s.course_types().is_empty());
        assert_eq!(s.offerings().as_slice(), &["Math - Algebra"]);
    }

    #[test]
    fn renaming_type_does_not_cascade_to_offerings() {
        let s = Session::new()
            .add_course_type("Math")
            .add_offering(Some("Math"), Some("Algebra"))
            .update_course_type(0, "Mathematics");
        assert_eq!(s.offerings().as_slice(), &["Math - Algebra"]);
    }

    #[test]
    fn offering_accepts_unregistered_selection() {
        let s = Session::new().add_offering(Some("Ghost"), Some("Course"));
        assert_eq!(s.offerings().as_slice(), &["Ghost - Course"]);
    }

    #[test]
    fn deleting_offering_orphans_registrations() {
        let s = Session::new()
            .add_offering(Some("Math"), Some("Algebra"))
            .register("Math - Algebra", "Alice")
            .delete_offering(0);
        assert!(s.offerings().is_empty());
        assert_eq!(s.registrations().len(), 1);
        assert_eq!(s.students_for("Math - Algebra").count(), 1);
    }

    #[test]
    fn renaming_offering_hides_registrations_from_new_label() {
        let s = Session::new()
            .add_offering(Some("Math"), Some("Algebra"))
            .register("Math - Algebra", "Alice")
            .update_offering(0, "Geometry", "Math");
        assert_eq!(s.students_for("Math - Geometry").count(), 0);
        assert_eq!(s.registrations().len(), 1);
    }

    #[test]
    fn apply_matches_direct_calls() {
        let direct = Session::new().add_course_type("Math").add_course("Algebra");
        let via_actions = Session::new()
            .apply(&Action::AddCourseType("Math".into()))
            .apply(&Action::AddCourse("Algebra".into()));
        assert_eq!(direct, via_actions);
    }

    #[test]
    fn dispatch_reports_applied_and_ignored() {
        let (s, ev) = Session::new().dispatch(Action::AddCourseType("Math".into()));
        assert!(ev.is_applied());
        let (s2, ev) = s.dispatch(Action::AddCourseType("Math".into()));
        assert!(!ev.is_applied());
        assert_eq!(s, s2);
        assert_eq!(ev.action(), &Action::AddCourseType("Math".into()));
    }

    #[test]
    fn update_to_same_value_is_reported_ignored() {
        let s = Session::new().add_course_type("Math");
        let (_, ev) = s.dispatch(Action::UpdateCourseType {
            index: 0,
            name: "Math".into(),
        });
        assert!(!ev.is_applied());
    }

    #[test]
    fn seeded_goes_through_add_rules() {
        let s = Session::seeded(["Math", "", "Math", "Science"], ["Algebra"]);
        assert_eq!(s.course_types().as_slice(), &["Math", "Science"]);
        assert_eq!(s.courses().as_slice(), &["Algebra"]);
    }

    #[test]
    fn previous_snapshot_is_untouched() {
        let before = Session::new().add_course_type("Math");
        let _after = before.delete_course_type(0).add_course("Algebra");
        assert_eq!(before.course_types().as_slice(), &["Math"]);
        assert!(before.courses().is_empty());
    }
}
