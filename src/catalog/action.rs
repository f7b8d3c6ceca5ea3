//! Actions — every catalog mutation a user can dispatch.

use std::fmt;

/// One user-dispatchable catalog mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddCourseType(String),
    UpdateCourseType { index: usize, name: String },
    DeleteCourseType(usize),
    AddCourse(String),
    UpdateCourse { index: usize, name: String },
    DeleteCourse(usize),
    /// Selections come from the form, not the registries; either may be unset.
    AddOffering {
        course_type: Option<String>,
        course: Option<String>,
    },
    UpdateOffering {
        index: usize,
        course: String,
        course_type: String,
    },
    DeleteOffering(usize),
    Register {
        offering: String,
        student_name: String,
    },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::AddCourseType(name) => write!(f, "add course type {name:?}"),
            Action::UpdateCourseType { index, name } => {
                write!(f, "update course type #{index} to {name:?}")
            }
            Action::DeleteCourseType(index) => write!(f, "delete course type #{index}"),
            Action::AddCourse(name) => write!(f, "add course {name:?}"),
            Action::UpdateCourse { index, name } => write!(f, "update course #{index} to {name:?}"),
            Action::DeleteCourse(index) => write!(f, "delete course #{index}"),
            Action::AddOffering {
                course_type,
                course,
            } => write!(
                f,
                "add offering {:?} / {:?}",
                course_type.as_deref().unwrap_or(""),
                course.as_deref().unwrap_or("")
            ),
            Action::UpdateOffering {
                index,
                course,
                course_type,
            } => write!(f, "update offering #{index} to {course_type:?} / {course:?}"),
            Action::DeleteOffering(index) => write!(f, "delete offering #{index}"),
            Action::Register {
                offering,
                student_name,
            } => write!(f, "register {student_name:?} to {offering:?}"),
        }
    }
}
