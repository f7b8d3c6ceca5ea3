//! Dashboard utilities — status bar formatting.

use crate::catalog::Session;

use super::app::Section;

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Collection sizes for the status bar.
pub fn format_counts(session: &Session) -> String {
    [
        plural(session.course_types().len(), "type", "types"),
        plural(session.courses().len(), "course", "courses"),
        plural(session.offerings().len(), "offering", "offerings"),
        plural(session.registrations().len(), "registration", "registrations"),
    ]
    .join(" · ")
}

/// Wall-clock `HH:MM:SS` (UTC) for a Unix timestamp.
pub fn format_clock(secs: u64) -> String {
    let day = secs % 86_400;
    format!("{:02}:{:02}:{:02}", day / 3600, (day % 3600) / 60, day % 60)
}

/// Key hints for the current section.
pub fn key_hints(section: Section, editing: bool) -> &'static str {
    if editing {
        return "type:edit row  Enter/Esc:done";
    }
    match section {
        Section::CourseTypes | Section::Courses => {
            "Enter:add  ^E:edit  Del:delete  ↑↓:select  F1-F4:sections  ^C:quit"
        }
        Section::Offerings => {
            "Tab:selector  ←→:choose  Enter:add  ^E:rewrite  Del:delete  F1-F4:sections"
        }
        Section::Registrations => "↑↓:offering  Enter:register  F1-F4:sections  ^C:quit",
        Section::Activity => "F1-F4:sections  ^C:quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_empty() {
        assert_eq!(
            format_counts(&Session::new()),
            "0 types · 0 courses · 0 offerings · 0 registrations"
        );
    }

    #[test]
    fn counts_singular() {
        let s = Session::new()
            .add_course_type("Math")
            .add_course("Algebra")
            .add_offering(Some("Math"), Some("Algebra"))
            .register("Math - Algebra", "Alice");
        assert_eq!(
            format_counts(&s),
            "1 type · 1 course · 1 offering · 1 registration"
        );
    }

    #[test]
    fn clock_wraps_days() {
        assert_eq!(format_clock(0), "00:00:00");
        assert_eq!(format_clock(3_661), "01:01:01");
        assert_eq!(format_clock(86_400 + 59), "00:00:59");
    }

    #[test]
    fn editing_hint_wins() {
        assert!(key_hints(Section::Offerings, true).contains("done"));
    }
}
