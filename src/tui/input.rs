//! Key binding dispatch for the TUI.
//!
//! Plain characters always type into the active text field, so section
//! commands live on Enter, Delete, arrows and Ctrl chords.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::catalog::Action;

use super::app::{Section, SelectorFocus, TuiApp};

/// Handle a key event, mutating app state.
pub fn handle_key(app: &mut TuiApp, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global bindings
    match key.code {
        KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            return;
        }
        KeyCode::Esc => {
            if app.is_editing() {
                end_edit(app);
            } else {
                app.should_quit = true;
            }
            return;
        }
        KeyCode::F(n) => {
            if let Some(section) = section_for(n) {
                app.switch_section(section);
            }
            return;
        }
        KeyCode::Char(c @ '1'..='5') if ctrl => {
            if let Some(section) = c.to_digit(10).and_then(|n| section_for(n as u8)) {
                app.switch_section(section);
            }
            return;
        }
        _ => {}
    }

    match app.section {
        Section::CourseTypes | Section::Courses => handle_label_key(app, key),
        Section::Offerings => handle_offering_key(app, key),
        Section::Registrations => handle_registration_key(app, key),
        Section::Activity => {}
    }
}

fn section_for(n: u8) -> Option<Section> {
    match n {
        1 => Some(Section::CourseTypes),
        2 => Some(Section::Courses),
        3 => Some(Section::Offerings),
        4 => Some(Section::Registrations),
        5 => Some(Section::Activity),
        _ => None,
    }
}

/// A key that should land in a text field.
fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

fn is_delete(key: &KeyEvent) -> bool {
    key.code == KeyCode::Delete
        || (key.code == KeyCode::Char('d') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn is_edit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('e') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn end_edit(app: &mut TuiApp) {
    if let Some((_, pane)) = app.label_pane_mut() {
        pane.editing = None;
        pane.edit_buffer.clear();
    }
}

/// Course Types / Courses.
fn handle_label_key(app: &mut TuiApp, key: KeyEvent) {
    let Some((kind, pane)) = app.label_pane_mut() else {
        return;
    };

    // In-place edit: every keystroke writes the row, like a bound text field.
    if let Some(row) = pane.editing {
        let action = if key.code == KeyCode::Enter {
            pane.editing = None;
            pane.edit_buffer.clear();
            None
        } else if key.code == KeyCode::Backspace {
            pane.edit_buffer.pop();
            Some(kind.update(row, pane.edit_buffer.clone()))
        } else if let Some(c) = typed_char(&key) {
            pane.edit_buffer.push(c);
            Some(kind.update(row, pane.edit_buffer.clone()))
        } else {
            None
        };
        if let Some(action) = action {
            app.dispatch(action);
        }
        return;
    }

    if key.code == KeyCode::Enter {
        let action = kind.add(pane.input.clone());
        if app.dispatch(action) {
            if let Some((_, pane)) = app.label_pane_mut() {
                pane.input.clear();
            }
        }
        return;
    }

    if is_delete(&key) {
        let selected = pane.selected;
        if selected < app.labels_for(kind).len() {
            app.dispatch(kind.delete(selected));
        }
        return;
    }

    if is_edit(&key) {
        let selected = pane.selected;
        if let Some(label) = app.labels_for(kind).get(selected).cloned() {
            if let Some((_, pane)) = app.label_pane_mut() {
                pane.editing = Some(selected);
                pane.edit_buffer = label;
            }
        }
        return;
    }

    match key.code {
        KeyCode::Up => app.move_up(),
        KeyCode::Down => app.move_down(),
        KeyCode::Backspace => {
            pane.input.pop();
        }
        _ => {
            if let Some(c) = typed_char(&key) {
                pane.input.push(c);
            }
        }
    }
}

/// Course Offerings.
fn handle_offering_key(app: &mut TuiApp, key: KeyEvent) {
    let highlighted = app
        .visible_offerings()
        .get(app.offerings.selected)
        .map(|&(index, _)| index);

    if is_delete(&key) {
        if let Some(index) = highlighted {
            app.dispatch(Action::DeleteOffering(index));
        }
        return;
    }

    if is_edit(&key) {
        if let Some(index) = highlighted {
            let course = app.offerings.course.value.clone().unwrap_or_default();
            let course_type = app.offerings.course_type.value.clone().unwrap_or_default();
            app.dispatch(Action::UpdateOffering {
                index,
                course,
                course_type,
            });
        }
        return;
    }

    match key.code {
        KeyCode::Tab => app.offerings.focus = app.offerings.focus.next(),
        KeyCode::Up => app.move_up(),
        KeyCode::Down => app.move_down(),
        KeyCode::Left | KeyCode::Right => {
            let forward = key.code == KeyCode::Right;
            let pane = &mut app.offerings;
            match pane.focus {
                SelectorFocus::CourseType => pane
                    .course_type
                    .cycle(app.session.course_types().as_slice(), forward),
                SelectorFocus::Course => pane
                    .course
                    .cycle(app.session.courses().as_slice(), forward),
                SelectorFocus::Filter => {
                    pane.cycle_filter(app.session.course_types().as_slice(), forward);
                    pane.selected = 0;
                }
            }
        }
        KeyCode::Enter => {
            let course_type = app.offerings.course_type.value.clone();
            let course = app.offerings.course.value.clone();
            app.dispatch(Action::AddOffering {
                course_type,
                course,
            });
        }
        _ => {}
    }
}

/// Student Registration.
fn handle_registration_key(app: &mut TuiApp, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_up(),
        KeyCode::Down => app.move_down(),
        KeyCode::Backspace => {
            app.registrations.student_input.pop();
        }
        KeyCode::Enter => {
            let Some(offering) = app.registration_target().map(str::to_string) else {
                return;
            };
            let student_name = std::mem::take(&mut app.registrations.student_input);
            app.dispatch(Action::Register {
                offering,
                student_name,
            });
        }
        _ => {
            if let Some(c) = typed_char(&key) {
                app.registrations.student_input.push(c);
            }
        }
    }
}
