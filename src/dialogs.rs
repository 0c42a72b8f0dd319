//! Modal dialogs for names, sizes, layout import and messages.
//!
//! A dialog only collects and validates input; the app turns the result into
//! commands.

use egui::{Align2, Color32, Context, Key, TextEdit, Ui, Vec2};

use crate::element::{Furniture, FurnitureId, validate_length};
use crate::error::{LayoutError, LayoutResult};
use crate::state::LayoutSnapshot;

/// Parse a length in meters typed by the user
pub fn parse_dimension(input: &str) -> LayoutResult<f32> {
    let trimmed = input.trim();
    let value: f32 = trimmed
        .parse()
        .map_err(|_| LayoutError::InvalidNumber(trimmed.to_owned()))?;
    validate_length(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePurpose {
    Add,
    Rename(FurnitureId),
}

/// Validated input handed back to the app
#[derive(Debug, Clone, PartialEq)]
pub enum DialogResult {
    AddObject { name: String },
    Rename { id: FurnitureId, name: String },
    Resize { id: FurnitureId, size: Vec2 },
    ImportLayout(LayoutSnapshot),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome {
    /// Keep showing the dialog
    Open,
    /// Dismissed without a result
    Closed,
    Submitted(DialogResult),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActiveDialog {
    Name {
        purpose: NamePurpose,
        input: String,
        focused: bool,
    },
    Resize {
        id: FurnitureId,
        width: String,
        height: String,
        error: Option<String>,
    },
    ImportLayout {
        text: String,
        error: Option<String>,
    },
    Message {
        title: String,
        text: String,
    },
}

impl ActiveDialog {
    pub fn add_object() -> Self {
        Self::Name {
            purpose: NamePurpose::Add,
            input: String::new(),
            focused: false,
        }
    }

    pub fn rename(object: &Furniture) -> Self {
        Self::Name {
            purpose: NamePurpose::Rename(object.id()),
            input: object.name().to_owned(),
            focused: false,
        }
    }

    /// Prefilled with the current size
    pub fn resize(object: &Furniture) -> Self {
        let size = object.size();
        Self::Resize {
            id: object.id(),
            width: size.x.to_string(),
            height: size.y.to_string(),
            error: None,
        }
    }

    pub fn import_layout() -> Self {
        Self::ImportLayout {
            text: String::new(),
            error: None,
        }
    }

    pub fn message(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Message {
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Name {
                purpose: NamePurpose::Add,
                ..
            } => "Enter Object Name",
            Self::Name {
                purpose: NamePurpose::Rename(_),
                ..
            } => "Rename Object",
            Self::Resize { .. } => "Resize Object",
            Self::ImportLayout { .. } => "Import Layout",
            Self::Message { title, .. } => title.as_str(),
        }
    }

    fn submit_label(&self) -> &'static str {
        match self {
            Self::Name { .. } => "Submit",
            Self::Resize { .. } => "Apply",
            Self::ImportLayout { .. } => "Import",
            Self::Message { .. } => "OK",
        }
    }

    /// Validate the current input. Invalid input keeps the dialog open with
    /// an inline error.
    pub fn submit(&mut self) -> DialogOutcome {
        match self {
            Self::Name { purpose, input, .. } => {
                let name = input.clone();
                DialogOutcome::Submitted(match *purpose {
                    NamePurpose::Add => DialogResult::AddObject { name },
                    NamePurpose::Rename(id) => DialogResult::Rename { id, name },
                })
            }
            Self::Resize {
                id,
                width,
                height,
                error,
            } => match (parse_dimension(width), parse_dimension(height)) {
                (Ok(w), Ok(h)) => DialogOutcome::Submitted(DialogResult::Resize {
                    id: *id,
                    size: Vec2::new(w, h),
                }),
                (Err(err), _) | (_, Err(err)) => {
                    log::warn!("Rejected size input: {err}");
                    *error = Some(err.to_string());
                    DialogOutcome::Open
                }
            },
            Self::ImportLayout { text, error } => match LayoutSnapshot::from_json(text) {
                Ok(snapshot) => DialogOutcome::Submitted(DialogResult::ImportLayout(snapshot)),
                Err(err) => {
                    log::warn!("Rejected layout import: {err}");
                    *error = Some(err.to_string());
                    DialogOutcome::Open
                }
            },
            Self::Message { .. } => DialogOutcome::Closed,
        }
    }

    /// Show the dialog centred over the window
    pub fn show(&mut self, ctx: &Context) -> DialogOutcome {
        let mut outcome = DialogOutcome::Open;
        let mut open = true;
        egui::Window::new(self.title().to_owned())
            .id(egui::Id::new("active_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .open(&mut open)
            .show(ctx, |ui| outcome = self.contents(ui));

        if open { outcome } else { DialogOutcome::Closed }
    }

    fn contents(&mut self, ui: &mut Ui) -> DialogOutcome {
        let mut submit = false;

        match self {
            Self::Name { input, focused, .. } => {
                ui.label("Enter the name of the object:");
                let response = ui.add(TextEdit::singleline(input).desired_width(200.0));
                if !*focused {
                    response.request_focus();
                    *focused = true;
                }
                submit |= response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            }
            Self::Resize {
                width,
                height,
                error,
                ..
            } => {
                ui.label("Width (m):");
                ui.add(TextEdit::singleline(width).desired_width(200.0));
                ui.label("Height (m):");
                ui.add(TextEdit::singleline(height).desired_width(200.0));
                if let Some(error) = error {
                    ui.colored_label(Color32::RED, error.as_str());
                }
            }
            Self::ImportLayout { text, error } => {
                ui.label("Paste a layout exported with \"Copy layout JSON\":");
                ui.add(
                    TextEdit::multiline(text)
                        .code_editor()
                        .desired_rows(12)
                        .desired_width(360.0),
                );
                if let Some(error) = error {
                    ui.colored_label(Color32::RED, error.as_str());
                }
            }
            Self::Message { text, .. } => {
                ui.label(text.as_str());
            }
        }

        let is_message = matches!(self, Self::Message { .. });
        let mut cancel = false;
        ui.horizontal(|ui| {
            submit |= ui.button(self.submit_label()).clicked();
            if !is_message {
                cancel = ui.button("Cancel").clicked();
            }
        });

        if cancel {
            DialogOutcome::Closed
        } else if submit {
            self.submit()
        } else {
            DialogOutcome::Open
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn parses_trimmed_positive_numbers() {
        assert_eq!(parse_dimension(" 2.5 ").unwrap(), 2.5);
        assert!(matches!(parse_dimension("abc"), Err(LayoutError::InvalidNumber(_))));
        assert!(matches!(
            parse_dimension("0"),
            Err(LayoutError::NonPositiveDimension(_))
        ));
        assert!(parse_dimension("-1").is_err());
        assert!(parse_dimension("inf").is_err());
        assert!(matches!(
            parse_dimension("1e20"),
            Err(LayoutError::DimensionTooLarge { .. })
        ));
    }

    #[test]
    fn resize_dialog_stays_open_on_bad_input() {
        let desk = Furniture::new("Desk", pos2(0.0, 0.0), vec2(2.0, 1.0), Color32::RED).unwrap();
        let mut dialog = ActiveDialog::resize(&desk);

        if let ActiveDialog::Resize { width, height, .. } = &dialog {
            assert_eq!(width, "2");
            assert_eq!(height, "1");
        }

        if let ActiveDialog::Resize { width, .. } = &mut dialog {
            *width = "wide".to_owned();
        }
        assert_eq!(dialog.submit(), DialogOutcome::Open);
        assert!(matches!(&dialog, ActiveDialog::Resize { error: Some(_), .. }));

        if let ActiveDialog::Resize { width, .. } = &mut dialog {
            *width = "3".to_owned();
        }
        assert_eq!(
            dialog.submit(),
            DialogOutcome::Submitted(DialogResult::Resize {
                id: desk.id(),
                size: vec2(3.0, 1.0)
            })
        );
    }

    #[test]
    fn rename_dialog_is_prefilled() {
        let desk = Furniture::new("Desk", pos2(0.0, 0.0), vec2(2.0, 1.0), Color32::RED).unwrap();
        let mut dialog = ActiveDialog::rename(&desk);
        assert_eq!(dialog.title(), "Rename Object");
        assert_eq!(
            dialog.submit(),
            DialogOutcome::Submitted(DialogResult::Rename {
                id: desk.id(),
                name: "Desk".to_owned()
            })
        );
    }

    #[test]
    fn import_dialog_reports_parse_errors() {
        let mut dialog = ActiveDialog::import_layout();
        assert_eq!(dialog.submit(), DialogOutcome::Open);
        assert!(matches!(&dialog, ActiveDialog::ImportLayout { error: Some(_), .. }));
    }

    #[test]
    fn message_closes_on_ok() {
        let mut dialog = ActiveDialog::message("Success", "Room size updated");
        assert_eq!(dialog.title(), "Success");
        assert_eq!(dialog.submit(), DialogOutcome::Closed);
    }
}
