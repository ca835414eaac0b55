use crate::models::{FileEntryView, StagedFile};
use crate::services::selection::{AdmissionReport, FileSelectionManager};
use crate::utils::format::format_size;
use serde::Serialize;

pub const IDLE_PROMPT: &str = "Drag your resume file to this area, or click on the area to select the appropriate file to upload";
pub const AREA_ARIA_LABEL: &str = "Click or drag files here to upload your resume";
pub const REMOVE_ARIA_LABEL: &str = "Remove file";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Tab,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "Tab" => Key::Tab,
            _ => Key::Other,
        }
    }
}

/// User interactions on the upload widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadEvent {
    Click,
    KeyDown(Key),
    DragOver,
    DragLeave,
    Drop(Vec<StagedFile>),
    PickerChanged(Vec<StagedFile>),
    TouchStart,
    TouchEnd,
    RemoveClicked(usize),
    ClearAll,
    Back,
    Finish,
}

/// What the renderer has to do after an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open the platform file picker
    OpenPicker,
    /// Reset the picker's value so the same file can be picked again
    ResetPicker,
    /// State changed, call [`UploadArea::view`] and redraw
    Rerender,
    NavigateBack,
    Submit(Vec<StagedFile>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessibilityAttrs {
    pub role: &'static str,
    pub tabindex: i32,
    pub aria_label: &'static str,
    pub remove_aria_label: &'static str,
}

/// Everything needed to draw the widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetView {
    pub prompt: String,
    pub prompt_active: bool,
    pub highlighted: bool,
    pub list_visible: bool,
    pub count_label: String,
    pub entries: Vec<FileEntryView>,
    pub accessibility: AccessibilityAttrs,
}

/// Drag/drop/click intake area over a [`FileSelectionManager`]
pub struct UploadArea {
    manager: FileSelectionManager,
    highlighted: bool,
    last_report: Option<AdmissionReport>,
}

impl UploadArea {
    pub fn new(manager: FileSelectionManager) -> Self {
        Self {
            manager,
            highlighted: false,
            last_report: None,
        }
    }

    pub fn manager(&self) -> &FileSelectionManager {
        &self.manager
    }

    /// Per-file outcome of the most recent drop or picker batch
    pub fn last_report(&self) -> Option<&AdmissionReport> {
        self.last_report.as_ref()
    }

    pub fn handle(&mut self, event: UploadEvent) -> Vec<Effect> {
        match event {
            UploadEvent::Click => vec![Effect::OpenPicker],
            UploadEvent::KeyDown(Key::Enter | Key::Space) => vec![Effect::OpenPicker],
            UploadEvent::KeyDown(_) => Vec::new(),
            UploadEvent::DragOver | UploadEvent::TouchStart => self.set_highlight(true),
            UploadEvent::DragLeave => self.set_highlight(false),
            UploadEvent::TouchEnd => {
                let mut effects = self.set_highlight(false);
                effects.push(Effect::OpenPicker);
                effects
            }
            UploadEvent::Drop(files) => {
                let mut effects = self.set_highlight(false);
                for effect in self.stage(files) {
                    if !effects.contains(&effect) {
                        effects.push(effect);
                    }
                }
                effects
            }
            UploadEvent::PickerChanged(files) => self.stage(files),
            UploadEvent::RemoveClicked(index) => match self.manager.remove_at(index) {
                Ok(_) => vec![Effect::Rerender],
                Err(e) => {
                    tracing::warn!("Ignoring stale remove click: {}", e);
                    Vec::new()
                }
            },
            UploadEvent::ClearAll => {
                self.manager.clear();
                vec![Effect::ResetPicker, Effect::Rerender]
            }
            UploadEvent::Back => {
                tracing::info!("Returning to previous step");
                vec![Effect::NavigateBack]
            }
            UploadEvent::Finish => {
                tracing::info!("Finishing upload step with {} file(s)", self.manager.len());
                vec![Effect::Submit(self.manager.files().to_vec())]
            }
        }
    }

    pub fn view(&self) -> WidgetView {
        let count = self.manager.len();

        let (prompt, prompt_active) = if count == 0 {
            (IDLE_PROMPT.to_string(), false)
        } else {
            (
                format!("{}, click or drag to add more files", count_label(count)),
                true,
            )
        };

        let entries = self
            .manager
            .files()
            .iter()
            .enumerate()
            .map(|(index, file)| FileEntryView {
                index,
                name: file.name.clone(),
                size_label: format_size(file.size),
            })
            .collect();

        WidgetView {
            prompt,
            prompt_active,
            highlighted: self.highlighted,
            list_visible: count > 0,
            count_label: count_label(count),
            entries,
            accessibility: AccessibilityAttrs {
                role: "button",
                tabindex: 0,
                aria_label: AREA_ARIA_LABEL,
                remove_aria_label: REMOVE_ARIA_LABEL,
            },
        }
    }

    fn stage(&mut self, files: Vec<StagedFile>) -> Vec<Effect> {
        if files.is_empty() {
            return Vec::new();
        }

        let report = self.manager.add_with_report(files);
        let changed = report.changed();
        self.last_report = Some(report);

        if changed {
            vec![Effect::Rerender]
        } else {
            Vec::new()
        }
    }

    fn set_highlight(&mut self, on: bool) -> Vec<Effect> {
        if self.highlighted == on {
            return Vec::new();
        }
        self.highlighted = on;
        vec![Effect::Rerender]
    }
}

pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 file selected".to_string()
    } else {
        format!("{} files selected", count)
    }
}
