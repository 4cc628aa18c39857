//! Application state for the TUI
//!
//! The App struct holds the worksheet being edited and the metrics derived
//! from it. Every edit writes straight into the worksheet and recomputes the
//! metrics, so a draw never shows stale figures.

use std::path::{Path, PathBuf};

use crate::config::paths::RoiPaths;
use crate::config::settings::Settings;
use crate::error::RoiResult;
use crate::export::{send_to_printer, write_document};
use crate::models::{DerivedMetrics, InputField, PlanKind, Worksheet};
use crate::reports::RoiReport;

use super::widgets::{Notification, TextInput};

/// File the print shortcut writes before handing it to the print command
const PRINT_FILE_NAME: &str = "roi-print.txt";

/// A focusable field on the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    CompanyName,
    Representative,
    Date,
    Input(InputField),
    Plan,
    Notes,
}

impl FormField {
    /// Fields shown under the given plan, in focus order
    pub fn visible(plan: PlanKind) -> Vec<FormField> {
        let mut fields = vec![
            FormField::CompanyName,
            FormField::Representative,
            FormField::Date,
        ];
        fields.extend(InputField::CURRENT.iter().map(|f| FormField::Input(*f)));
        fields.push(FormField::Plan);
        fields.extend(
            InputField::PLAN
                .iter()
                .filter(|f| f.applies_to(plan))
                .map(|f| FormField::Input(*f)),
        );
        fields.push(FormField::Notes);
        fields
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CompanyName => "Company",
            Self::Representative => "Representative",
            Self::Date => "Date",
            Self::Input(field) => field.label(),
            Self::Plan => "Plan",
            Self::Notes => "Notes",
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    Export,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Paths configuration
    pub paths: &'a RoiPaths,

    /// The form being edited
    pub worksheet: Worksheet,

    /// Metrics for the current worksheet
    pub metrics: DerivedMetrics,

    /// Field with keyboard focus
    pub focused: FormField,

    /// Editor for the focused text field
    pub editor: TextInput,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Path input of the export dialog
    pub export_path: TextInput,

    /// Status bar notice
    pub notification: Option<Notification>,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create a new App with a blank worksheet
    pub fn new(settings: &'a Settings, paths: &'a RoiPaths) -> Self {
        Self::with_worksheet(settings, paths, Worksheet::default())
    }

    /// Create a new App editing an existing worksheet
    pub fn with_worksheet(settings: &'a Settings, paths: &'a RoiPaths, worksheet: Worksheet) -> Self {
        let metrics = worksheet.metrics();
        let mut app = Self {
            settings,
            paths,
            worksheet,
            metrics,
            focused: FormField::CompanyName,
            editor: TextInput::new(),
            active_dialog: ActiveDialog::None,
            export_path: TextInput::new(),
            notification: None,
            should_quit: false,
        };
        app.focus(FormField::CompanyName);
        app
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Selected plan
    pub fn plan(&self) -> PlanKind {
        self.worksheet.inputs.plan
    }

    /// Text stored for a field; the plan selector has none
    pub fn field_text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::CompanyName => Some(&self.worksheet.company_name),
            FormField::Representative => Some(&self.worksheet.representative),
            FormField::Date => Some(&self.worksheet.date),
            FormField::Input(input) => Some(self.worksheet.inputs.get(input)),
            FormField::Plan => None,
            FormField::Notes => Some(&self.worksheet.notes),
        }
    }

    fn field_slot(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::CompanyName => Some(&mut self.worksheet.company_name),
            FormField::Representative => Some(&mut self.worksheet.representative),
            FormField::Date => Some(&mut self.worksheet.date),
            FormField::Input(input) => Some(self.worksheet.inputs.get_mut(input)),
            FormField::Plan => None,
            FormField::Notes => Some(&mut self.worksheet.notes),
        }
    }

    /// Move focus to a field and load its text into the editor
    pub fn focus(&mut self, field: FormField) {
        self.focused = field;
        let text = self.field_text(field).unwrap_or_default().to_string();
        self.editor.set_content(text);
    }

    /// Focus the next visible field, wrapping around
    pub fn focus_next(&mut self) {
        let fields = FormField::visible(self.plan());
        let index = self.focus_index(&fields);
        self.focus(fields[(index + 1) % fields.len()]);
    }

    /// Focus the previous visible field, wrapping around
    pub fn focus_prev(&mut self) {
        let fields = FormField::visible(self.plan());
        let index = self.focus_index(&fields);
        self.focus(fields[(index + fields.len() - 1) % fields.len()]);
    }

    fn focus_index(&self, fields: &[FormField]) -> usize {
        fields.iter().position(|f| *f == self.focused).unwrap_or(0)
    }

    /// Apply an edit to the focused field and recompute
    pub fn edit(&mut self, apply: impl FnOnce(&mut TextInput)) {
        let field = self.focused;
        if field == FormField::Plan {
            return;
        }

        apply(&mut self.editor);
        let text = self.editor.value().to_string();
        if let Some(slot) = self.field_slot(field) {
            *slot = text;
        }
        self.recompute();
    }

    /// Switch between DFY and DWY
    pub fn toggle_plan(&mut self) {
        self.set_plan(self.plan().toggled());
    }

    /// Select a plan; fields of the other plan leave the focus order
    pub fn set_plan(&mut self, plan: PlanKind) {
        self.worksheet.inputs.plan = plan;
        self.recompute();
        tracing::debug!(%plan, "plan selected");

        if !FormField::visible(plan).contains(&self.focused) {
            self.focus(FormField::Plan);
        }
    }

    /// Recompute the metrics from the worksheet
    pub fn recompute(&mut self) {
        self.metrics = self.worksheet.metrics();
    }

    /// Report for the current worksheet
    pub fn report(&self) -> RoiReport {
        RoiReport::new(&self.worksheet, self.settings)
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if dialog == ActiveDialog::Export {
            self.export_path
                .set_content(default_export_path(&self.worksheet).display().to_string());
        }
        self.active_dialog = dialog;
    }

    /// Close the active dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Write the document to the path in the export dialog
    pub fn export_document(&mut self) {
        let path = PathBuf::from(self.export_path.value().trim());
        if path.as_os_str().is_empty() {
            self.notify(Notification::error("Enter a file path to export to"));
            return;
        }

        match write_document(&self.report(), &path) {
            Ok(path) => {
                tracing::info!(path = %path.display(), "exported document");
                self.notify(Notification::success(format!(
                    "Exported to {}",
                    path.display()
                )));
                self.close_dialog();
            }
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                self.notify(Notification::error(e.to_string()));
            }
        }
    }

    /// Write the document and hand it to the print command
    pub fn print_document(&mut self) {
        match self.write_print_file() {
            Ok(path) => {
                tracing::info!(path = %path.display(), command = %self.settings.print_command, "sent to printer");
                self.notify(Notification::success(format!(
                    "Sent to printer via '{}'",
                    self.settings.print_command
                )));
            }
            Err(e) => {
                tracing::error!(error = %e, "print failed");
                self.notify(Notification::error(e.to_string()));
            }
        }
    }

    fn write_print_file(&self) -> RoiResult<PathBuf> {
        let path = write_document(&self.report(), &self.paths.base_dir().join(PRINT_FILE_NAME))?;
        send_to_printer(&path, &self.settings.print_command)?;
        Ok(path)
    }

    /// Show a notice in the status bar
    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// Drop the notice once it has expired
    pub fn clear_expired_notification(&mut self) {
        if self.notification.as_ref().is_some_and(|n| n.is_expired()) {
            self.notification = None;
        }
    }
}

/// `roi-<company>.txt` in the working directory, or `roi-report.txt`
pub fn default_export_path(worksheet: &Worksheet) -> PathBuf {
    let slug: String = worksheet
        .company_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let slug = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    let name = if slug.is_empty() {
        "roi-report.txt".to_string()
    } else {
        format!("roi-{}.txt", slug)
    };
    Path::new(".").join(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::NotificationType;
    use tempfile::TempDir;

    fn setup() -> (TempDir, RoiPaths, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = RoiPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, paths, Settings::default())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.edit(|e| e.insert(c));
        }
    }

    #[test]
    fn test_visible_fields_follow_plan() {
        let dfy = FormField::visible(PlanKind::Dfy);
        assert!(dfy.contains(&FormField::Input(InputField::DfyMonthly)));
        assert!(!dfy.contains(&FormField::Input(InputField::DwyOneTime)));
        assert!(!dfy.contains(&FormField::Input(InputField::DwyAmortizationMonths)));

        let dwy = FormField::visible(PlanKind::Dwy);
        assert!(!dwy.contains(&FormField::Input(InputField::DfyMonthly)));
        assert!(dwy.contains(&FormField::Input(InputField::DwyOneTime)));
        assert!(dwy.contains(&FormField::Input(InputField::DwyAmortizationMonths)));
        assert_eq!(dwy.len(), dfy.len() + 1);
    }

    #[test]
    fn test_focus_cycle_wraps() {
        let (_dir, paths, settings) = setup();
        let mut app = App::new(&settings, &paths);
        let count = FormField::visible(PlanKind::Dfy).len();

        assert_eq!(app.focused, FormField::CompanyName);
        app.focus_prev();
        assert_eq!(app.focused, FormField::Notes);
        for _ in 0..count {
            app.focus_next();
        }
        assert_eq!(app.focused, FormField::Notes);
    }

    #[test]
    fn test_focus_skips_hidden_plan_fields() {
        let (_dir, paths, settings) = setup();
        let mut app = App::new(&settings, &paths);
        app.focus(FormField::Plan);
        app.focus_next();
        assert_eq!(app.focused, FormField::Input(InputField::DfyMonthly));

        app.focus(FormField::Plan);
        app.toggle_plan();
        app.focus_next();
        assert_eq!(app.focused, FormField::Input(InputField::DwyOneTime));
    }

    #[test]
    fn test_edit_recomputes_metrics() {
        let (_dir, paths, settings) = setup();
        let mut app = App::new(&settings, &paths);

        app.focus(FormField::Input(InputField::EmptyTrucks));
        type_text(&mut app, "3");
        app.focus(FormField::Input(InputField::ProfitPerTruckPerMonth));
        type_text(&mut app, "$4,000");
        assert_eq!(app.metrics.lost_revenue_monthly, 12000.0);

        app.edit(|e| e.backspace());
        assert_eq!(app.worksheet.inputs.profit_per_truck_per_month, "$4,00");
        assert_eq!(app.metrics.lost_revenue_monthly, 1200.0);
    }

    #[test]
    fn test_plan_toggle_recomputes_and_moves_focus() {
        let (_dir, paths, settings) = setup();
        let mut app = App::new(&settings, &paths);

        app.focus(FormField::Input(InputField::DfyMonthly));
        type_text(&mut app, "1000");
        assert_eq!(app.metrics.monthly_plan_fee, 1000.0);

        app.toggle_plan();
        assert_eq!(app.plan(), PlanKind::Dwy);
        assert_eq!(app.focused, FormField::Plan);
        assert_eq!(app.metrics.monthly_plan_fee, 0.0);

        app.toggle_plan();
        assert_eq!(app.metrics.monthly_plan_fee, 1000.0);
    }

    #[test]
    fn test_plan_field_ignores_text_edits() {
        let (_dir, paths, settings) = setup();
        let mut app = App::new(&settings, &paths);
        app.focus(FormField::Plan);
        let before = app.worksheet.clone();
        app.edit(|e| e.insert('x'));
        assert_eq!(app.worksheet, before);
    }

    #[test]
    fn test_focus_loads_field_text() {
        let (_dir, paths, settings) = setup();
        let mut app = App::new(&settings, &paths);
        app.focus(FormField::Input(InputField::DwyAmortizationMonths));
        assert_eq!(app.editor.value(), "12");
        assert_eq!(app.editor.cursor, 2);
    }

    #[test]
    fn test_export_document_writes_file() {
        let (dir, paths, settings) = setup();
        let mut app = App::new(&settings, &paths);
        let target = dir.path().join("out").join("report.txt");

        app.open_dialog(ActiveDialog::Export);
        app.export_path.set_content(target.display().to_string());
        app.export_document();

        assert!(target.exists());
        assert!(!app.has_dialog());
        assert_eq!(
            app.notification.as_ref().map(|n| n.notification_type),
            Some(NotificationType::Success)
        );
    }

    #[test]
    fn test_export_document_requires_path() {
        let (_dir, paths, settings) = setup();
        let mut app = App::new(&settings, &paths);
        app.open_dialog(ActiveDialog::Export);
        app.export_path.clear();
        app.export_document();
        assert_eq!(app.active_dialog, ActiveDialog::Export);
        assert!(app.notification.is_some());
    }

    #[test]
    fn test_default_export_path() {
        let mut worksheet = Worksheet::default();
        assert_eq!(
            default_export_path(&worksheet),
            Path::new(".").join("roi-report.txt")
        );
        worksheet.company_name = "  Acme Trucking, LLC ".into();
        assert_eq!(
            default_export_path(&worksheet),
            Path::new(".").join("roi-acme-trucking-llc.txt")
        );
    }
}
