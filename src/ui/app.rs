use crate::billing::{
    BillingModel, ComparisonResult, CostBreakdown, DefaultValues, PricingEngine, RawUsage,
    UsageInput,
};
use crate::config::ExportConfig;
use crate::export::ExportPipeline;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Longest text accepted in a numeric field
const MAX_FIELD_LEN: usize = 12;

/// Editable rows of the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Model,
    Agents,
    Hours,
    Inbound,
    Outbound,
    Sms,
    Whatsapp,
    Email,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Model => "Billing model",
            Field::Agents => "Agents",
            Field::Hours => "Hours per agent",
            Field::Inbound => "Inbound voice minutes",
            Field::Outbound => "Outbound voice minutes",
            Field::Sms => "SMS messages",
            Field::Whatsapp => "WhatsApp messages",
            Field::Email => "Email packages",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

/// State of the interactive calculator
pub struct CalculatorApp {
    engine: PricingEngine,
    defaults: DefaultValues,
    export: ExportConfig,
    pub model: BillingModel,
    pub form: RawUsage,
    pub selected: usize,
    pub comparison: Option<ComparisonResult>,
    pub summary_popup: Option<String>,
    pub status: Option<Notification>,
    pub should_quit: bool,
}

impl CalculatorApp {
    pub fn new(engine: PricingEngine, defaults: DefaultValues, export: ExportConfig) -> Self {
        Self {
            engine,
            defaults,
            export,
            model: BillingModel::default(),
            form: RawUsage::from_defaults(&defaults),
            selected: 0,
            comparison: None,
            summary_popup: None,
            status: None,
            should_quit: false,
        }
    }

    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }

    /// Rows shown for the current model; hours only apply to hourly billing
    pub fn visible_fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::Model, Field::Agents];
        if self.model.uses_hours() {
            fields.push(Field::Hours);
        }
        fields.extend([
            Field::Inbound,
            Field::Outbound,
            Field::Sms,
            Field::Whatsapp,
            Field::Email,
        ]);
        fields
    }

    pub fn selected_field(&self) -> Field {
        let fields = self.visible_fields();
        fields[self.selected.min(fields.len() - 1)]
    }

    /// Current usage, re-normalized from the form text
    pub fn usage(&self) -> UsageInput {
        self.form.normalize()
    }

    pub fn costs(&self) -> CostBreakdown {
        self.engine.compute_costs(self.model, &self.usage())
    }

    /// Raw text of a numeric field
    pub fn field_text(&self, field: Field) -> &str {
        let value = match field {
            Field::Model => return self.model.display_name(),
            Field::Agents => &self.form.agents,
            Field::Hours => &self.form.hours,
            Field::Inbound => &self.form.inbound_minutes,
            Field::Outbound => &self.form.outbound_minutes,
            Field::Sms => &self.form.sms_count,
            Field::Whatsapp => &self.form.whatsapp_count,
            Field::Email => &self.form.email_packages,
        };
        value.as_deref().unwrap_or("")
    }

    fn field_text_mut(&mut self, field: Field) -> Option<&mut String> {
        let value = match field {
            Field::Model => return None,
            Field::Agents => &mut self.form.agents,
            Field::Hours => &mut self.form.hours,
            Field::Inbound => &mut self.form.inbound_minutes,
            Field::Outbound => &mut self.form.outbound_minutes,
            Field::Sms => &mut self.form.sms_count,
            Field::Whatsapp => &mut self.form.whatsapp_count,
            Field::Email => &mut self.form.email_packages,
        };
        Some(value.get_or_insert_with(String::new))
    }

    pub fn move_selection(&mut self, delta: i32) {
        let len = self.visible_fields().len() as i32;
        self.selected = (self.selected as i32 + delta).clamp(0, len - 1) as usize;
    }

    pub fn toggle_model(&mut self) {
        let field = self.selected_field();
        self.model = self.model.toggled();

        // Keep the cursor on the same row when the hours row appears or disappears
        if let Some(index) = self.visible_fields().iter().position(|f| *f == field) {
            self.selected = index;
        } else {
            self.selected = self.selected.min(self.visible_fields().len() - 1);
        }
    }

    pub fn reset(&mut self) {
        self.form = RawUsage::from_defaults(&self.defaults);
        self.model = BillingModel::Hourly;
        self.selected = 0;
        self.notify("Values reset to defaults", NotificationKind::Success);
    }

    pub fn open_comparison(&mut self) {
        self.comparison = Some(self.engine.compare_models(&self.usage()));
    }

    pub fn export_summary(&mut self) {
        let now = Local::now();
        let summary = self
            .engine
            .format_summary_at(self.model, &self.usage(), now.naive_local());

        match ExportPipeline::without_display(&self.export).run(&summary, now.date_naive()) {
            Ok(report) => {
                self.notify(&report.outcome.to_string(), NotificationKind::Success);
            }
            Err(e) => {
                crate::debug_println!("{}", e);
                self.summary_popup = Some(summary);
                self.notify("Summary shown in popup", NotificationKind::Info);
            }
        }
    }

    fn notify(&mut self, message: &str, kind: NotificationKind) {
        self.status = Some(Notification {
            message: message.to_string(),
            kind,
        });
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // Popups swallow input until closed
        if self.comparison.is_some() || self.summary_popup.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.comparison = None;
                self.summary_popup = None;
            }
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::BackTab => self.move_selection(-1),
            KeyCode::Down | KeyCode::Tab | KeyCode::Enter => self.move_selection(1),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('c') => self.open_comparison(),
            KeyCode::Char('e') => self.export_summary(),
            KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
                if self.selected_field() == Field::Model =>
            {
                self.toggle_model()
            }
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                let field = self.selected_field();
                if let Some(text) = self.field_text_mut(field) {
                    if text.len() < MAX_FIELD_LEN {
                        text.push(ch);
                    }
                }
            }
            KeyCode::Backspace => {
                let field = self.selected_field();
                if let Some(text) = self.field_text_mut(field) {
                    text.pop();
                }
            }
            KeyCode::Delete => {
                let field = self.selected_field();
                if let Some(text) = self.field_text_mut(field) {
                    text.clear();
                }
            }
            _ => {}
        }
    }
}
