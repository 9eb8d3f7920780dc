use crate::component::form::{Field, Phase, RegistrationForm};
use crate::config::AppConfig;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(Field),
    Submit,
}

impl FocusTarget {
    const ORDER: [FocusTarget; 5] = [
        FocusTarget::Field(Field::Username),
        FocusTarget::Field(Field::Email),
        FocusTarget::Field(Field::Password),
        FocusTarget::Field(Field::PasswordRepeat),
        FocusTarget::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub form: RegistrationForm,
    pub focus: FocusTarget,
    pub should_quit: bool,
    pub dirty: bool,
    pub tick_count: u64,
    pub status_message: Option<String>,
    pub last_submitted: Option<DateTime<Local>>,
}

impl AppState {
    /// Build the form from config and attach it.
    pub fn new(config: AppConfig) -> Result<Self> {
        let mut form =
            RegistrationForm::new(config.form.options()).context("Failed to create form")?;
        form.attach().context("Failed to attach form")?;
        Ok(Self {
            config,
            form,
            focus: FocusTarget::Field(Field::Username),
            should_quit: false,
            dirty: true,
            tick_count: 0,
            status_message: None,
            last_submitted: None,
        })
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
        self.dirty = true;
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = self.focus.prev();
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        let mut s = match self.form.phase() {
            Phase::Idle => "Ready".to_string(),
            Phase::Submitting => "Submitting...".to_string(),
        };
        if let Some(at) = self.last_submitted {
            s.push_str(&format!(
                " | Last submitted {}",
                at.format(&self.config.ui.timestamp_format)
            ));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_through_fields_then_button() {
        let mut focus = FocusTarget::Field(Field::Username);
        let mut seen = Vec::new();
        for _ in 0..5 {
            focus = focus.next();
            seen.push(focus);
        }
        assert_eq!(
            seen,
            vec![
                FocusTarget::Field(Field::Email),
                FocusTarget::Field(Field::Password),
                FocusTarget::Field(Field::PasswordRepeat),
                FocusTarget::Submit,
                FocusTarget::Field(Field::Username),
            ]
        );
        assert_eq!(FocusTarget::Field(Field::Username).prev(), FocusTarget::Submit);
    }

    #[test]
    fn test_new_state_has_attached_form() {
        let state = AppState::new(AppConfig::default()).unwrap();
        assert!(state.form.is_attached());
        assert_eq!(state.status_line(), "Ready");
    }
}
