use crate::{
    validate, FeedbackSink, InputSource, Record, RecordShape, ValidationOutcome,
};
use serde::Deserialize;

/// The event that triggers validation, such as a form's submit event.
pub trait SubmitEvent {
    /// Stop the default action for this event (e.g. navigating away).
    fn prevent_default(&mut self);
}

/// Presents a message to the user, like `window.alert`.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

impl Notifier for Vec<String> {
    fn notify(&mut self, message: &str) {
        self.push(message.to_string())
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, message: &str) {
        (**self).notify(message)
    }
}

/// How a [FormController](FormController) reports outcomes.
///
/// ## Example
/// ```
/// use form_shape::FormConfig;
///
/// let config = FormConfig::from_json(
///     r#"{ "success_message": "Signup info sent.", "failure_message": null }"#,
/// ).unwrap();
///
/// assert_eq!(Some("Signup info sent."), config.success_message.as_deref());
/// assert_eq!(None, config.failure_message);
/// assert_eq!("has-error", config.error_class);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Message shown after a valid submission, if any.
    pub success_message: Option<String>,
    /// Message shown after an invalid submission. `None` leaves the
    /// per-field marks as the only feedback.
    pub failure_message: Option<String>,
    /// Class added to the container of a rejected control.
    pub error_class: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            success_message: None,
            failure_message: Some("Not valid".to_string()),
            error_class: "has-error".to_string(),
        }
    }
}

impl FormConfig {
    /// Parse a configuration from JSON; missing keys take their
    /// [default](FormConfig::default) values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

type SubmitAction = dyn FnMut(&Record);

/// Handles submissions of one form: validates it against a shape and
/// passes valid records on to an action.
pub struct FormController {
    shape: RecordShape,
    config: FormConfig,
    on_valid: Option<Box<SubmitAction>>,
}

impl FormController {
    /// Create a new `FormController` with the default
    /// [FormConfig](FormConfig) and no action.
    pub fn new(shape: RecordShape) -> Self {
        Self {
            shape,
            config: FormConfig::default(),
            on_valid: None,
        }
    }

    /// Factory method to set the configuration.
    pub fn config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    /// Factory method to set the action run with each valid record.
    pub fn on_valid<F: FnMut(&Record) + 'static>(mut self, action: F) -> Self {
        self.on_valid = Some(Box::new(action));
        self
    }

    pub fn shape(&self) -> &RecordShape {
        &self.shape
    }

    pub fn form_config(&self) -> &FormConfig {
        &self.config
    }

    /// Handle one submission. The event's default action is always
    /// prevented first. On success the action runs and the success
    /// message (if any) is shown; on failure the failure message (if
    /// any) is shown.
    pub fn handle_submit<E, I, S, N>(
        &mut self,
        event: &mut E,
        source: &I,
        sink: &mut S,
        notifier: &mut N,
    ) -> ValidationOutcome
    where
        E: SubmitEvent + ?Sized,
        I: InputSource + ?Sized,
        S: FeedbackSink + ?Sized,
        N: Notifier + ?Sized,
    {
        event.prevent_default();

        let outcome = validate(&self.shape, source, sink);

        match &outcome {
            ValidationOutcome::Valid(record) => {
                tracing::info!(shape = self.shape.name(), "form submission accepted");
                if let Some(action) = self.on_valid.as_mut() {
                    action(record);
                }
                if let Some(message) = &self.config.success_message {
                    notifier.notify(message);
                }
            }
            ValidationOutcome::Invalid(errors) => {
                tracing::info!(
                    shape = self.shape.name(),
                    rejected = ?errors.fields(),
                    "form submission rejected"
                );
                if let Some(message) = &self.config.failure_message {
                    notifier.notify(message);
                }
            }
        }

        outcome
    }
}

impl std::fmt::Debug for FormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormController")
            .field("shape", &self.shape)
            .field("config", &self.config)
            .field("on_valid", &self.on_valid.as_ref().map(|_| "FnMut(&Record)"))
            .finish()
    }
}
