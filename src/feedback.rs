/// Receives the per-field result of a validation run, typically to
/// toggle an error style on the control's container.
pub trait FeedbackSink {
    /// `field` was rejected.
    fn mark_invalid(&mut self, field: &str);
    /// `field` was accepted, clear any previous mark.
    fn clear_invalid(&mut self, field: &str);
}

/// A single feedback emission, as recorded by a `Vec<Feedback>` sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    MarkInvalid(String),
    ClearInvalid(String),
}

impl Feedback {
    /// The field this feedback is for.
    pub fn field(&self) -> &str {
        match self {
            Feedback::MarkInvalid(field) | Feedback::ClearInvalid(field) => field,
        }
    }
}

impl FeedbackSink for Vec<Feedback> {
    fn mark_invalid(&mut self, field: &str) {
        self.push(Feedback::MarkInvalid(field.to_string()))
    }

    fn clear_invalid(&mut self, field: &str) {
        self.push(Feedback::ClearInvalid(field.to_string()))
    }
}

impl<S: FeedbackSink + ?Sized> FeedbackSink for &mut S {
    fn mark_invalid(&mut self, field: &str) {
        (**self).mark_invalid(field)
    }

    fn clear_invalid(&mut self, field: &str) {
        (**self).clear_invalid(field)
    }
}

/// A sink that discards all feedback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl FeedbackSink for NoFeedback {
    fn mark_invalid(&mut self, _field: &str) {}

    fn clear_invalid(&mut self, _field: &str) {}
}
