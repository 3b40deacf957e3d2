use crate::{
    normalize, FeedbackSink, InputSource, InputValues, Record, RecordShape, Validation,
    ValidationErrors,
};

/// The result of validating a form against a [RecordShape](RecordShape).
#[derive(Debug, Clone)]
pub enum ValidationOutcome {
    /// Every field was accepted.
    Valid(Record),
    /// At least one field was rejected; no record was produced.
    Invalid(ValidationErrors),
}

impl ValidationOutcome {
    /// Returns true if every field was accepted.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }

    /// The validated record, if every field was accepted.
    pub fn record(&self) -> Option<&Record> {
        match self {
            ValidationOutcome::Valid(record) => Some(record),
            ValidationOutcome::Invalid(_) => None,
        }
    }

    /// The rejected fields, if any field was rejected.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            ValidationOutcome::Valid(_) => None,
            ValidationOutcome::Invalid(errors) => Some(errors),
        }
    }

    /// Convert into a `Result`, with the record as the `Ok` value.
    pub fn into_result(self) -> Result<Record, ValidationErrors> {
        match self {
            ValidationOutcome::Valid(record) => Ok(record),
            ValidationOutcome::Invalid(errors) => Err(errors),
        }
    }
}

impl From<ValidationOutcome> for Result<Record, ValidationErrors> {
    fn from(outcome: ValidationOutcome) -> Self {
        outcome.into_result()
    }
}

/// Validates forms against a shape, reading one control per declared
/// field and reporting the result for each one.
///
/// ## Example
/// ```
/// use form_shape::{email, password, Feedback, FieldValidator, RecordShape};
/// use std::collections::HashMap;
///
/// let login = RecordShape::builder("Login")
///     .field("email", email())
///     .field("password", password())
///     .build()
///     .unwrap();
/// let validator = FieldValidator::new(login);
///
/// let mut form = HashMap::new();
/// form.insert("email".to_string(), " bob@example.com ".to_string());
/// form.insert("password".to_string(), "abc".to_string());
///
/// let mut feedback: Vec<Feedback> = Vec::new();
/// let outcome = validator.validate(&form, &mut feedback);
///
/// assert_eq!(vec!["password"], outcome.errors().unwrap().fields());
/// assert_eq!(
///     vec![
///         Feedback::ClearInvalid("email".to_string()),
///         Feedback::MarkInvalid("password".to_string()),
///     ],
///     feedback
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValidator {
    shape: RecordShape,
}

impl FieldValidator {
    /// Create a new `FieldValidator` for `shape`.
    pub fn new(shape: RecordShape) -> Self {
        Self { shape }
    }

    /// The shape forms are validated against.
    pub fn shape(&self) -> &RecordShape {
        &self.shape
    }

    /// See [validate()](validate()).
    pub fn validate<I, S>(&self, source: &I, sink: &mut S) -> ValidationOutcome
    where
        I: InputSource + ?Sized,
        S: FeedbackSink + ?Sized,
    {
        validate(&self.shape, source, sink)
    }
}

/// Validate the current form values against `shape`.
///
/// Each declared field is visited in order: its raw value is read from
/// `source` (a missing control reads as empty) and normalised, its
/// predicate is evaluated, and `sink` is told to mark or clear the
/// field. Every field is visited even after a rejection. If all fields
/// were accepted the collected values are built into a
/// [Record](Record).
pub fn validate<I, S>(shape: &RecordShape, source: &I, sink: &mut S) -> ValidationOutcome
where
    I: InputSource + ?Sized,
    S: FeedbackSink + ?Sized,
{
    let mut values = InputValues::new();
    let mut errors = ValidationErrors::default();

    for field in shape.fields() {
        let raw = source.raw_value(&field.name).unwrap_or_default();
        let value = normalize(&raw);
        let result = field.predicate.validate_value(value.as_deref(), &field.name);

        tracing::debug!(
            shape = shape.name(),
            field = %field.name,
            predicate = field.predicate.name(),
            valid = result.is_ok(),
            "field evaluated"
        );

        match result {
            Ok(()) => sink.clear_invalid(&field.name),
            Err(field_errors) => {
                sink.mark_invalid(&field.name);
                errors.extend(field_errors);
            }
        }

        values.insert(field.name.as_str(), value);
    }

    if !errors.is_empty() {
        return ValidationOutcome::Invalid(errors);
    }

    match Record::new(shape, values) {
        Ok(record) => ValidationOutcome::Valid(record),
        Err(violation) => {
            tracing::warn!(%violation, "accepted values failed record construction");
            ValidationOutcome::Invalid(violation.rejected)
        }
    }
}
