use std::{
    fmt::{Debug, Display},
    rc::Rc,
};

/// A field whose value was rejected by the predicate declared for it.
pub struct FieldRejected {
    /// The name of the field that was rejected.
    pub field: String,
    /// The name of the predicate (type) that rejected the value, for
    /// example `"Email"`.
    pub type_name: String,
    /// Function that produces the error message.
    message: Rc<dyn Fn(&str) -> String>,
}

impl Clone for FieldRejected {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            type_name: self.type_name.clone(),
            message: Rc::clone(&self.message),
        }
    }
}

impl FieldRejected {
    /// Create a new `FieldRejected` with a generic message, recording
    /// the [type_name](FieldRejected::type_name) of the predicate
    /// that refused the value.
    pub fn new<F: Into<String>, T: Into<String>>(field: F, type_name: T) -> Self {
        Self {
            field: field.into(),
            type_name: type_name.into(),
            message: Rc::new(|_| "Validation error".to_string()),
        }
    }

    /// Factory method to set the message for this error.
    pub fn message<S: Into<String>>(mut self, message: S) -> Self {
        let message_string = message.into();
        self.message = Rc::new(move |_| message_string.clone());
        self
    }

    /// Factory method to set the message for this error from a
    /// function of the field name.
    ///
    /// ## Example
    /// ```
    /// use form_shape::FieldRejected;
    ///
    /// let error = FieldRejected::new("password", "Password")
    ///     .with_message(|field| format!("{} is too short", field));
    ///
    /// assert_eq!("password is too short", error.to_string());
    /// assert_eq!("Password", error.type_name);
    /// ```
    pub fn with_message<F: Fn(&str) -> String + 'static>(mut self, message_fn: F) -> Self {
        self.message = Rc::new(message_fn);
        self
    }

    fn get_message(&self) -> String {
        (self.message)(&self.field)
    }
}

impl Display for FieldRejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get_message())
    }
}

impl Debug for FieldRejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FieldRejected{{ field: {0:?}, type_name: {1}, message: {2} }}",
            self.field,
            self.type_name,
            self.get_message()
        )
    }
}

impl std::error::Error for FieldRejected {}

/// The fields rejected while validating a record, in the order they
/// were evaluated.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    pub errors: Vec<FieldRejected>,
}

impl ValidationErrors {
    /// Create a new `ValidationErrors`.
    pub fn new(errors: Vec<FieldRejected>) -> Self {
        Self { errors }
    }

    /// Get errors associated with the specified field, or `None` if
    /// that field was not rejected.
    pub fn get(&self, field: &str) -> Option<ValidationErrors> {
        let errors: Vec<FieldRejected> = self
            .errors
            .iter()
            .filter(|error| error.field == field)
            .cloned()
            .collect();

        if !errors.is_empty() {
            Some(ValidationErrors::new(errors))
        } else {
            None
        }
    }

    /// Returns true if the specified field was rejected.
    pub fn contains(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    /// The names of the rejected fields, without repeats, in the order
    /// they were first rejected.
    ///
    /// ## Example
    /// ```
    /// use form_shape::{FieldRejected, ValidationErrors};
    ///
    /// let errors = ValidationErrors::new(vec![
    ///     FieldRejected::new("password", "Password"),
    ///     FieldRejected::new("email", "Email"),
    ///     FieldRejected::new("password", "Str"),
    /// ]);
    ///
    /// assert_eq!(vec!["password", "email"], errors.fields());
    /// ```
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for error in &self.errors {
            if !fields.contains(&error.field.as_str()) {
                fields.push(&error.field);
            }
        }
        fields
    }

    /// Returns true if there are no errors in this collection.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Extend this collection of errors with the contents of another
    /// collection.
    pub fn extend(&mut self, errors: ValidationErrors) {
        self.errors.extend(errors.errors)
    }

    /// The number of errors in this collection.
    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let errors: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e))
            .collect();
        write!(f, "{}", errors.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<FieldRejected> for ValidationErrors {
    fn from(err: FieldRejected) -> Self {
        ValidationErrors::new(vec![err])
    }
}

/// A [Record](crate::Record) could not be constructed because the
/// supplied values do not satisfy its shape. The whole input is
/// rejected.
#[derive(Debug, Clone, thiserror::Error)]
#[error("values do not satisfy record shape '{shape}': {rejected}")]
pub struct RecordInvariantViolation {
    /// Name of the shape the record was being built for.
    pub shape: String,
    /// Every field that failed, including input fields the shape does
    /// not declare.
    pub rejected: ValidationErrors,
}

/// Errors raised while declaring a [RecordShape](crate::RecordShape).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// Two fields in the same shape share a name.
    #[error("field '{field}' is declared more than once in shape '{shape}'")]
    DuplicateField { shape: String, field: String },
}

impl ShapeError {
    /// Creates a new duplicate field error.
    pub fn duplicate_field(shape: impl Into<String>, field: impl Into<String>) -> Self {
        Self::DuplicateField {
            shape: shape.into(),
            field: field.into(),
        }
    }
}
