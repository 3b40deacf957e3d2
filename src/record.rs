use crate::{
    concat_results, FieldRejected, InputValues, RecordInvariantViolation, RecordShape,
    Validatable, Validation, ValidationErrors,
};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// An immutable set of field values, proven by successful construction
/// to satisfy every predicate of its [RecordShape](RecordShape).
///
/// ## Example
/// ```
/// use form_shape::{email, password, InputValues, Record, RecordShape};
///
/// let user = RecordShape::builder("User")
///     .field("email", email())
///     .field("password", password())
///     .build()
///     .unwrap();
///
/// let mut values = InputValues::new();
/// values.insert_raw("email", "a@b.com");
/// values.insert_raw("password", "abcdef");
/// let record = Record::new(&user, values).unwrap();
/// assert_eq!(Some("a@b.com"), record.get("email"));
///
/// let mut values = InputValues::new();
/// values.insert_raw("email", "a@b.com");
/// values.insert_raw("password", "abc");
/// let violation = Record::new(&user, values).unwrap_err();
/// assert_eq!(vec!["password"], violation.rejected.fields());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    shape: RecordShape,
    values: Vec<Option<String>>,
}

impl Record {
    /// Construct a record of `shape` from `values`. Every declared
    /// field is checked; fields missing from `values` are treated as
    /// absent. If any field is rejected, or `values` names a field the
    /// shape does not declare, the whole input is rejected.
    pub fn new(shape: &RecordShape, values: InputValues) -> Result<Self, RecordInvariantViolation> {
        let mut results: Vec<Result<(), ValidationErrors>> = shape
            .fields()
            .iter()
            .map(|field| {
                field
                    .predicate
                    .validate_value(values.get(&field.name), &field.name)
            })
            .collect();

        results.extend(
            values
                .iter()
                .filter(|(name, _)| shape.field(name).is_none())
                .map(|(name, _)| {
                    Err(ValidationErrors::from(
                        FieldRejected::new(name, "Undeclared")
                            .with_message(|field| format!("{} is not a declared field", field)),
                    ))
                }),
        );

        if let Err(rejected) = concat_results(results) {
            tracing::debug!(
                shape = shape.name(),
                rejected = %rejected,
                "record construction rejected"
            );
            return Err(RecordInvariantViolation {
                shape: shape.name().to_string(),
                rejected,
            });
        }

        let values = shape
            .fields()
            .iter()
            .map(|field| values.get(&field.name).map(str::to_string))
            .collect();

        Ok(Self {
            shape: shape.clone(),
            values,
        })
    }

    /// The shape this record satisfies.
    pub fn shape(&self) -> &RecordShape {
        &self.shape
    }

    /// The value of `field`, or `None` if it is absent or not declared.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.shape
            .position(field)
            .and_then(|i| self.values.get(i))
            .and_then(Option::as_deref)
    }

    /// Iterate over `(field, value)` pairs in shape order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.shape
            .fields()
            .iter()
            .zip(&self.values)
            .map(|(field, value)| (field.name.as_str(), value.as_deref()))
    }

    /// The values of this record as [InputValues](InputValues).
    pub fn to_input_values(&self) -> InputValues {
        self.fields()
            .map(|(field, value)| (field, value.map(str::to_string)))
            .collect()
    }

    /// A copy of this record with `field` set to `value`. The value is
    /// normalised and the copy is checked like any other construction;
    /// `self` is unchanged.
    ///
    /// ## Example
    /// ```
    /// use form_shape::{password, InputValues, Record, RecordShape};
    ///
    /// let shape = RecordShape::builder("Login")
    ///     .field("password", password())
    ///     .build()
    ///     .unwrap();
    /// let mut values = InputValues::new();
    /// values.insert_raw("password", "secret1");
    /// let record = Record::new(&shape, values).unwrap();
    ///
    /// let updated = record.update("password", Some("secret2".to_string())).unwrap();
    /// assert_eq!(Some("secret2"), updated.get("password"));
    /// assert_eq!(Some("secret1"), record.get("password"));
    ///
    /// assert!(record.update("password", Some("abc".to_string())).is_err());
    /// ```
    pub fn update<F: Into<String>>(
        &self,
        field: F,
        value: Option<String>,
    ) -> Result<Self, RecordInvariantViolation> {
        let mut values = self.to_input_values();
        values.insert(field, value);
        Record::new(&self.shape, values)
    }
}

impl Validatable for Record {
    fn validate(&self) -> Result<(), ValidationErrors> {
        concat_results(
            self.shape
                .fields()
                .iter()
                .zip(&self.values)
                .map(|(field, value)| {
                    field
                        .predicate
                        .validate_value(value.as_deref(), &field.name)
                }),
        )
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in self.fields() {
            map.serialize_entry(field, &value)?;
        }
        map.end()
    }
}
