use crate::ValidationErrors;

/// A value whose fields can be re-checked against the predicates of the
/// shape it belongs to. For a [Record](crate::Record) this always
/// succeeds, because a record can only be built from accepted values.
pub trait Validatable {
    /// Check every field. `Err` lists each rejected field by name.
    fn validate(&self) -> Result<(), ValidationErrors>;

    /// Check every field, returning the rejections directly; the
    /// collection is empty when all fields are accepted.
    fn validate_or_empty(&self) -> ValidationErrors {
        self.validate().err().unwrap_or_default()
    }
}
