use crate::{FieldRejected, ValidationErrors};

/// A function/struct/item that decides whether a normalised form value
/// (`None` for an absent value) belongs to an allowed domain.
pub trait Validation {
    /// Returns true if `value` is a member of this domain.
    fn is(&self, value: Option<&str>) -> bool;

    /// The name of this domain, used as the
    /// [type_name](FieldRejected::type_name) of rejections.
    fn type_name(&self) -> &str;

    /// Validate the value of the field called `field`, returning a
    /// [FieldRejected](FieldRejected) if the value is not a member of
    /// this domain.
    fn validate_value(&self, value: Option<&str>, field: &str) -> Result<(), ValidationErrors> {
        if self.is(value) {
            Ok(())
        } else {
            Err(FieldRejected::new(field, self.type_name()).into())
        }
    }
}
