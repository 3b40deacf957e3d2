use crate::ValidationErrors;

/// Fold the per-field results of checking a record into one result.
/// Rejections from every field are kept, in the order the fields were
/// checked, so a caller can flag all bad fields from a single pass.
///
/// ## Example
/// ```
/// use form_shape::{concat_results, FieldRejected, ValidationErrors};
/// let results = vec![
///     Ok(()),
///     Err(ValidationErrors::from(FieldRejected::new("email", "Email"))),
///     Err(ValidationErrors::from(FieldRejected::new("email", "Str"))),
///     Err(ValidationErrors::from(FieldRejected::new("password", "Password"))),
/// ];
///
/// let errors = concat_results(results).unwrap_err();
///
/// assert_eq!(3, errors.len());
/// assert_eq!(2, errors.get("email").unwrap().len());
/// assert_eq!(vec!["email", "password"], errors.fields());
///
/// assert!(concat_results(vec![Ok(()), Ok(())]).is_ok());
/// ```
pub fn concat_results<I>(results: I) -> Result<(), ValidationErrors>
where
    I: IntoIterator<Item = Result<(), ValidationErrors>>,
{
    let rejected = results
        .into_iter()
        .filter_map(Result::err)
        .fold(ValidationErrors::default(), |mut all, field_errors| {
            all.extend(field_errors);
            all
        });

    if rejected.is_empty() {
        Ok(())
    } else {
        Err(rejected)
    }
}
