use std::collections::{BTreeMap, HashMap};

/// Normalise raw text from a form control: surrounding whitespace is
/// trimmed, and input that is empty after trimming is absent.
///
/// ## Example
/// ```
/// use form_shape::normalize;
///
/// assert_eq!(Some("bob".to_string()), normalize("  bob \n"));
/// assert_eq!(None, normalize("   "));
/// assert_eq!(None, normalize(""));
/// ```
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Values collected for one validation attempt, keyed by field name,
/// in the order they were inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputValues {
    entries: Vec<(String, Option<String>)>,
}

impl InputValues {
    /// Create an empty `InputValues`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of `field`, replacing any previous value. The value
    /// is normalised like raw control text, so `Some("  ")` is stored as
    /// absent and padding is trimmed.
    pub fn insert<F: Into<String>>(&mut self, field: F, value: Option<String>) {
        let field = field.into();
        let value = value.as_deref().and_then(normalize);
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value)),
        }
    }

    /// Set the value of `field` from raw control text, applying
    /// [normalize()](normalize()).
    pub fn insert_raw<F: Into<String>>(&mut self, field: F, raw: &str) {
        self.insert(field, normalize(raw))
    }

    /// The value of `field`. Returns `None` both when the value is
    /// absent and when `field` was never inserted; see
    /// [contains()](InputValues::contains).
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Returns true if a value (possibly absent) was inserted for `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == field)
    }

    /// Iterate over `(field, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    /// The number of fields with a value (possibly absent).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no field has been inserted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<F: Into<String>> FromIterator<(F, Option<String>)> for InputValues {
    fn from_iter<I: IntoIterator<Item = (F, Option<String>)>>(iter: I) -> Self {
        let mut values = InputValues::new();
        for (field, value) in iter {
            values.insert(field, value);
        }
        values
    }
}

/// Somewhere the current raw text of a form field can be read from,
/// by field name. By convention the field name is also the identifier
/// of the control holding its value.
pub trait InputSource {
    /// The raw, unnormalised text for `field`, or `None` if there is no
    /// control for it.
    fn raw_value(&self, field: &str) -> Option<String>;
}

impl InputSource for HashMap<String, String> {
    fn raw_value(&self, field: &str) -> Option<String> {
        self.get(field).cloned()
    }
}

impl InputSource for BTreeMap<String, String> {
    fn raw_value(&self, field: &str) -> Option<String> {
        self.get(field).cloned()
    }
}

impl<S: InputSource + ?Sized> InputSource for &S {
    fn raw_value(&self, field: &str) -> Option<String> {
        (**self).raw_value(field)
    }
}

/// An [InputSource](InputSource) backed by a closure, see
/// [from_fn()](from_fn()).
pub struct InputFn<F>(F);

impl<F> InputSource for InputFn<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn raw_value(&self, field: &str) -> Option<String> {
        (self.0)(field)
    }
}

/// Read raw field values through a closure.
///
/// ## Example
/// ```
/// use form_shape::{from_fn, InputSource};
///
/// let source = from_fn(|field| match field {
///     "username" => Some(" bob ".to_string()),
///     _ => None,
/// });
///
/// assert_eq!(Some(" bob ".to_string()), source.raw_value("username"));
/// assert_eq!(None, source.raw_value("email"));
/// ```
pub fn from_fn<F>(f: F) -> InputFn<F>
where
    F: Fn(&str) -> Option<String>,
{
    InputFn(f)
}
