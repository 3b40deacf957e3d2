use crate::Validation;
use std::{fmt::Debug, rc::Rc};
use uuid::Uuid;

type PredicateTraitObject = dyn Fn(Option<&str>) -> bool;

/// A named membership test for the normalised value of a form field.
///
/// Each predicate carries an identity, so two predicates are only
/// equal if one is a clone of the other.
///
/// ## Example
///
/// ```
/// use form_shape::{Predicate, Validation};
///
/// let even_length = Predicate::new("EvenLength", |value: Option<&str>| {
///     value.map_or(false, |s| s.len() % 2 == 0)
/// });
///
/// assert!(even_length.is(Some("ab")));
/// assert!(!even_length.is(Some("abc")));
/// assert!(!even_length.is(None));
///
/// let error = even_length.validate_value(Some("abc"), "code").unwrap_err();
/// assert_eq!("EvenLength", error.errors[0].type_name);
/// ```
pub struct Predicate {
    closure: Rc<PredicateTraitObject>,
    name: Rc<str>,
    id: Uuid,
}

impl Predicate {
    /// Create a new `Predicate`.
    pub fn new<N, C>(name: N, closure: C) -> Self
    where
        N: Into<String>,
        C: Fn(Option<&str>) -> bool + 'static,
    {
        Self {
            closure: Rc::new(closure),
            name: Rc::from(name.into()),
            id: Uuid::new_v4(),
        }
    }

    /// Factory method to give this predicate a new name. The result is
    /// a distinct predicate, not equal to `self`.
    pub fn named<N: Into<String>>(self, name: N) -> Self {
        Self {
            closure: self.closure,
            name: Rc::from(name.into()),
            id: Uuid::new_v4(),
        }
    }

    /// A predicate accepting values that both `self` and `other`
    /// accept.
    pub fn and(self, other: Predicate) -> Self {
        let name = format!("{} & {}", self.name, other.name);
        Predicate::new(name, move |value| self.is(value) && other.is(value))
    }

    /// The name of this predicate.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Clone for Predicate {
    fn clone(&self) -> Self {
        Self {
            closure: Rc::clone(&self.closure),
            name: Rc::clone(&self.name),
            id: self.id,
        }
    }
}

impl PartialEq for Predicate {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Debug for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Predicate(name: {}, closure: {:p}, id: {})",
            self.name, self.closure, self.id
        )
    }
}

impl Validation for Predicate {
    fn is(&self, value: Option<&str>) -> bool {
        (self.closure)(value)
    }

    fn type_name(&self) -> &str {
        &self.name
    }
}

/// The base domains a field value can be refined from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Anything, including an absent value.
    Any,
    /// Any present string.
    Str,
    /// A present string that parses as a finite number.
    Num,
    /// `"true"` or `"false"`.
    Bool,
}

impl Kind {
    /// Returns true if `value` belongs to this base domain.
    pub fn admits(self, value: Option<&str>) -> bool {
        match (self, value) {
            (Kind::Any, _) => true,
            (_, None) => false,
            (Kind::Str, Some(_)) => true,
            (Kind::Num, Some(s)) => s.parse::<f64>().map_or(false, f64::is_finite),
            (Kind::Bool, Some(s)) => s == "true" || s == "false",
        }
    }

    /// The name used for predicates built from this kind, e.g. `"Str"`.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Any => "Any",
            Kind::Str => "Str",
            Kind::Num => "Num",
            Kind::Bool => "Bool",
        }
    }
}

impl From<Kind> for Predicate {
    fn from(kind: Kind) -> Self {
        Predicate::new(kind.name(), move |value| kind.admits(value))
    }
}

/// Narrow `base` to the present values for which `condition` holds.
/// An absent value never satisfies a refinement; wrap the result in
/// [maybe()](maybe()) to make the field optional.
///
/// ## Example
/// ```
/// use form_shape::{refine, Kind, Validation};
///
/// let zip = refine(Kind::Num, |s| s.len() == 5).named("Zip");
///
/// assert!(zip.is(Some("90210")));
/// assert!(!zip.is(Some("9021")));
/// assert!(!zip.is(Some("abcde")));
/// assert!(!zip.is(None));
/// ```
pub fn refine<B, C>(base: B, condition: C) -> Predicate
where
    B: Into<Predicate>,
    C: Fn(&str) -> bool + 'static,
{
    let base = base.into();
    let name = base.name().to_string();
    Predicate::new(name, move |value| {
        base.is(value) && value.map_or(false, |s| condition(s))
    })
}

/// Make `predicate` optional: the result also accepts an absent value.
///
/// ## Example
/// ```
/// use form_shape::{email, maybe, Validation};
///
/// let optional_email = maybe(email());
///
/// assert_eq!("?Email", optional_email.name());
/// assert!(optional_email.is(None));
/// assert!(optional_email.is(Some("bob@example.com")));
/// assert!(!optional_email.is(Some("bob")));
/// ```
pub fn maybe<P: Into<Predicate>>(predicate: P) -> Predicate {
    let predicate = predicate.into();
    let name = format!("?{}", predicate.name());
    Predicate::new(name, move |value| value.is_none() || predicate.is(value))
}

/// A string containing at least one `'@'`.
pub fn email() -> Predicate {
    refine(Kind::Str, |s| s.contains('@')).named("Email")
}

/// A string of at least 6 characters.
pub fn password() -> Predicate {
    refine(Kind::Str, |s| s.chars().count() >= 6).named("Password")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn kinds_reject_absent_except_any() {
        assert!(Kind::Any.admits(None));
        assert!(!Kind::Str.admits(None));
        assert!(!Kind::Num.admits(None));
        assert!(!Kind::Bool.admits(None));
    }

    #[test]
    fn num_requires_finite_number() {
        assert!(Kind::Num.admits(Some("42")));
        assert!(Kind::Num.admits(Some("-1.5")));
        assert!(!Kind::Num.admits(Some("NaN")));
        assert!(!Kind::Num.admits(Some("inf")));
        assert!(!Kind::Num.admits(Some("forty")));
    }

    #[test]
    fn bool_accepts_literals_only() {
        assert!(Kind::Bool.admits(Some("true")));
        assert!(Kind::Bool.admits(Some("false")));
        assert!(!Kind::Bool.admits(Some("yes")));
    }

    #[test]
    fn clones_are_equal_and_renames_are_not() {
        let p = email();
        assert_eq!(p, p.clone());
        assert_ne!(p, p.clone().named("Other"));
        assert_ne!(email(), email());
    }

    #[test]
    fn and_requires_both() {
        let short = Predicate::new("Short", |value: Option<&str>| {
            value.map_or(false, |s| s.len() < 10)
        });
        let p = email().and(short);

        assert_eq!("Email & Short", p.name());
        assert!(p.is(Some("a@b.com")));
        assert!(!p.is(Some("someone@example.com")));
        assert!(!p.is(Some("abc")));
    }

    #[test]
    fn refine_of_any_still_rejects_absent() {
        let p = refine(Kind::Any, |_| true);
        assert!(p.is(Some("")));
        assert!(!p.is(None));
    }

    #[test]
    fn password_counts_characters() {
        assert!(password().is(Some("ééééàà")));
        assert!(!password().is(Some("abcde")));
    }

    #[test]
    fn email_rejects_absent() {
        assert!(!email().is(None));
        assert!(!password().is(None));
    }

    #[test]
    fn email_accepts_iff_contains_at() {
        let email = email();
        proptest!(|(s in ".*")| {
            prop_assert_eq!(email.is(Some(s.as_str())), s.contains('@'));
        });
    }

    #[test]
    fn password_accepts_iff_six_or_more_chars() {
        let password = password();
        proptest!(|(s in ".{0,12}")| {
            prop_assert_eq!(password.is(Some(s.as_str())), s.chars().count() >= 6);
        });
    }
}
