use crate::{Predicate, ShapeError, Validation};
use std::rc::Rc;

/// One declared field of a record shape.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub predicate: Predicate,
}

/// A named, ordered table of fields, each with the predicate its value
/// must satisfy. Cloning a shape shares its field table.
///
/// ## Example
/// ```
/// use form_shape::{email, password, RecordShape};
///
/// let user = RecordShape::builder("User")
///     .field("email", email())
///     .field("password", password())
///     .build()
///     .unwrap();
///
/// let names: Vec<&str> = user.fields().iter().map(|f| f.name.as_str()).collect();
/// assert_eq!(vec!["email", "password"], names);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecordShape {
    name: Rc<str>,
    fields: Rc<[FieldDescriptor]>,
}

impl RecordShape {
    /// Start declaring a shape called `name`.
    pub fn builder<N: Into<String>>(name: N) -> RecordShapeBuilder {
        RecordShapeBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// The name of this shape, for example `"User"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared fields, in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// The descriptor for `name`, if declared.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// The number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true if `value` is acceptable for the field `name`.
    /// Undeclared fields accept nothing.
    pub fn admits(&self, name: &str, value: Option<&str>) -> bool {
        self.field(name)
            .map_or(false, |field| field.predicate.is(value))
    }
}

/// Builder for a [RecordShape](RecordShape), see
/// [RecordShape::builder()](RecordShape::builder()).
#[derive(Debug)]
pub struct RecordShapeBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl RecordShapeBuilder {
    /// A factory method to declare the next field.
    pub fn field<N, P>(mut self, name: N, predicate: P) -> Self
    where
        N: Into<String>,
        P: Into<Predicate>,
    {
        self.fields.push(FieldDescriptor {
            name: name.into(),
            predicate: predicate.into(),
        });
        self
    }

    /// Finish the declaration. Fails if a field name was declared more
    /// than once.
    pub fn build(self) -> Result<RecordShape, ShapeError> {
        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|other| other.name == field.name) {
                return Err(ShapeError::duplicate_field(&self.name, &field.name));
            }
        }

        Ok(RecordShape {
            name: Rc::from(self.name),
            fields: Rc::from(self.fields),
        })
    }
}
