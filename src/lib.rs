//! This is a library for validating data entry forms against a
//! declared record shape.
//!
//! Typically to use this library, you would declare a
//! [RecordShape](RecordShape) with a [Predicate](Predicate) for each
//! field (built from a [Kind](Kind) with [refine()](refine()) and
//! [maybe()](maybe())), and then [validate()](validate()) the form's
//! controls against it. Each field is marked or cleared through a
//! [FeedbackSink](FeedbackSink), and a successful validation produces a
//! [Record](Record): an immutable value that can only exist if every
//! field satisfies its predicate.
//!
//! ## Example
//! ```
//! use form_shape::{email, maybe, password, validate, Kind, NoFeedback, RecordShape};
//! use std::collections::HashMap;
//!
//! let user = RecordShape::builder("User")
//!     .field("username", Kind::Str)
//!     .field("password", password())
//!     .field("email", maybe(email()))
//!     .build()
//!     .unwrap();
//!
//! let mut form = HashMap::new();
//! form.insert("username".to_string(), "bob".to_string());
//! form.insert("password".to_string(), "secret1".to_string());
//! form.insert("email".to_string(), "".to_string());
//!
//! let record = validate(&user, &form, &mut NoFeedback).into_result().unwrap();
//! assert_eq!(Some("bob"), record.get("username"));
//! assert_eq!(None, record.get("email"));
//! ```
//!
//! ## Optional Features
//!
//! + `"wasm-bindgen-support"` - enable the [dom] module, binding forms
//!   in a browser document via
//!   [web-sys](https://crates.io/crates/web-sys) on the
//!   `wasm32-unknown-unknown` platform.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod concat_results;
mod error;
mod feedback;
mod form;
mod input;
mod predicate;
mod record;
mod shape;
mod validatable;
mod validation;
mod validator;

#[cfg(feature = "wasm-bindgen-support")]
#[cfg_attr(docsrs, doc(cfg(feature = "wasm-bindgen-support")))]
pub mod dom;

pub use concat_results::concat_results;
pub use error::*;
pub use feedback::*;
pub use form::*;
pub use input::*;
pub use predicate::*;
pub use record::*;
pub use shape::*;
pub use validatable::*;
pub use validation::*;
pub use validator::*;
