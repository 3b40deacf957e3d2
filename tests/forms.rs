use form_shape::{
    email, maybe, password, refine, FeedbackSink, FormConfig, FormController, InputSource, Kind,
    Record, RecordShape, SubmitEvent, Validatable, ValidationOutcome,
};
use std::{
    cell::RefCell,
    collections::{BTreeSet, HashMap},
    rc::Rc,
};

/// Stands in for a browser document: inputs by id, and the classes on
/// each input's container.
#[derive(Default)]
struct Page {
    inputs: HashMap<String, String>,
    error_containers: BTreeSet<String>,
    reads: RefCell<Vec<String>>,
}

impl Page {
    fn with(inputs: &[(&str, &str)]) -> Self {
        Self {
            inputs: inputs
                .iter()
                .map(|(id, value)| (id.to_string(), value.to_string()))
                .collect(),
            ..Page::default()
        }
    }

    fn set(&mut self, id: &str, value: &str) {
        self.inputs.insert(id.to_string(), value.to_string());
    }

    fn flagged(&self) -> Vec<&str> {
        self.error_containers.iter().map(String::as_str).collect()
    }
}

impl InputSource for Page {
    fn raw_value(&self, field: &str) -> Option<String> {
        self.reads.borrow_mut().push(field.to_string());
        self.inputs.get(field).cloned()
    }
}

impl FeedbackSink for Page {
    fn mark_invalid(&mut self, field: &str) {
        self.error_containers.insert(field.to_string());
    }

    fn clear_invalid(&mut self, field: &str) {
        self.error_containers.remove(field);
    }
}

struct Submit<'a> {
    prevented: bool,
    page: &'a Page,
}

impl SubmitEvent for Submit<'_> {
    fn prevent_default(&mut self) {
        assert!(
            self.page.reads.borrow().is_empty(),
            "default prevented after inputs were read"
        );
        self.prevented = true;
    }
}

/// The signup form's domain type.
#[derive(Debug, PartialEq)]
struct User {
    username: String,
    password: String,
    email: Option<String>,
}

impl User {
    fn shape() -> RecordShape {
        RecordShape::builder("User")
            .field("username", refine(Kind::Str, |s| !s.contains(' ')).named("Username"))
            .field("password", password())
            .field("email", maybe(email()))
            .build()
            .unwrap()
    }

    fn from_record(record: &Record) -> Self {
        Self {
            username: record.get("username").unwrap_or_default().to_string(),
            password: record.get("password").unwrap_or_default().to_string(),
            email: record.get("email").map(str::to_string),
        }
    }
}

fn signup_controller(sent: Rc<RefCell<Vec<User>>>) -> FormController {
    FormController::new(User::shape())
        .config(FormConfig {
            success_message: Some("Signup info sent.".to_string()),
            failure_message: None,
            ..FormConfig::default()
        })
        .on_valid(move |record| sent.borrow_mut().push(User::from_record(record)))
}

fn submit(
    controller: &mut FormController,
    page: &mut Page,
    alerts: &mut Vec<String>,
) -> ValidationOutcome {
    let snapshot = Page {
        inputs: page.inputs.clone(),
        ..Page::default()
    };
    let mut event = Submit {
        prevented: false,
        page: &snapshot,
    };
    let outcome = controller.handle_submit(&mut event, &snapshot, page, alerts);
    assert!(event.prevented);
    outcome
}

#[test]
fn signup_with_blank_optional_email() {
    let sent = Rc::new(RefCell::new(Vec::new()));
    let mut controller = signup_controller(Rc::clone(&sent));
    let mut page = Page::with(&[("username", "bob"), ("password", "secret1"), ("email", "  ")]);
    let mut alerts = Vec::new();

    let outcome = submit(&mut controller, &mut page, &mut alerts);

    let record = outcome.record().unwrap();
    assert!(record.validate().is_ok());
    assert_eq!(
        r#"{"username":"bob","password":"secret1","email":null}"#,
        serde_json::to_string(record).unwrap()
    );
    assert_eq!(
        vec![User {
            username: "bob".to_string(),
            password: "secret1".to_string(),
            email: None,
        }],
        *sent.borrow()
    );
    assert_eq!(vec!["Signup info sent.".to_string()], alerts);
    assert!(page.flagged().is_empty());
}

#[test]
fn signup_short_password_flags_only_password() {
    let sent = Rc::new(RefCell::new(Vec::new()));
    let mut controller = signup_controller(Rc::clone(&sent));
    let mut page = Page::with(&[("username", "bob"), ("password", "ab"), ("email", "")]);
    let mut alerts = Vec::new();

    let outcome = submit(&mut controller, &mut page, &mut alerts);

    assert_eq!(vec!["password"], outcome.errors().unwrap().fields());
    assert_eq!(vec!["password"], page.flagged());
    assert!(sent.borrow().is_empty());
    assert!(alerts.is_empty());
}

#[test]
fn resubmitting_clears_fixed_fields() {
    let sent = Rc::new(RefCell::new(Vec::new()));
    let mut controller = signup_controller(Rc::clone(&sent));
    let mut page = Page::with(&[("username", "bob smith"), ("password", "ab"), ("email", "bob")]);
    let mut alerts = Vec::new();

    submit(&mut controller, &mut page, &mut alerts);
    assert_eq!(vec!["email", "password", "username"], page.flagged());

    page.set("username", "bob");
    page.set("email", "bob@example.com");
    submit(&mut controller, &mut page, &mut alerts);
    assert_eq!(vec!["password"], page.flagged());

    page.set("password", "secret1");
    let outcome = submit(&mut controller, &mut page, &mut alerts);
    assert!(outcome.is_valid());
    assert!(page.flagged().is_empty());
    assert_eq!(1, sent.borrow().len());
}

#[test]
fn login_alerts_generic_failure() {
    let shape = RecordShape::builder("User")
        .field("email", email())
        .field("password", password())
        .build()
        .unwrap();
    let mut controller = FormController::new(shape);
    let mut page = Page::with(&[("email", "a@b.com"), ("password", "abc")]);
    let mut alerts = Vec::new();

    let outcome = submit(&mut controller, &mut page, &mut alerts);

    assert!(!outcome.is_valid());
    assert_eq!(vec!["Not valid".to_string()], alerts);

    page.set("password", "abcdef");
    alerts.clear();
    let outcome = submit(&mut controller, &mut page, &mut alerts);

    assert!(outcome.is_valid());
    assert!(alerts.is_empty());
}
