#![forbid(unsafe_code)]

//! Controlled phone-book entry form.
//!
//! The form owns the three field values in an [`Observable`]. Edits replace
//! one field on top of the latest form data; submission checks that every
//! field is present and hands the record to the `on_submit` callback from
//! the props. Field values survive submission, so repeated submits add
//! repeated rows.

use std::rc::Rc;

use fkit_core::component::Component;
use fkit_core::event::Event;
use fkit_core::frame::Frame;
use fkit_runtime::reactive::{Observable, Subscription};
use thiserror::Error;
use tracing::{debug, warn};

use super::record::{ContactRecord, Field};

pub const DEFAULT_FIRST_NAME: &str = "Coder";
pub const DEFAULT_LAST_NAME: &str = "Byte";
pub const DEFAULT_PHONE: &str = "8885559999";

/// Caption of the submit button.
pub const SUBMIT_LABEL: &str = "Add User";

/// Form-level failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A field was blank at submission.
    #[error("{} is required", .0.label())]
    MissingField(Field),
    /// A field name did not match any form field.
    #[error("unknown form field {0:?}")]
    UnknownField(String),
}

/// Callback receiving each successfully submitted record.
pub type SubmitHandler = Rc<dyn Fn(ContactRecord)>;

/// Props for [`PhoneBookForm`].
#[derive(Clone)]
pub struct FormProps {
    pub on_submit: SubmitHandler,
}

impl FormProps {
    pub fn new(on_submit: impl Fn(ContactRecord) + 'static) -> Self {
        Self {
            on_submit: Rc::new(on_submit),
        }
    }
}

impl std::fmt::Debug for FormProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormProps").finish_non_exhaustive()
    }
}

/// Entry form with `Coder` / `Byte` / `8885559999` as initial values.
#[derive(Debug, Clone)]
pub struct PhoneBookForm {
    data: Observable<ContactRecord>,
    error: Observable<Option<FormError>>,
}

impl Default for PhoneBookForm {
    fn default() -> Self {
        Self::with_values(ContactRecord::new(
            DEFAULT_FIRST_NAME,
            DEFAULT_LAST_NAME,
            DEFAULT_PHONE,
        ))
    }
}

impl PhoneBookForm {
    /// A form with the default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-filled with `values`.
    #[must_use]
    pub fn with_values(values: ContactRecord) -> Self {
        Self {
            data: Observable::new(values),
            error: Observable::new(None),
        }
    }

    /// Replace one field, keeping the others from the latest form data.
    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.data.update(|data| *data.field_mut(field) = value);
        self.error.set(None);
    }

    /// Replace a field addressed by name (`first_name`, `userPhone`, ...).
    pub fn set_named(&self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field: Field = name.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Current value of one field.
    #[must_use]
    pub fn value(&self, field: Field) -> String {
        self.data.with(|data| data.field(field).to_string())
    }

    /// Snapshot of all fields.
    #[must_use]
    pub fn values(&self) -> ContactRecord {
        self.data.get()
    }

    /// Error from the last rejected submission, cleared by the next edit.
    #[must_use]
    pub fn error(&self) -> Option<FormError> {
        self.error.get()
    }

    /// Validate and return the record the form currently describes.
    ///
    /// Presence is the only rule: whitespace-only counts as missing.
    pub fn submit(&self) -> Result<ContactRecord, FormError> {
        let record = self.values();
        match Field::ALL
            .into_iter()
            .find(|field| record.field(*field).trim().is_empty())
        {
            Some(field) => {
                let err = FormError::MissingField(field);
                self.error.set(Some(err.clone()));
                Err(err)
            }
            None => {
                self.error.set(None);
                Ok(record)
            }
        }
    }

    /// Run `callback` whenever a field changes.
    pub fn subscribe(&self, callback: impl Fn(&ContactRecord) + 'static) -> Subscription {
        self.data.subscribe(callback)
    }
}

impl Component for PhoneBookForm {
    type Props = FormProps;

    fn render(&self, _props: &FormProps, frame: &mut Frame) {
        let values = self.values();
        let width = Field::ALL
            .iter()
            .map(|field| field.label().len())
            .max()
            .unwrap_or(0);
        for field in Field::ALL {
            frame.line(format!(
                "{:<width$}  [{}]",
                format!("{}:", field.label()),
                values.field(field),
                width = width + 1
            ));
        }
        frame.line(format!("[ {SUBMIT_LABEL} ]"));
        if let Some(err) = self.error() {
            frame.line(format!("! {err}"));
        }
    }

    fn handle_event(&self, props: &FormProps, event: &Event) -> bool {
        if *event != Event::Submit {
            return false;
        }
        match self.submit() {
            Ok(record) => {
                debug!(last_name = %record.last_name, "form submitted");
                (props.on_submit)(record);
            }
            Err(err) => warn!(error = %err, "form submission rejected"),
        }
        true
    }
}
