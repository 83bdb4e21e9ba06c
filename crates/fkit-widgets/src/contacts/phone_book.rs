#![forbid(unsafe_code)]

//! The phone book: entry form plus sorted table.
//!
//! `PhoneBook` is the single owner of the contact list. The form reports
//! submitted records through its `on_submit` prop; the phone book answers by
//! replacing the list with [`insert`]`(current, record)` and the table
//! renders whatever list is current.

use fkit_core::component::Component;
use fkit_core::event::Event;
use fkit_core::frame::Frame;
use fkit_runtime::reactive::{Observable, Subscription};
use tracing::info;

use super::form::{FormError, FormProps, PhoneBookForm};
use super::list::{ContactList, insert};
use super::record::ContactRecord;
use super::table::InformationTable;

/// Form and table sharing one contact list.
#[derive(Debug)]
pub struct PhoneBook {
    contacts: Observable<ContactList>,
    form: PhoneBookForm,
    form_props: FormProps,
}

impl Default for PhoneBook {
    fn default() -> Self {
        Self::new(PhoneBookForm::new())
    }
}

impl PhoneBook {
    /// A phone book with an empty list, driven by `form`.
    #[must_use]
    pub fn new(form: PhoneBookForm) -> Self {
        let contacts = Observable::new(ContactList::new());
        let sink = contacts.clone();
        let form_props = FormProps::new(move |record| add_to(&sink, record));
        Self {
            contacts,
            form,
            form_props,
        }
    }

    /// Insert a record directly, bypassing the form.
    pub fn add(&self, record: ContactRecord) {
        add_to(&self.contacts, record);
    }

    /// Validate the form and add its record.
    pub fn submit(&self) -> Result<ContactRecord, FormError> {
        let record = self.form.submit()?;
        self.add(record.clone());
        Ok(record)
    }

    /// Current list.
    #[must_use]
    pub fn contacts(&self) -> ContactList {
        self.contacts.get()
    }

    /// The entry form.
    #[must_use]
    pub fn form(&self) -> &PhoneBookForm {
        &self.form
    }

    /// Run `callback` with every new list.
    pub fn subscribe(&self, callback: impl Fn(&ContactList) + 'static) -> Subscription {
        self.contacts.subscribe(callback)
    }
}

fn add_to(contacts: &Observable<ContactList>, record: ContactRecord) {
    contacts.replace_with(|current| insert(current, record));
    info!(
        contacts = contacts.with(ContactList::len),
        "phone book entry added"
    );
}

impl Component for PhoneBook {
    type Props = ();

    fn render(&self, _props: &(), frame: &mut Frame) {
        self.form.render(&self.form_props, frame);
        frame.line("");
        InformationTable.render(&self.contacts.get(), frame);
    }

    fn handle_event(&self, _props: &(), event: &Event) -> bool {
        self.form.handle_event(&self.form_props, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::record::Field;
    use std::cell::Cell;
    use std::rc::Rc;

    fn last_names(book: &PhoneBook) -> Vec<String> {
        book.contacts()
            .iter()
            .map(|r| r.last_name.clone())
            .collect()
    }

    #[test]
    fn starts_empty() {
        let book = PhoneBook::default();
        assert!(book.contacts().is_empty());
    }

    #[test]
    fn submit_event_adds_form_values() {
        let book = PhoneBook::default();
        assert!(book.handle_event(&(), &Event::Submit));
        assert_eq!(
            book.contacts().as_slice(),
            [ContactRecord::new("Coder", "Byte", "8885559999")]
        );
    }

    #[test]
    fn submissions_stay_sorted() {
        let book = PhoneBook::default();
        for last in ["Turing", "Hopper", "Lovelace"] {
            book.form().set_field(Field::LastName, last);
            book.submit().expect("valid form");
        }
        assert_eq!(last_names(&book), ["Hopper", "Lovelace", "Turing"]);
    }

    #[test]
    fn invalid_submission_leaves_list_unchanged() {
        let book = PhoneBook::default();
        book.form().set_field(Field::FirstName, "");
        assert_eq!(
            book.submit(),
            Err(FormError::MissingField(Field::FirstName))
        );
        assert!(book.handle_event(&(), &Event::Submit));
        assert!(book.contacts().is_empty());
    }

    #[test]
    fn each_insertion_publishes_a_new_list() {
        let book = PhoneBook::default();
        let before = book.contacts();
        let notified = Rc::new(Cell::new(0u32));
        let notified_clone = Rc::clone(&notified);
        let _sub = book.subscribe(move |_| notified_clone.set(notified_clone.get() + 1));

        book.add(ContactRecord::new("Ada", "Lovelace", "1"));
        let after = book.contacts();

        assert_eq!(notified.get(), 1);
        assert!(before.is_empty());
        assert!(!after.ptr_eq(&before));
    }

    #[test]
    fn render_shows_form_then_table() {
        let book = PhoneBook::default();
        book.add(ContactRecord::new("Ada", "Lovelace", "1"));
        let mut frame = Frame::new();
        book.render(&(), &mut frame);

        let lines = frame.lines();
        assert_eq!(lines[0], "First name:  [Coder]");
        assert!(lines.iter().any(|l| l == "[ Add User ]"));
        assert_eq!(lines.last().map(String::as_str), Some("| Ada        | Lovelace  | 1     |"));
    }
}
