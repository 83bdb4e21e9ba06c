#![forbid(unsafe_code)]

//! Phone book: contact records, the sorted list, the entry form, and the
//! table that displays it.

pub mod form;
pub mod list;
pub mod phone_book;
pub mod record;
pub mod table;

pub use form::{FormError, FormProps, PhoneBookForm, SubmitHandler};
pub use list::{ContactList, insert, is_sorted_by_last_name};
pub use phone_book::PhoneBook;
pub use record::{ContactRecord, Field};
pub use table::InformationTable;
