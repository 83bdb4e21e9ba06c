#![forbid(unsafe_code)]

//! The contact record and its form fields.

use std::str::FromStr;

use super::form::FormError;

/// One phone-book entry.
///
/// Records carry no identity: two records with equal fields are still two
/// rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactRecord {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl ContactRecord {
    /// Build a record from its three fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
        }
    }

    /// Value of one field.
    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Phone => &self.phone,
        }
    }

    pub(crate) fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Phone => &mut self.phone,
        }
    }
}

/// A phone-book form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Phone,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 3] = [Field::FirstName, Field::LastName, Field::Phone];

    /// Machine name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Phone => "phone",
        }
    }

    /// Human label used in forms, table headers, and errors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Phone => "Phone",
        }
    }
}

impl FromStr for Field {
    type Err = FormError;

    /// Accepts snake_case, camelCase, and the legacy `user*` input names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first_name" | "firstName" | "userFirstname" => Ok(Self::FirstName),
            "last_name" | "lastName" | "userLastname" => Ok(Self::LastName),
            "phone" | "userPhone" => Ok(Self::Phone),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
