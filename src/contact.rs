use core::fmt;

/// A stored contact: a name and a phone number.
///
/// The name is the record's identity and never changes once the record is
/// in a table; the number is replaced when the same name is inserted again.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactRecord {
    name: String,
    number: String,
}

impl ContactRecord {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub(crate) fn set_number(&mut self, number: String) {
        self.number = number;
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.number)
    }
}
