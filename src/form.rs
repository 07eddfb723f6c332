//! Form Schema
//!
//! Fields and their rules are declared up front; values are checked against
//! the schema before anything is submitted.

use std::collections::BTreeMap;

use crate::models::CreateTag;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
}

impl FieldKind {
    /// `type` attribute of the rendered input
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Shown next to the field when `required` fails
    pub message: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct FormSchema {
    pub fields: &'static [FieldSchema],
}

pub type FormValues = BTreeMap<&'static str, String>;

/// Field name -> message
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, &'static str>);

impl FormErrors {
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }
}

impl FormSchema {
    /// Values for declared fields only; undeclared entries are dropped.
    /// A required field fails only on the empty string.
    pub fn validate(&self, values: &FormValues) -> Result<FormValues, FormErrors> {
        let mut valid = FormValues::new();
        let mut errors = BTreeMap::new();

        for field in self.fields {
            let value = values.get(field.name).cloned().unwrap_or_default();
            if field.required && value.is_empty() {
                errors.insert(field.name, field.message);
            } else {
                valid.insert(field.name, value);
            }
        }

        if errors.is_empty() {
            Ok(valid)
        } else {
            Err(FormErrors(errors))
        }
    }
}

pub const NAME_FIELD: &str = "name";
pub const REQUIRED_MESSAGE: &str = "This field is required";

pub const TAG_FORM: FormSchema = FormSchema {
    fields: &[FieldSchema {
        name: NAME_FIELD,
        kind: FieldKind::Text,
        required: true,
        message: REQUIRED_MESSAGE,
    }],
};

impl CreateTag {
    /// Validate raw form values into a create request
    pub fn from_form(values: &FormValues) -> Result<Self, FormErrors> {
        let mut valid = TAG_FORM.validate(values)?;
        Ok(Self {
            name: valid.remove(NAME_FIELD).unwrap_or_default(),
        })
    }
}
