//! Validated account payloads.
//!
//! [`AccountRegister`] and [`AccountUpdate`] can only be obtained through
//! [`AccountBuilder::build`], [`AccountRegister::new`]/[`AccountUpdate::new`]
//! or deserialization, and all of them run the same checks. An instance
//! therefore always has a non-blank `name` and an `age`.

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{ValidationError, ValidationErrors};

const NAME_REQUIRED: &str = "Name is required.";
const AGE_REQUIRED: &str = "Age is required.";

/// Account fields exactly as sent by a client.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountForm {
    pub name: Option<String>,
    pub age: Option<i32>,
}

impl AccountForm {
    /// Check required fields, yielding them on success.
    fn into_fields(self) -> Result<(String, i32), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = self.name.filter(|name| !name.trim().is_empty());
        if name.is_none() {
            errors.add(
                "name",
                ValidationError::new("required")
                    .with_message(NAME_REQUIRED.into()),
            );
        }
        if self.age.is_none() {
            errors.add(
                "age",
                ValidationError::new("required")
                    .with_message(AGE_REQUIRED.into()),
            );
        }

        match (name, self.age) {
            (Some(name), Some(age)) => Ok((name, age)),
            _ => Err(errors),
        }
    }
}

/// Payload creating a new account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "AccountForm")]
pub struct AccountRegister {
    /// Display name, never blank.
    #[schema(example = "jojiapp")]
    name: String,
    #[schema(example = 26)]
    age: i32,
}

impl AccountRegister {
    pub fn new(
        name: impl Into<String>,
        age: Option<i32>,
    ) -> Result<Self, ValidationErrors> {
        Self::builder().name(name).maybe_age(age).build()
    }

    pub fn builder() -> AccountBuilder<Self> {
        AccountBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}

impl TryFrom<AccountForm> for AccountRegister {
    type Error = ValidationErrors;

    fn try_from(form: AccountForm) -> Result<Self, Self::Error> {
        let (name, age) = form.into_fields()?;
        Ok(Self { name, age })
    }
}

/// Payload replacing every field of an existing account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "AccountForm")]
pub struct AccountUpdate {
    #[schema(example = "joji")]
    name: String,
    #[schema(example = 25)]
    age: i32,
}

impl AccountUpdate {
    pub fn new(
        name: impl Into<String>,
        age: Option<i32>,
    ) -> Result<Self, ValidationErrors> {
        Self::builder().name(name).maybe_age(age).build()
    }

    pub fn builder() -> AccountBuilder<Self> {
        AccountBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}

impl TryFrom<AccountForm> for AccountUpdate {
    type Error = ValidationErrors;

    fn try_from(form: AccountForm) -> Result<Self, Self::Error> {
        let (name, age) = form.into_fields()?;
        Ok(Self { name, age })
    }
}

/// Fluent builder for [`AccountRegister`] and [`AccountUpdate`].
#[derive(Debug, Clone)]
pub struct AccountBuilder<T> {
    form: AccountForm,
    target: PhantomData<T>,
}

impl<T> AccountBuilder<T>
where
    T: TryFrom<AccountForm, Error = ValidationErrors>,
{
    fn new() -> Self {
        Self {
            form: AccountForm::default(),
            target: PhantomData,
        }
    }

    /// Update `name` field on [`AccountBuilder`].
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.form.name = Some(name.into());
        self
    }

    /// Update `age` field on [`AccountBuilder`].
    pub fn age(self, age: i32) -> Self {
        self.maybe_age(Some(age))
    }

    fn maybe_age(mut self, age: Option<i32>) -> Self {
        self.form.age = age;
        self
    }

    /// Validate collected fields.
    pub fn build(self) -> Result<T, ValidationErrors> {
        T::try_from(self.form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_register() {
        let account = AccountRegister::builder()
            .name("jojiapp")
            .age(26)
            .build()
            .unwrap();

        assert_eq!(account.name(), "jojiapp");
        assert_eq!(account.age(), 26);
    }

    #[test]
    fn test_blank_name() {
        for name in ["", "   ", "\t\n"] {
            let errors = AccountRegister::new(name, Some(26)).unwrap_err();
            let fields = errors.field_errors();
            assert!(fields.contains_key("name"));
            assert!(!fields.contains_key("age"));

            assert!(AccountUpdate::new(name, Some(26)).is_err());
        }
    }

    #[test]
    fn test_missing_fields() {
        let errors = AccountUpdate::new("joji", None).unwrap_err();
        assert!(errors.field_errors().contains_key("age"));

        let errors = AccountUpdate::builder().build().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("age"));
    }

    #[test]
    fn test_deserialize_validates() {
        let account: AccountUpdate =
            serde_json::from_str(r#"{"name":"joji","age":25}"#).unwrap();
        assert_eq!(account, AccountUpdate::new("joji", Some(25)).unwrap());

        for body in [
            r#"{"name":"joji"}"#,
            r#"{"name":" ","age":25}"#,
            r#"{"name":null,"age":25}"#,
        ] {
            assert!(serde_json::from_str::<AccountRegister>(body).is_err());
        }
    }

    #[test]
    fn test_serialize() {
        let account = AccountRegister::new("jojiapp", Some(26)).unwrap();
        assert_eq!(
            serde_json::to_value(&account).unwrap(),
            serde_json::json!({ "name": "jojiapp", "age": 26 })
        );
    }
}
