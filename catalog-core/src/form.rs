use tracing::debug;
use validator::ValidateEmail;

use crate::error::{FormError, FormResult};
use crate::fields::{FieldKind, FieldPath, FieldValue, FormRecord};

#[derive(Debug, Clone)]
/// Черновик одной записи, редактируемый по одному полю.
///
/// Каждое изменение собирает новую копию черновика через
/// [`FieldPath::set`]; при ошибке хранимый черновик не меняется.
pub struct FormStore<R: FormRecord> {
    draft: R,
}

impl<R: FormRecord> Default for FormStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: FormRecord> FormStore<R> {
    /// Создаёт хранилище с пустым черновиком.
    pub fn new() -> Self {
        Self { draft: R::blank() }
    }

    /// Заменяет черновик пустой записью.
    pub fn reset(&mut self) {
        self.draft = R::blank();
    }

    /// Применяет введённое значение к одному полю.
    pub fn apply(&mut self, field: R::Field, raw: &str) -> FormResult<()> {
        match field.set(&self.draft, raw) {
            Ok(next) => {
                self.draft = next;
                Ok(())
            }
            Err(err) => {
                debug!(field = %field, error = %err, "field edit rejected");
                Err(err)
            }
        }
    }

    /// Разбирает путь вида `address.geo.lat` и применяет значение.
    pub fn apply_path(&mut self, path: &str, raw: &str) -> FormResult<()> {
        let field = path.parse::<R::Field>()?;
        self.apply(field, raw)
    }

    /// Значение поля для отображения в контролируемом `<input>`.
    pub fn value(&self, field: R::Field) -> FieldValue {
        field.get(&self.draft)
    }

    /// Текущий черновик.
    pub fn draft(&self) -> &R {
        &self.draft
    }

    /// Забирает черновик.
    pub fn into_draft(self) -> R {
        self.draft
    }

    /// Проверяет обязательные поля и формат email.
    pub fn validate(&self) -> FormResult<()> {
        for field in R::FIELDS {
            let value = field.get(&self.draft);

            if field.required() && value.is_blank() {
                return Err(FormError::Validation {
                    field: field.to_string(),
                    message: "must not be empty",
                });
            }

            if field.kind() == FieldKind::Email && !is_empty_or_email(&value) {
                return Err(FormError::Validation {
                    field: field.to_string(),
                    message: "must be a valid email",
                });
            }
        }
        Ok(())
    }
}

fn is_empty_or_email(value: &FieldValue) -> bool {
    let email = value.to_string().trim().to_string();
    email.is_empty() || email.validate_email()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{AddressField, CompanyField, GeoField, PostField, UserField};
    use crate::models::{Post, User};

    const LAT: UserField = UserField::Address(AddressField::Geo(GeoField::Lat));

    #[test]
    fn apply_updates_only_the_addressed_field() {
        let mut store = FormStore::<User>::new();
        store.apply_path("address.street", "Kulas Light").expect("apply");
        store.apply_path("company.name", "Romaguera-Crona").expect("apply");
        let before = store.draft().clone();

        store.apply(LAT, "40.7").expect("apply");

        let after = store.draft();
        assert_eq!(after.address.geo.lat, "40.7");
        assert_eq!(after.address.geo.lng, "");
        assert_eq!(after.address.street, before.address.street);
        assert_eq!(after.company, before.company);
        assert_eq!(after.name, before.name);
    }

    #[test]
    fn apply_is_idempotent() {
        let mut once = FormStore::<User>::new();
        once.apply(UserField::Company(CompanyField::Bs), "e-markets").expect("apply");

        let mut twice = FormStore::<User>::new();
        twice.apply(UserField::Company(CompanyField::Bs), "e-markets").expect("apply");
        twice.apply(UserField::Company(CompanyField::Bs), "e-markets").expect("apply");

        assert_eq!(once.draft(), twice.draft());
    }

    #[test]
    fn apply_coerces_numeric_input() {
        let mut store = FormStore::<User>::new();
        store.apply(UserField::Id, "42").expect("apply");
        assert_eq!(store.draft().id, 42);
        assert_eq!(store.value(UserField::Id), FieldValue::Number(42));
    }

    #[test]
    fn failed_apply_keeps_previous_draft() {
        let mut store = FormStore::<User>::new();
        store.apply(UserField::Address(AddressField::Zipcode), "92998").expect("apply");

        let err = store
            .apply(UserField::Address(AddressField::Zipcode), "92998-x")
            .expect_err("must be rejected");

        assert!(matches!(err, FormError::NotANumber { .. }));
        assert_eq!(store.draft().address.zipcode, 92998);
    }

    #[test]
    fn apply_path_rejects_unknown_key_without_touching_draft() {
        let mut store = FormStore::<User>::new();
        store.apply_path("name", "Leanne").expect("apply");

        let err = store
            .apply_path("address.geo.alt", "10")
            .expect_err("must be rejected");

        assert_eq!(err, FormError::InvalidPath("address.geo.alt".to_string()));
        assert_eq!(store.draft().name, "Leanne");
    }

    #[test]
    fn reset_returns_blank_draft() {
        let mut store = FormStore::<Post>::new();
        store.apply(PostField::Title, "Hello").expect("apply");
        store.reset();
        assert_eq!(store.draft(), &Post::blank());
    }

    #[test]
    fn validate_rejects_blank_required_field() {
        let mut store = FormStore::<Post>::new();
        store.apply(PostField::Body, "body").expect("apply");

        let err = store.validate().expect_err("title is required");
        assert_eq!(err.field(), Some("title"));
    }

    #[test]
    fn validate_accepts_whitespace_only_required_field() {
        let mut store = FormStore::<Post>::new();
        store.apply(PostField::Title, "   ").expect("apply");
        store.apply(PostField::Body, "body").expect("apply");
        assert!(store.validate().is_ok());
    }

    #[test]
    fn validate_accepts_filled_post() {
        let mut store = FormStore::<Post>::new();
        store.apply(PostField::Title, "Hello").expect("apply");
        store.apply(PostField::Body, "World").expect("apply");
        assert!(store.validate().is_ok());
    }

    #[test]
    fn validate_checks_email_format_only_when_present() {
        let mut store = FormStore::<User>::new();
        assert!(store.validate().is_ok());

        store.apply(UserField::Email, "not-an-email").expect("apply");
        let err = store.validate().expect_err("email must be rejected");
        assert_eq!(err.field(), Some("email"));

        store.apply(UserField::Email, "Sincere@april.biz").expect("apply");
        assert!(store.validate().is_ok());
    }
}
