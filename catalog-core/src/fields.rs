//! Типизированные пути к полям записей.
//!
//! Вместо строк вида `address.geo.lat` каждая форма описывается закрытым
//! вложенным перечислением: один уровень перечисления на один уровень
//! вложенности записи. Каждый уровень умеет прочитать своё поле и собрать
//! новую копию своего контейнера с изменённым полем; соседние ветки
//! переносятся без изменений.

use core::fmt;
use core::str::FromStr;

use crate::error::{FormError, FormResult};
use crate::models::{Address, Company, GeoCoord, Post, User, digits_to_number};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Тип поля ввода; определяет приведение введённого текста.
pub enum FieldKind {
    /// Обычный текст.
    Text,
    /// Email (текст + проверка формата при отправке).
    Email,
    /// Целое число.
    Number,
    /// Телефон: цифры без пунктуации.
    Tel,
    /// Многострочный текст.
    Multiline,
}

impl FieldKind {
    /// Значение атрибута `type` для `<input>`.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Text | Self::Multiline => "text",
            Self::Email => "email",
            Self::Number => "number",
            Self::Tel => "tel",
        }
    }

    /// Поле хранит число, а не текст.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Tel)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Текущее значение поля черновика.
pub enum FieldValue {
    /// Текстовое значение.
    Text(String),
    /// Числовое значение.
    Number(i64),
}

impl FieldValue {
    /// Пустое ли значение для проверки обязательных полей.
    ///
    /// Как у атрибута `required`: строка из одних пробелов не пустая.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Number(_) => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

/// Путь к полю на одном уровне вложенности записи.
pub trait FieldPath: Copy + Eq + fmt::Debug + fmt::Display {
    /// Контейнер, поля которого адресует путь.
    type Record: Clone;

    /// Сегменты пути от этого уровня до листа.
    fn segments(self) -> Vec<&'static str>;

    /// Разбирает сегменты; `None`, если путь не существует в форме.
    fn from_segments(segments: &[&str]) -> Option<Self>;

    /// Тип поля ввода.
    fn kind(self) -> FieldKind;

    /// Подпись поля в форме.
    fn label(self) -> &'static str;

    /// Обязательно ли поле при отправке.
    fn required(self) -> bool {
        false
    }

    /// Читает значение поля.
    fn get(self, record: &Self::Record) -> FieldValue;

    /// Собирает новую копию контейнера с приведённым значением поля.
    fn set(self, record: &Self::Record, raw: &str) -> FormResult<Self::Record>;
}

/// Запись, которую можно редактировать формой.
pub trait FormRecord: Clone + fmt::Debug {
    /// Пути ко всем полям записи.
    type Field: FieldPath<Record = Self> + FromStr<Err = FormError> + 'static;

    /// Поля формы в порядке отображения.
    const FIELDS: &'static [Self::Field];

    /// Пустой черновик, с которым открывается форма.
    fn blank() -> Self;
}

macro_rules! dotted_path_text {
    ($($path:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $path {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.segments().join("."))
                }
            }

            impl FromStr for $path {
                type Err = FormError;

                fn from_str(path: &str) -> Result<Self, Self::Err> {
                    let segments: Vec<&str> = path.split('.').collect();
                    <$path as FieldPath>::from_segments(&segments)
                        .ok_or_else(|| FormError::InvalidPath(path.to_string()))
                }
            }
        )+
    };
}

dotted_path_text!(UserField, AddressField, GeoField, CompanyField, PostField);

fn text(raw: &str) -> String {
    raw.to_string()
}

fn number<F: FieldPath>(field: F, raw: &str) -> FormResult<i64> {
    let parsed = match field.kind() {
        FieldKind::Tel => digits_to_number(raw),
        _ => {
            let raw = raw.trim();
            if raw.is_empty() {
                Some(0)
            } else {
                raw.parse::<i64>().ok()
            }
        }
    };

    parsed.ok_or_else(|| FormError::NotANumber {
        field: field.to_string(),
        raw: raw.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Поля пользователя.
pub enum UserField {
    /// `id`
    Id,
    /// `name`
    Name,
    /// `username`
    Username,
    /// `email`
    Email,
    /// `phone`
    Phone,
    /// `website`
    Website,
    /// `address.*`
    Address(AddressField),
    /// `company.*`
    Company(CompanyField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Поля адреса.
pub enum AddressField {
    /// `street`
    Street,
    /// `suite`
    Suite,
    /// `city`
    City,
    /// `zipcode`
    Zipcode,
    /// `geo.*`
    Geo(GeoField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Поля координат.
pub enum GeoField {
    /// `lat`
    Lat,
    /// `lng`
    Lng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Поля компании.
pub enum CompanyField {
    /// `name`
    Name,
    /// `catchPhrase`
    CatchPhrase,
    /// `bs`
    Bs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Поля поста, доступные в форме.
pub enum PostField {
    /// `title`
    Title,
    /// `body`
    Body,
}

impl FieldPath for UserField {
    type Record = User;

    fn segments(self) -> Vec<&'static str> {
        match self {
            Self::Id => vec!["id"],
            Self::Name => vec!["name"],
            Self::Username => vec!["username"],
            Self::Email => vec!["email"],
            Self::Phone => vec!["phone"],
            Self::Website => vec!["website"],
            Self::Address(field) => [vec!["address"], field.segments()].concat(),
            Self::Company(field) => [vec!["company"], field.segments()].concat(),
        }
    }

    fn from_segments(segments: &[&str]) -> Option<Self> {
        match segments {
            ["id"] => Some(Self::Id),
            ["name"] => Some(Self::Name),
            ["username"] => Some(Self::Username),
            ["email"] => Some(Self::Email),
            ["phone"] => Some(Self::Phone),
            ["website"] => Some(Self::Website),
            ["address", rest @ ..] => AddressField::from_segments(rest).map(Self::Address),
            ["company", rest @ ..] => CompanyField::from_segments(rest).map(Self::Company),
            _ => None,
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::Id => FieldKind::Number,
            Self::Email => FieldKind::Email,
            Self::Phone => FieldKind::Tel,
            Self::Name | Self::Username | Self::Website => FieldKind::Text,
            Self::Address(field) => field.kind(),
            Self::Company(field) => field.kind(),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Website => "Website",
            Self::Address(field) => field.label(),
            Self::Company(field) => field.label(),
        }
    }

    fn required(self) -> bool {
        match self {
            Self::Address(field) => field.required(),
            Self::Company(field) => field.required(),
            _ => false,
        }
    }

    fn get(self, user: &User) -> FieldValue {
        match self {
            Self::Id => FieldValue::Number(user.id),
            Self::Name => FieldValue::Text(user.name.clone()),
            Self::Username => FieldValue::Text(user.username.clone()),
            Self::Email => FieldValue::Text(user.email.clone()),
            Self::Phone => FieldValue::Number(user.phone),
            Self::Website => FieldValue::Text(user.website.clone()),
            Self::Address(field) => field.get(&user.address),
            Self::Company(field) => field.get(&user.company),
        }
    }

    fn set(self, user: &User, raw: &str) -> FormResult<User> {
        let mut next = user.clone();
        match self {
            Self::Id => next.id = number(self, raw)?,
            Self::Name => next.name = text(raw),
            Self::Username => next.username = text(raw),
            Self::Email => next.email = text(raw),
            Self::Phone => next.phone = number(self, raw)?,
            Self::Website => next.website = text(raw),
            Self::Address(field) => {
                next.address = field
                    .set(&user.address, raw)
                    .map_err(|err| err.nested_in("address"))?;
            }
            Self::Company(field) => {
                next.company = field
                    .set(&user.company, raw)
                    .map_err(|err| err.nested_in("company"))?;
            }
        }
        Ok(next)
    }
}

impl FieldPath for AddressField {
    type Record = Address;

    fn segments(self) -> Vec<&'static str> {
        match self {
            Self::Street => vec!["street"],
            Self::Suite => vec!["suite"],
            Self::City => vec!["city"],
            Self::Zipcode => vec!["zipcode"],
            Self::Geo(field) => [vec!["geo"], field.segments()].concat(),
        }
    }

    fn from_segments(segments: &[&str]) -> Option<Self> {
        match segments {
            ["street"] => Some(Self::Street),
            ["suite"] => Some(Self::Suite),
            ["city"] => Some(Self::City),
            ["zipcode"] => Some(Self::Zipcode),
            ["geo", rest @ ..] => GeoField::from_segments(rest).map(Self::Geo),
            _ => None,
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::Zipcode => FieldKind::Number,
            Self::Street | Self::Suite | Self::City => FieldKind::Text,
            Self::Geo(field) => field.kind(),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Street => "Street",
            Self::Suite => "Suite",
            Self::City => "City",
            Self::Zipcode => "Zipcode",
            Self::Geo(field) => field.label(),
        }
    }

    fn get(self, address: &Address) -> FieldValue {
        match self {
            Self::Street => FieldValue::Text(address.street.clone()),
            Self::Suite => FieldValue::Text(address.suite.clone()),
            Self::City => FieldValue::Text(address.city.clone()),
            Self::Zipcode => FieldValue::Number(address.zipcode),
            Self::Geo(field) => field.get(&address.geo),
        }
    }

    fn set(self, address: &Address, raw: &str) -> FormResult<Address> {
        let mut next = address.clone();
        match self {
            Self::Street => next.street = text(raw),
            Self::Suite => next.suite = text(raw),
            Self::City => next.city = text(raw),
            Self::Zipcode => next.zipcode = number(self, raw)?,
            Self::Geo(field) => {
                next.geo = field
                    .set(&address.geo, raw)
                    .map_err(|err| err.nested_in("geo"))?;
            }
        }
        Ok(next)
    }
}

impl FieldPath for GeoField {
    type Record = GeoCoord;

    fn segments(self) -> Vec<&'static str> {
        match self {
            Self::Lat => vec!["lat"],
            Self::Lng => vec!["lng"],
        }
    }

    fn from_segments(segments: &[&str]) -> Option<Self> {
        match segments {
            ["lat"] => Some(Self::Lat),
            ["lng"] => Some(Self::Lng),
            _ => None,
        }
    }

    fn kind(self) -> FieldKind {
        FieldKind::Text
    }

    fn label(self) -> &'static str {
        match self {
            Self::Lat => "Latitude",
            Self::Lng => "Longitude",
        }
    }

    fn get(self, geo: &GeoCoord) -> FieldValue {
        match self {
            Self::Lat => FieldValue::Text(geo.lat.clone()),
            Self::Lng => FieldValue::Text(geo.lng.clone()),
        }
    }

    fn set(self, geo: &GeoCoord, raw: &str) -> FormResult<GeoCoord> {
        let mut next = geo.clone();
        match self {
            Self::Lat => next.lat = text(raw),
            Self::Lng => next.lng = text(raw),
        }
        Ok(next)
    }
}

impl FieldPath for CompanyField {
    type Record = Company;

    fn segments(self) -> Vec<&'static str> {
        match self {
            Self::Name => vec!["name"],
            Self::CatchPhrase => vec!["catchPhrase"],
            Self::Bs => vec!["bs"],
        }
    }

    fn from_segments(segments: &[&str]) -> Option<Self> {
        match segments {
            ["name"] => Some(Self::Name),
            ["catchPhrase"] => Some(Self::CatchPhrase),
            ["bs"] => Some(Self::Bs),
            _ => None,
        }
    }

    fn kind(self) -> FieldKind {
        FieldKind::Text
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Company Name",
            Self::CatchPhrase => "Catch Phrase",
            Self::Bs => "Business (BS)",
        }
    }

    fn get(self, company: &Company) -> FieldValue {
        match self {
            Self::Name => FieldValue::Text(company.name.clone()),
            Self::CatchPhrase => FieldValue::Text(company.catch_phrase.clone()),
            Self::Bs => FieldValue::Text(company.bs.clone()),
        }
    }

    fn set(self, company: &Company, raw: &str) -> FormResult<Company> {
        let mut next = company.clone();
        match self {
            Self::Name => next.name = text(raw),
            Self::CatchPhrase => next.catch_phrase = text(raw),
            Self::Bs => next.bs = text(raw),
        }
        Ok(next)
    }
}

impl FieldPath for PostField {
    type Record = Post;

    fn segments(self) -> Vec<&'static str> {
        match self {
            Self::Title => vec!["title"],
            Self::Body => vec!["body"],
        }
    }

    fn from_segments(segments: &[&str]) -> Option<Self> {
        match segments {
            ["title"] => Some(Self::Title),
            ["body"] => Some(Self::Body),
            _ => None,
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::Title => FieldKind::Text,
            Self::Body => FieldKind::Multiline,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Body => "Body",
        }
    }

    fn required(self) -> bool {
        true
    }

    fn get(self, post: &Post) -> FieldValue {
        match self {
            Self::Title => FieldValue::Text(post.title.clone()),
            Self::Body => FieldValue::Text(post.body.clone()),
        }
    }

    fn set(self, post: &Post, raw: &str) -> FormResult<Post> {
        let mut next = post.clone();
        match self {
            Self::Title => next.title = text(raw),
            Self::Body => next.body = text(raw),
        }
        Ok(next)
    }
}

impl FormRecord for User {
    type Field = UserField;

    const FIELDS: &'static [UserField] = &[
        UserField::Id,
        UserField::Name,
        UserField::Username,
        UserField::Email,
        UserField::Address(AddressField::Street),
        UserField::Address(AddressField::Suite),
        UserField::Address(AddressField::City),
        UserField::Address(AddressField::Zipcode),
        UserField::Address(AddressField::Geo(GeoField::Lat)),
        UserField::Address(AddressField::Geo(GeoField::Lng)),
        UserField::Phone,
        UserField::Website,
        UserField::Company(CompanyField::Name),
        UserField::Company(CompanyField::CatchPhrase),
        UserField::Company(CompanyField::Bs),
    ];

    fn blank() -> Self {
        Self::default()
    }
}

impl FormRecord for Post {
    type Field = PostField;

    const FIELDS: &'static [PostField] = &[PostField::Title, PostField::Body];

    fn blank() -> Self {
        Post::blank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAT: UserField = UserField::Address(AddressField::Geo(GeoField::Lat));

    #[test]
    fn every_user_field_round_trips_through_its_dotted_path() {
        for field in User::FIELDS {
            let parsed: UserField = field.to_string().parse().expect("path should parse");
            assert_eq!(parsed, *field);
        }
    }

    #[test]
    fn nested_path_renders_with_dots() {
        assert_eq!(LAT.to_string(), "address.geo.lat");
        assert_eq!(
            UserField::Company(CompanyField::CatchPhrase).to_string(),
            "company.catchPhrase"
        );
    }

    #[test]
    fn unknown_or_partial_paths_are_rejected() {
        for path in ["", "address", "address.geo", "address.geo.alt", "lat", "id.x", "company.name.x"] {
            let err = path.parse::<UserField>().expect_err("path must be rejected");
            assert_eq!(err, FormError::InvalidPath(path.to_string()));
        }
    }

    #[test]
    fn set_nested_leaf_keeps_siblings_on_every_level() {
        let mut user = User::blank();
        user.address.street = "Kulas Light".to_string();
        user.address.geo.lng = "81.1496".to_string();
        user.company.name = "Romaguera-Crona".to_string();

        let next = LAT.set(&user, "40.7").expect("set should succeed");

        assert_eq!(next.address.geo.lat, "40.7");
        assert_eq!(next.address.geo.lng, "81.1496");
        assert_eq!(next.address.street, "Kulas Light");
        assert_eq!(next.company, user.company);
        assert_eq!(user.address.geo.lat, "", "previous draft must stay untouched");
    }

    #[test]
    fn number_field_parses_integer() {
        let user = UserField::Address(AddressField::Zipcode)
            .set(&User::blank(), "42")
            .expect("set should succeed");
        assert_eq!(user.address.zipcode, 42);
        assert_eq!(
            UserField::Address(AddressField::Zipcode).get(&user),
            FieldValue::Number(42)
        );
    }

    #[test]
    fn number_field_treats_empty_input_as_zero() {
        let mut user = User::blank();
        user.id = 9;
        let next = UserField::Id.set(&user, "  ").expect("set should succeed");
        assert_eq!(next.id, 0);
    }

    #[test]
    fn number_field_rejects_text_with_full_path() {
        let err = UserField::Address(AddressField::Zipcode)
            .set(&User::blank(), "12a")
            .expect_err("must be rejected");
        assert_eq!(
            err,
            FormError::NotANumber {
                field: "address.zipcode".to_string(),
                raw: "12a".to_string(),
            }
        );
    }

    #[test]
    fn tel_field_drops_punctuation() {
        let user = UserField::Phone
            .set(&User::blank(), "555-01-99")
            .expect("set should succeed");
        assert_eq!(user.phone, 5_550_199);
    }

    #[test]
    fn geo_fields_stay_text() {
        assert_eq!(LAT.kind(), FieldKind::Text);
        assert!(!LAT.kind().is_numeric());
        assert_eq!(UserField::Phone.kind().input_type(), "tel");
    }

    #[test]
    fn labels_follow_form_order() {
        let labels: Vec<&str> = User::FIELDS.iter().map(|field| field.label()).collect();
        assert_eq!(labels.first(), Some(&"ID"));
        assert_eq!(labels.last(), Some(&"Business (BS)"));
        assert_eq!(labels.len(), 15);
    }

    #[test]
    fn post_fields_are_required() {
        assert!(Post::FIELDS.iter().all(|field| field.required()));
        assert!(User::FIELDS.iter().all(|field| !field.required()));
    }
}
