use serde::{Deserialize, Deserializer, Serialize};

/// Владелец, от имени которого форма создаёт посты.
pub const DEFAULT_OWNER_ID: i64 = 1;

/// Запись коллекции с целочисленным идентификатором.
pub trait Record: Clone {
    /// Идентификатор записи.
    fn id(&self) -> i64;
    /// Возвращает копию записи с другим идентификатором.
    fn with_id(self, id: i64) -> Self;
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Пост из каталога.
pub struct Post {
    /// Идентификатор поста.
    pub id: i64,
    /// Заголовок.
    pub title: String,
    /// Текст поста.
    pub body: String,
    /// Идентификатор автора.
    #[serde(rename = "userId", alias = "ownerId")]
    pub owner_id: i64,
}

impl Post {
    /// Пустой черновик поста: `id = 0`, автор по умолчанию.
    pub fn blank() -> Self {
        Self {
            owner_id: DEFAULT_OWNER_ID,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Пользователь из каталога.
pub struct User {
    /// Идентификатор пользователя.
    pub id: i64,
    /// Полное имя.
    pub name: String,
    /// Логин.
    pub username: String,
    /// Email.
    pub email: String,
    /// Адрес.
    pub address: Address,
    /// Телефон в числовом виде (пунктуация теряется).
    #[serde(deserialize_with = "lenient_number")]
    pub phone: i64,
    /// Сайт.
    pub website: String,
    /// Компания.
    pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Почтовый адрес пользователя.
pub struct Address {
    /// Улица.
    pub street: String,
    /// Квартира/офис.
    pub suite: String,
    /// Город.
    pub city: String,
    /// Почтовый индекс.
    #[serde(deserialize_with = "lenient_number")]
    pub zipcode: i64,
    /// Координаты.
    pub geo: GeoCoord,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Координаты хранятся текстом, чтобы не терять исходный формат.
pub struct GeoCoord {
    /// Широта.
    pub lat: String,
    /// Долгота.
    pub lng: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Компания пользователя.
pub struct Company {
    /// Название.
    pub name: String,
    /// Слоган.
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    /// Род деятельности.
    pub bs: String,
}

impl Record for Post {
    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }
}

impl Record for User {
    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }
}

/// Оставляет только ASCII-цифры; без цифр — 0.
pub(crate) fn digits_to_number(raw: &str) -> Option<i64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse().ok()
}

fn lenient_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(i64),
        Text(String),
    }

    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(value) => Ok(value),
        NumberOrText::Text(raw) => digits_to_number(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("number out of range: '{raw}'"))),
    }
}
