//! Ядро каталога пользователей и постов.
//!
//! - модели записей (`User`, `Post`) в формате внешнего REST-источника;
//! - типизированные пути к полям и форма-черновик с копированием при записи;
//! - модальное окно создания записи;
//! - коллекция страницы и проекция записей в карточки.
//!
//! Не зависит от способа отрисовки: браузерный и терминальный хосты
//! вызывают одни и те же операции.

mod card;
mod collection;
mod error;
mod fields;
mod form;
mod modal;
mod models;

pub use card::{Card, CardSection, CardView};
pub use collection::{Collection, IdPolicy};
pub use error::{FormError, FormResult};
pub use fields::{
    AddressField, CompanyField, FieldKind, FieldPath, FieldValue, FormRecord, GeoField, PostField,
    UserField,
};
pub use form::FormStore;
pub use modal::{Modal, ModalState};
pub use models::{Address, Company, DEFAULT_OWNER_ID, GeoCoord, Post, Record, User};
