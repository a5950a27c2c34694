use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Ошибки редактирования и отправки формы.
pub enum FormError {
    /// Путь к полю не соответствует форме записи.
    #[error("invalid field path: '{0}'")]
    InvalidPath(String),

    /// В числовое поле введено не число.
    #[error("field '{field}' expects a number, got '{raw}'")]
    NotANumber {
        /// Путь к полю.
        field: String,
        /// Введённое значение.
        raw: String,
    },

    /// Черновик не прошёл проверку перед отправкой.
    #[error("validation failed for '{field}': {message}")]
    Validation {
        /// Путь к полю.
        field: String,
        /// Причина отказа.
        message: &'static str,
    },

    /// Операция над закрытым модальным окном.
    #[error("modal is closed")]
    ModalClosed,
}

impl FormError {
    /// Дописывает родительский сегмент к пути поля в ошибке.
    pub(crate) fn nested_in(self, parent: &str) -> Self {
        match self {
            Self::InvalidPath(path) => Self::InvalidPath(format!("{parent}.{path}")),
            Self::NotANumber { field, raw } => Self::NotANumber {
                field: format!("{parent}.{field}"),
                raw,
            },
            Self::Validation { field, message } => Self::Validation {
                field: format!("{parent}.{field}"),
                message,
            },
            Self::ModalClosed => Self::ModalClosed,
        }
    }

    /// Путь к полю, к которому относится ошибка.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::NotANumber { field, .. } | Self::Validation { field, .. } => Some(field),
            Self::InvalidPath(_) | Self::ModalClosed => None,
        }
    }
}

/// Результат операций над формой.
pub type FormResult<T> = Result<T, FormError>;
