use tracing::debug;

use crate::error::{FormError, FormResult};
use crate::fields::{FieldValue, FormRecord};
use crate::form::FormStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Состояние модального окна.
pub enum ModalState {
    /// Окно скрыто, черновика нет.
    Closed,
    /// Окно показано, черновик редактируется.
    Open,
}

#[derive(Debug, Clone)]
/// Модальная форма создания записи.
///
/// Черновик живёт только пока окно открыто: `open` начинает с пустой
/// записи, `cancel` и успешный `submit` его сбрасывают. Неудачная отправка
/// оставляет окно открытым вместе с введёнными значениями.
pub struct Modal<R: FormRecord> {
    state: ModalState,
    form: FormStore<R>,
}

impl<R: FormRecord> Default for Modal<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: FormRecord> Modal<R> {
    /// Закрытое окно.
    pub fn new() -> Self {
        Self {
            state: ModalState::Closed,
            form: FormStore::new(),
        }
    }

    /// Текущее состояние.
    pub fn state(&self) -> ModalState {
        self.state
    }

    /// Открыто ли окно.
    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    /// Открывает окно с пустым черновиком.
    ///
    /// Повторный вызов на открытом окне черновик не трогает.
    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        self.form.reset();
        self.state = ModalState::Open;
        debug!("modal opened");
    }

    /// Форма с текущим черновиком.
    pub fn form(&self) -> &FormStore<R> {
        &self.form
    }

    /// Значение поля для контролируемого ввода.
    pub fn value(&self, field: R::Field) -> FieldValue {
        self.form.value(field)
    }

    /// Изменяет одно поле черновика.
    pub fn edit(&mut self, field: R::Field, raw: &str) -> FormResult<()> {
        self.ensure_open()?;
        self.form.apply(field, raw)
    }

    /// Изменяет поле, заданное путём вида `company.name`.
    pub fn edit_path(&mut self, path: &str, raw: &str) -> FormResult<()> {
        self.ensure_open()?;
        self.form.apply_path(path, raw)
    }

    /// Закрывает окно без отправки; черновик отбрасывается.
    pub fn cancel(&mut self) {
        if !self.is_open() {
            return;
        }
        self.form.reset();
        self.state = ModalState::Closed;
        debug!("modal cancelled");
    }

    /// Проверяет черновик и передаёт его копию в `commit`, затем закрывает окно.
    pub fn submit<F>(&mut self, commit: F) -> FormResult<()>
    where
        F: FnOnce(R),
    {
        let draft = self.take_submission()?;
        commit(draft);
        Ok(())
    }

    /// Как [`Modal::submit`], но возвращает черновик вызывающему.
    ///
    /// Нужен хостам, которые не могут вызвать колбэк, пока держат окно
    /// заимствованным.
    pub fn take_submission(&mut self) -> FormResult<R> {
        self.ensure_open()?;

        if let Err(err) = self.form.validate() {
            debug!(error = %err, "modal submit blocked");
            return Err(err);
        }

        let draft = std::mem::take(&mut self.form).into_draft();
        self.state = ModalState::Closed;
        debug!("modal submitted");
        Ok(draft)
    }

    fn ensure_open(&self) -> FormResult<()> {
        if self.is_open() {
            Ok(())
        } else {
            Err(FormError::ModalClosed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{PostField, UserField};
    use crate::models::{Post, User};

    #[test]
    fn new_modal_is_closed_and_rejects_edits() {
        let mut modal = Modal::<Post>::new();
        assert_eq!(modal.state(), ModalState::Closed);
        assert_eq!(
            modal.edit(PostField::Title, "x"),
            Err(FormError::ModalClosed)
        );
    }

    #[test]
    fn open_starts_from_blank_draft() {
        let mut modal = Modal::<User>::new();
        modal.open();
        assert!(modal.is_open());
        assert_eq!(modal.form().draft(), &User::default());
    }

    #[test]
    fn reopening_keeps_current_draft() {
        let mut modal = Modal::<User>::new();
        modal.open();
        modal.edit(UserField::Name, "Leanne").expect("edit");
        modal.open();
        assert_eq!(modal.form().draft().name, "Leanne");
    }

    #[test]
    fn cancel_discards_draft_without_commit() {
        let mut modal = Modal::<User>::new();
        modal.open();
        modal.edit(UserField::Name, "Leanne").expect("edit");

        modal.cancel();

        assert_eq!(modal.state(), ModalState::Closed);
        modal.open();
        assert_eq!(modal.form().draft().name, "");
    }

    #[test]
    fn submit_delivers_snapshot_once_and_closes() {
        let mut modal = Modal::<Post>::new();
        modal.open();
        modal.edit(PostField::Title, "Hello").expect("edit");
        modal.edit(PostField::Body, "World").expect("edit");

        let mut delivered = Vec::new();
        modal.submit(|post| delivered.push(post)).expect("submit");

        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].title, "Hello");
        assert_eq!(modal.state(), ModalState::Closed);

        modal.open();
        modal.edit(PostField::Title, "Other").expect("edit");
        assert_eq!(delivered[0].title, "Hello");
    }

    #[test]
    fn failed_validation_keeps_modal_open_with_draft() {
        let mut modal = Modal::<Post>::new();
        modal.open();
        modal.edit(PostField::Body, "only body").expect("edit");

        let mut called = false;
        let err = modal
            .submit(|_| called = true)
            .expect_err("empty title must block submit");

        assert!(matches!(err, FormError::Validation { .. }));
        assert!(!called);
        assert!(modal.is_open());
        assert_eq!(modal.form().draft().body, "only body");
    }

    #[test]
    fn submit_on_closed_modal_is_rejected() {
        let mut modal = Modal::<User>::new();
        assert_eq!(modal.take_submission(), Err(FormError::ModalClosed));
    }

    #[test]
    fn edit_path_routes_to_nested_field() {
        let mut modal = Modal::<User>::new();
        modal.open();
        modal.edit_path("address.geo.lng", "81.1496").expect("edit");
        assert_eq!(modal.form().draft().address.geo.lng, "81.1496");
    }
}
