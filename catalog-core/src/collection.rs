use tracing::debug;

use crate::card::{Card, CardView};
use crate::models::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Как назначать идентификатор добавляемой записи.
pub enum IdPolicy {
    /// `id = len + 1` на момент добавления.
    Renumber,
    /// Оставить идентификатор черновика.
    Keep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Список записей страницы на время сессии.
pub struct Collection<R: Record> {
    items: Vec<R>,
}

impl<R: Record> Default for Collection<R> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<R: Record> Collection<R> {
    /// Коллекция из однократно загруженных записей.
    pub fn from_fetched(items: Vec<R>) -> Self {
        Self { items }
    }

    /// Добавляет созданную локально запись в конец списка.
    pub fn append(&mut self, draft: R, policy: IdPolicy) -> &R {
        let record = match policy {
            IdPolicy::Renumber => draft.with_id(self.items.len() as i64 + 1),
            IdPolicy::Keep => draft,
        };
        debug!(id = record.id(), total = self.items.len() + 1, "record appended");

        self.items.push(record);
        &self.items[self.items.len() - 1]
    }

    /// Заменяет список загруженными записями, сохраняя добавленные локально.
    ///
    /// Локальные записи идут после загруженных и перенумеровываются
    /// по правилу `len + 1`.
    pub fn merge_fetched(&mut self, fetched: Vec<R>) {
        let local = std::mem::replace(&mut self.items, fetched);
        if !local.is_empty() {
            debug!(local = local.len(), "keeping records added before load");
        }
        for record in local {
            self.append(record, IdPolicy::Renumber);
        }
    }

    /// Записи в порядке отображения.
    pub fn items(&self) -> &[R] {
        &self.items
    }

    /// Количество записей.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Пуст ли список.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<R: Record + CardView> Collection<R> {
    /// Карточка на каждую запись.
    pub fn cards(&self) -> Vec<Card> {
        self.items.iter().map(CardView::card).collect()
    }
}
