use catalog_core::{Collection, IdPolicy, Modal, Post, User};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::page::{Page, append_error};

/// Состояние сессии: загруженные списки и модальные окна.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AppState {
    pub(crate) page: RwSignal<Page>,
    pub(crate) users: RwSignal<Collection<User>>,
    pub(crate) posts: RwSignal<Collection<Post>>,
    pub(crate) user_modal: RwSignal<Modal<User>>,
    pub(crate) post_modal: RwSignal<Modal<Post>>,
    pub(crate) error: RwSignal<Option<String>>,
    pub(crate) loading: RwSignal<bool>,
}

impl AppState {
    pub(crate) fn new() -> Self {
        Self {
            page: RwSignal::new(Page::default()),
            users: RwSignal::new(Collection::default()),
            posts: RwSignal::new(Collection::default()),
            user_modal: RwSignal::new(Modal::new()),
            post_modal: RwSignal::new(Modal::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }

    pub(crate) fn set_error(&self, message: impl Into<String>) {
        let message = message.into();
        web_sys::console::error_1(&JsValue::from_str(&message));
        self.error
            .update(|current| *current = Some(append_error(current.as_deref(), &message)));
    }

    pub(crate) fn clear_error(&self) {
        self.error.set(None);
    }

    /// Одновременно открыто не больше одного окна.
    pub(crate) fn open_modal(&self, page: Page) {
        match page {
            Page::Users => {
                self.post_modal.update(|modal| modal.cancel());
                self.user_modal.update(|modal| modal.open());
            }
            Page::Posts => {
                self.user_modal.update(|modal| modal.cancel());
                self.post_modal.update(|modal| modal.open());
            }
        }
    }

    pub(crate) fn add_user(&self, user: User) {
        self.users.update(|users| {
            users.append(user, IdPolicy::Renumber);
        });
    }

    pub(crate) fn add_post(&self, post: Post) {
        self.posts.update(|posts| {
            posts.append(post, IdPolicy::Renumber);
        });
    }
}
