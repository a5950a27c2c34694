use catalog_core::{Modal, User};
use leptos::prelude::*;

use crate::components::modal_form::ModalForm;

#[component]
pub(crate) fn UserModal(modal: RwSignal<Modal<User>>, on_commit: Callback<User>) -> impl IntoView {
    view! {
        <ModalForm
            title="Add New User"
            submit_label="Add User"
            modal=modal
            on_commit=on_commit
        />
    }
}
