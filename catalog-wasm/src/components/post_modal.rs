use catalog_core::{Modal, Post};
use leptos::prelude::*;

use crate::components::modal_form::ModalForm;

#[component]
pub(crate) fn PostModal(modal: RwSignal<Modal<Post>>, on_commit: Callback<Post>) -> impl IntoView {
    view! {
        <ModalForm
            title="Add New Post"
            submit_label="Submit"
            modal=modal
            on_commit=on_commit
        />
    }
}
