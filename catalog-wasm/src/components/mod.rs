pub(crate) mod card;
pub(crate) mod header;
pub(crate) mod modal_form;
pub(crate) mod post_modal;
pub(crate) mod user_modal;
