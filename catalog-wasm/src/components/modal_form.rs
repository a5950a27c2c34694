use catalog_core::{FieldKind, FieldPath, FormRecord, Modal};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub(crate) fn FormInput(
    label: &'static str,
    name: String,
    kind: FieldKind,
    required: bool,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let input_id = name.clone();
    let placeholder = format!("Enter {label}");

    let control = match kind {
        FieldKind::Multiline => view! {
            <textarea
                id=name.clone()
                name=name
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        _ => view! {
            <input
                id=name.clone()
                name=name
                type=kind.input_type()
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <div class="field">
            <label for=input_id>{label}</label>
            {control}
        </div>
    }
}

/// Форма модального окна: по одному контролируемому полю на каждое поле записи.
///
/// Значение поля всегда читается из черновика окна; отклонённый ввод
/// (например, буквы в числовом поле) не меняет черновик и показывается
/// под формой.
#[component]
pub(crate) fn ModalForm<R>(
    title: &'static str,
    submit_label: &'static str,
    modal: RwSignal<Modal<R>>,
    on_commit: Callback<R>,
) -> impl IntoView
where
    R: FormRecord + Send + Sync + 'static,
    R::Field: Send + Sync,
{
    let form_error = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let mut submitted = None;
        modal.update(|modal| submitted = Some(modal.take_submission()));

        match submitted {
            Some(Ok(record)) => {
                form_error.set(None);
                on_commit.run(record);
            }
            Some(Err(err)) => form_error.set(Some(err.to_string())),
            None => {}
        }
    };

    let on_cancel = move |_| {
        form_error.set(None);
        modal.update(|modal| modal.cancel());
    };

    let inputs = R::FIELDS
        .iter()
        .copied()
        .map(|field| {
            let value = Signal::derive(move || modal.with(|modal| modal.value(field).to_string()));
            let on_input = Callback::new(move |raw: String| {
                let mut result = Ok(());
                modal.update(|modal| result = modal.edit(field, &raw));
                match result {
                    Ok(()) => form_error.set(None),
                    Err(err) => form_error.set(Some(err.to_string())),
                }
            });

            view! {
                <FormInput
                    label=field.label()
                    name=field.to_string()
                    kind=field.kind()
                    required=field.required()
                    value=value
                    on_input=on_input
                />
            }
        })
        .collect_view();

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>{title}</h2>
                <form on:submit=on_submit>
                    {inputs}
                    <Show when=move || form_error.get().is_some()>
                        <p class="form-error">{move || form_error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="modal-actions">
                        <button type="button" on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button type="submit">{submit_label}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
