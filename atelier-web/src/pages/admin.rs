use crate::admin_ops::{self, EntityList, SubmitError};
use crate::api::PortfolioClient;
use crate::editor::{EditorForm, Tab};
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Feedback banner above the form.
#[derive(Clone, PartialEq)]
struct Notice {
    message: String,
    is_error: bool,
}

impl Notice {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    fn err(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

fn confirm_in_browser(message: &str) -> bool {
    web_sys::window()
        .map(|window| window.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let tab = use_state(|| Tab::Projects);
    // Mirror of the active tab that async completions check before
    // applying results, so a slow response for the previous tab is
    // discarded instead of overwriting the current one.
    let live_tab = use_mut_ref(|| Tab::Projects);
    let list = use_state(|| EntityList::empty(Tab::Projects));
    let form = use_state(|| EditorForm::create(Tab::Projects));
    let notice = use_state(|| None::<Notice>);
    let busy = use_state(|| false);

    {
        let live_tab = live_tab.clone();
        let list = list.clone();
        let form = form.clone();
        let notice = notice.clone();
        use_effect_with(*tab, move |active| {
            let active = *active;
            *live_tab.borrow_mut() = active;
            form.set(EditorForm::create(active));
            notice.set(None);
            list.set(EntityList::empty(active));

            let live_tab = live_tab.clone();
            let list = list.clone();
            let notice = notice.clone();
            spawn_local(async move {
                let client = PortfolioClient::shared();
                let outcome = admin_ops::fetch_list(&client, active).await;
                let current = *live_tab.borrow();
                match admin_ops::apply_if_current(active, current, outcome) {
                    Some(Ok(fresh)) => list.set(fresh),
                    Some(Err(_)) => notice.set(Some(Notice::err("Could not load the list."))),
                    None => {}
                }
            });
            || ()
        });
    }

    let on_field_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                next.change(&input.name(), input.value());
                form.set(next);
            }
        })
    };

    let on_area_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                let mut next = (*form).clone();
                next.change(&area.name(), area.value());
                form.set(next);
            }
        })
    };

    let on_submit = {
        let live_tab = live_tab.clone();
        let list = list.clone();
        let form = form.clone();
        let notice = notice.clone();
        let busy = busy.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy {
                return;
            }
            busy.set(true);

            let snapshot = (*form).clone();
            let active = snapshot.tab();
            let was_editing = snapshot.is_editing();
            let live_tab = live_tab.clone();
            let list = list.clone();
            let form = form.clone();
            let notice = notice.clone();
            let busy = busy.clone();
            spawn_local(async move {
                let client = PortfolioClient::shared();
                let outcome = admin_ops::submit(&client, &snapshot).await;
                let current = *live_tab.borrow();
                match admin_ops::apply_if_current(active, current, outcome) {
                    Some(Ok(fresh)) => {
                        list.set(fresh);
                        form.set(EditorForm::create(active));
                        notice.set(Some(Notice::ok(if was_editing {
                            "Saved."
                        } else {
                            "Created."
                        })));
                    }
                    Some(Err(SubmitError::Invalid(reason))) => {
                        notice.set(Some(Notice::err(reason.to_string())));
                    }
                    Some(Err(SubmitError::Api(_))) => {
                        notice.set(Some(Notice::err(
                            "The request failed. Check the data or your login status.",
                        )));
                    }
                    None => {}
                }
                busy.set(false);
            });
        })
    };

    let on_cancel = {
        let form = form.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(form.cancel());
            notice.set(None);
        })
    };

    let begin_edit = {
        let form = form.clone();
        let notice = notice.clone();
        Callback::from(move |next: EditorForm| {
            form.set(next);
            notice.set(None);
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };

    let on_delete = {
        let live_tab = live_tab.clone();
        let list = list.clone();
        let notice = notice.clone();
        let busy = busy.clone();
        Callback::from(move |id: String| {
            if *busy {
                return;
            }
            let active = *live_tab.borrow();
            busy.set(true);

            let live_tab = live_tab.clone();
            let list = list.clone();
            let notice = notice.clone();
            let busy = busy.clone();
            spawn_local(async move {
                let client = PortfolioClient::shared();
                let outcome =
                    admin_ops::delete_entity(&client, active, &id, confirm_in_browser).await;
                let current = *live_tab.borrow();
                match admin_ops::apply_if_current(active, current, outcome) {
                    Some(Ok(Some(fresh))) => {
                        list.set(fresh);
                        notice.set(Some(Notice::ok("Deleted.")));
                    }
                    Some(Ok(None)) => {}
                    Some(Err(_)) => notice.set(Some(Notice::err("Delete failed."))),
                    None => {}
                }
                busy.set(false);
            });
        })
    };

    let tab_bar = html! {
        <div class="tabs tabs-boxed mb-6 w-fit">
            { for Tab::iter().map(|candidate| {
                let tab = tab.clone();
                let active = *tab == candidate;
                let onclick = Callback::from(move |_: MouseEvent| tab.set(candidate));
                html! {
                    <button
                        class={classes!("tab", active.then_some("tab-active"))}
                        {onclick}
                    >
                        { candidate.label() }
                    </button>
                }
            })}
        </div>
    };

    let draft = form.draft();
    let form_fields = match *tab {
        Tab::Projects => html! {
            <>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Title"}</span></label>
                    <input
                        class="input input-bordered"
                        type="text"
                        name="title"
                        value={draft.field("title").to_string()}
                        oninput={on_field_input.clone()}
                    />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Description"}</span></label>
                    <textarea
                        class="textarea textarea-bordered"
                        rows="3"
                        name="description"
                        value={draft.field("description").to_string()}
                        oninput={on_area_input.clone()}
                    />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Image URL"}</span></label>
                    <input
                        class="input input-bordered"
                        type="text"
                        name="imageUrl"
                        value={draft.field("imageUrl").to_string()}
                        oninput={on_field_input.clone()}
                    />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Link (optional)"}</span></label>
                    <input
                        class="input input-bordered"
                        type="text"
                        name="link"
                        value={draft.field("link").to_string()}
                        oninput={on_field_input.clone()}
                    />
                </div>
            </>
        },
        Tab::Blog => html! {
            <>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Title"}</span></label>
                    <input
                        class="input input-bordered"
                        type="text"
                        name="title"
                        value={draft.field("title").to_string()}
                        oninput={on_field_input.clone()}
                    />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Author"}</span></label>
                    <input
                        class="input input-bordered"
                        type="text"
                        name="author"
                        value={draft.field("author").to_string()}
                        oninput={on_field_input.clone()}
                    />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Content"}</span></label>
                    <textarea
                        class="textarea textarea-bordered"
                        rows="8"
                        name="content"
                        value={draft.field("content").to_string()}
                        oninput={on_area_input.clone()}
                    />
                </div>
            </>
        },
    };

    let entity_rows = match &*list {
        EntityList::Projects(projects) => projects
            .iter()
            .map(|project| {
                let edit = {
                    let begin_edit = begin_edit.clone();
                    let project = project.clone();
                    Callback::from(move |_: MouseEvent| {
                        begin_edit.emit(EditorForm::edit_project(&project));
                    })
                };
                let delete = {
                    let on_delete = on_delete.clone();
                    let id = project.id.clone();
                    Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                };
                html! {
                    <li key={project.id.clone()} class="flex items-center justify-between bg-base-200 rounded-lg p-4">
                        <div>
                            <p class="font-semibold">{ &project.title }</p>
                            <p class="text-sm text-base-content/60 line-clamp-1">{ &project.description }</p>
                        </div>
                        <div class="flex gap-2">
                            <button class="btn btn-sm btn-outline" onclick={edit}>{"Edit"}</button>
                            <button class="btn btn-sm btn-error btn-outline" onclick={delete} disabled={*busy}>{"Delete"}</button>
                        </div>
                    </li>
                }
            })
            .collect::<Html>(),
        EntityList::Posts(posts) => posts
            .iter()
            .map(|post| {
                let edit = {
                    let begin_edit = begin_edit.clone();
                    let post = post.clone();
                    Callback::from(move |_: MouseEvent| {
                        begin_edit.emit(EditorForm::edit_post(&post));
                    })
                };
                let delete = {
                    let on_delete = on_delete.clone();
                    let id = post.id.clone();
                    Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                };
                html! {
                    <li key={post.id.clone()} class="flex items-center justify-between bg-base-200 rounded-lg p-4">
                        <div>
                            <p class="font-semibold">{ &post.title }</p>
                            <p class="text-sm text-base-content/60">
                                { format!("By {} · {}", post.author, post.created_at.format("%Y-%m-%d")) }
                            </p>
                        </div>
                        <div class="flex gap-2">
                            <button class="btn btn-sm btn-outline" onclick={edit}>{"Edit"}</button>
                            <button class="btn btn-sm btn-error btn-outline" onclick={delete} disabled={*busy}>{"Delete"}</button>
                        </div>
                    </li>
                }
            })
            .collect::<Html>(),
    };

    let form_title = match (form.is_editing(), *tab) {
        (false, Tab::Projects) => "New project",
        (true, Tab::Projects) => "Edit project",
        (false, Tab::Blog) => "New post",
        (true, Tab::Blog) => "Edit post",
    };

    html! {
        <div class="container mx-auto px-4 py-8">
            <h1 class="text-3xl font-bold mb-6">{"Admin Console"}</h1>
            { tab_bar }

            if let Some(current) = &*notice {
                <div class={classes!("alert", "mb-6", if current.is_error { "alert-error" } else { "alert-success" })}>
                    <span>{current.message.clone()}</span>
                </div>
            }

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <form onsubmit={on_submit} class="bg-base-100 p-6 rounded-lg shadow-md space-y-4 h-fit">
                    <h2 class="text-xl font-semibold">{ form_title }</h2>
                    { form_fields }
                    <div class="flex gap-2 pt-2">
                        <button class="btn btn-primary" type="submit" disabled={*busy}>
                            { if form.is_editing() { "Save changes" } else { "Create" } }
                        </button>
                        if form.is_editing() {
                            <button class="btn btn-ghost" type="button" onclick={on_cancel}>
                                {"Cancel"}
                            </button>
                        }
                    </div>
                </form>

                <div>
                    <h2 class="text-xl font-semibold mb-4">
                        { format!("Existing {}", tab.label().to_lowercase()) }
                    </h2>
                    {
                        if list.is_empty() {
                            html! {
                                <p class="text-base-content/60 italic">
                                    {"Nothing here yet. Create one on the left."}
                                </p>
                            }
                        } else {
                            html! { <ul class="space-y-3">{ entity_rows }</ul> }
                        }
                    }
                </div>
            </div>
        </div>
    }
}
