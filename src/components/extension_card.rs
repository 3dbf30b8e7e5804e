//! Extension Card Component
//!
//! One list entry: logo, name, description, remove button and
//! active toggle. Controls dispatch actions keyed by the extension id.

use leptos::prelude::*;

use crate::models::Extension;
use crate::store::{dispatch, use_app_store, Action};

#[component]
pub fn ExtensionCard(extension: Extension) -> impl IntoView {
    let store = use_app_store();

    let id = extension.id;
    let toggle_id = id.to_string();
    let logo_alt = format!("{} Logo", extension.name);

    view! {
        <li class="extensions__item">
            <div class="card">
                <div class="card__container">
                    <div class="card__content">
                        <img class="card__logo" src=extension.logo alt=logo_alt />
                        <div class="card__info">
                            <h2 class="card__title">{extension.name}</h2>
                            <p class="card__description">{extension.description}</p>
                        </div>
                    </div>
                    <div class="card__footer">
                        <button
                            class="card__button"
                            on:click=move |_| dispatch(&store, Action::Remove(id))
                        >
                            "Remove"
                        </button>
                        <div class="card__toggle toggle">
                            <input
                                class="toggle__input"
                                type="checkbox"
                                id=toggle_id.clone()
                                prop:checked=extension.is_active
                                on:change=move |_| dispatch(&store, Action::Toggle(id))
                            />
                            <label class="toggle__label" for=toggle_id></label>
                        </div>
                    </div>
                </div>
            </div>
        </li>
    }
}
