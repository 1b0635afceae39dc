//! Partner Selector Component
//!
//! Modal shown when a task is created without a partner in context.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::AsyncCallback;
use crate::models::Partner;

#[component]
pub fn PartnerSelector(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] partners: Signal<Vec<Partner>>,
    /// Task text waiting for a partner
    #[prop(into)] staged_content: Signal<Option<String>>,
    #[prop(into)] creating: Signal<bool>,
    on_select: AsyncCallback<String>,
    on_cancel: Callback<()>,
    /// Runs before navigating to `add_partner_path`
    on_add_partner: Callback<()>,
    #[prop(into)] add_partner_path: String,
) -> impl IntoView {
    let partner_options = move || {
        let partners = partners.get();
        if partners.is_empty() {
            return view! {
                <p class="partner-empty">"You haven't added any partners yet."</p>
            }.into_any();
        }

        view! {
            <ul class="partner-options">
                {partners.into_iter().map(|partner| {
                    let id = partner.id.clone();
                    view! {
                        <li>
                            <button
                                class="partner-option"
                                disabled=move || creating.get()
                                on:click=move |_| spawn_local(on_select.run(id.clone()))
                            >
                                {partner.avatar_url.clone().map(|src| view! {
                                    <img class="partner-avatar" src=src alt="" />
                                })}
                                <span class="partner-name">{partner.display_name().to_string()}</span>
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
        }.into_any()
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal partner-selector" role="dialog" aria-modal="true">
                    <h3>"Who is this task for?"</h3>
                    {move || staged_content.get().map(|content| view! {
                        <p class="staged-content">{content}</p>
                    })}

                    {partner_options}

                    <div class="modal-actions">
                        <a
                            class="add-partner-link"
                            href=add_partner_path.clone()
                            on:click=move |_| on_add_partner.run(())
                        >
                            "Add a partner"
                        </a>
                        <button class="cancel-btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
