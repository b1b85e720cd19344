//! Search and filter form above the listing.

use dioxus::prelude::*;
use engine::FilterController;
use jobs_core::QueryState;

use crate::RouterNavigation;

/// Filter form. Edits stay in a local draft; Search (or Enter in a text field)
/// commits them, Reset clears everything.
#[component]
pub fn SearchFilters(committed: QueryState) -> Element {
    let nav = use_context::<RouterNavigation>();
    // Seeded once per mount: back/forward updates the listing but leaves the
    // user's draft as it is.
    let mut filters = use_signal(|| FilterController::new(&committed));
    let draft = filters.read().draft().clone();
    let status_value = draft.status.as_str();
    let order_value = draft.order_by.as_str();

    // Clone committed state for each closure that needs it
    let committed_for_search = committed.clone();
    let committed_for_location = committed.clone();
    let committed_for_company = committed.clone();
    let committed_for_submit = committed;

    rsx! {
        div { class: "search-filters",
            div { class: "filter-group",
                input {
                    r#type: "text",
                    class: "search-input",
                    placeholder: "Search jobs...",
                    value: "{draft.search}",
                    oninput: move |e| edit(filters, "search", &e.value()),
                    onkeydown: move |e| {
                        filters.read().key_pressed(&e.key().to_string(), &committed_for_search, &nav);
                    },
                }
            }

            div { class: "filter-group",
                select {
                    class: "filter-select",
                    value: "{status_value}",
                    onchange: move |e| edit(filters, "status", &e.value()),

                    option { value: "", "All Status" }
                    option { value: "scheduled", "Scheduled" }
                    option { value: "active", "Active" }
                    option { value: "expired", "Expired" }
                }
            }

            div { class: "filter-group",
                input {
                    r#type: "text",
                    class: "filter-input",
                    placeholder: "Filter by location",
                    value: "{draft.location}",
                    oninput: move |e| edit(filters, "location", &e.value()),
                    onkeydown: move |e| {
                        filters.read().key_pressed(&e.key().to_string(), &committed_for_location, &nav);
                    },
                }
            }

            div { class: "filter-group",
                input {
                    r#type: "text",
                    class: "filter-input",
                    placeholder: "Filter by company",
                    value: "{draft.company}",
                    oninput: move |e| edit(filters, "company", &e.value()),
                    onkeydown: move |e| {
                        filters.read().key_pressed(&e.key().to_string(), &committed_for_company, &nav);
                    },
                }
            }

            div { class: "filter-group",
                select {
                    class: "filter-select",
                    value: "{order_value}",
                    onchange: move |e| edit(filters, "orderBy", &e.value()),

                    option { value: "posting_date", "Sort by Posting Date" }
                    option { value: "expiration_date", "Sort by Expiration Date" }
                }
            }

            div { class: "filter-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        filters.read().commit(&committed_for_submit, &nav);
                    },
                    "Search"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| {
                        filters.write().reset(&nav);
                    },
                    "Reset"
                }
            }
        }
    }
}

fn edit(mut filters: Signal<FilterController>, name: &str, value: &str) {
    if let Err(err) = filters.write().set_field(name, value) {
        tracing::warn!(%err, "ignored filter edit");
    }
}
