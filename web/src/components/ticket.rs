//! "Your Ticket" summary card

use flightsearch::{Field, SearchForm};
use leptos::prelude::*;

/// Lists the current form values; price is the upper end of the slider.
#[component]
pub fn TicketCard(form: RwSignal<SearchForm>) -> impl IntoView {
    let value = move |field: Field| form.with(|f| f.values().get(field).to_string());
    let price = move || format!("${}", form.with(|f| f.values().price_range.max()));

    view! {
        <div class="ticket-card">
            <h2 class="ticket-title">"Your Ticket"</h2>
            <ul class="ticket-lines">
                {Field::ALL
                    .into_iter()
                    .map(|field| {
                        view! {
                            <li>
                                <strong>{field.label()} ":"</strong>
                                " "
                                {move || value(field)}
                            </li>
                        }
                    })
                    .collect_view()}
                <li>
                    <strong>"Price:"</strong>
                    " "
                    {price}
                </li>
            </ul>
        </div>
    }
}
