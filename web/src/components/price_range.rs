//! Price range slider - two range inputs sharing one track

use flightsearch::SearchForm;
use leptos::prelude::*;

#[derive(Clone, Copy)]
enum Thumb {
    Low,
    High,
}

/// Slider pair for the price window. The label reads "Price Range: $min - $max".
#[component]
pub fn PriceRangeField(form: RwSignal<SearchForm>) -> impl IntoView {
    let (floor, ceiling) = form.with_untracked(|f| (f.config().price_floor, f.config().price_ceiling));
    let range = move || form.with(|f| f.values().price_range);

    let move_thumb = move |thumb: Thumb, raw: String| {
        let Some(value) = parse_price(&raw) else {
            return;
        };
        form.update(|f| {
            let current = f.values().price_range;
            match thumb {
                Thumb::Low => f.set_price_range(value, current.max()),
                Thumb::High => f.set_price_range(current.min(), value),
            }
        });
    };

    view! {
        <div class="field price-range">
            <p class="subtitle">{move || format!("Price Range: {}", range())}</p>
            <input
                type="range"
                name="priceRangeMin"
                min=floor.to_string()
                max=ceiling.to_string()
                prop:value=move || range().min().to_string()
                on:input=move |ev| move_thumb(Thumb::Low, event_target_value(&ev))
            />
            <input
                type="range"
                name="priceRangeMax"
                min=floor.to_string()
                max=ceiling.to_string()
                prop:value=move || range().max().to_string()
                on:input=move |ev| move_thumb(Thumb::High, event_target_value(&ev))
            />
        </div>
    }
}

/// Range inputs report their value as a decimal string.
fn parse_price(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    raw.parse::<u32>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(|v| v.round() as u32)
    })
}
