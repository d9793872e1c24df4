use yew::prelude::*;

use crate::controller::elements::classes;

const STATS: &[(u32, &str, &str)] = &[
    (250, "+", "Clients served"),
    (12, "", "Years in business"),
    (98, "%", "Issues fixed on first call"),
    (24, "/7", "Support coverage"),
];

/// Numbers start at zero and count up the first time the band scrolls
/// into view.
#[function_component(Stats)]
pub fn stats() -> Html {
    html! {
        <div class={classes!(classes::STATS)}>
            <div class="container stats-grid">
                { for STATS.iter().map(|&(count, suffix, label)| html! {
                    <div class="stat-item animate-on-scroll">
                        <span class={classes::STAT_NUMBER} data-count={count.to_string()}>{"0"}</span>
                        <span class="stat-item-suffix">{ suffix }</span>
                        <p class="stat-item-label">{ label }</p>
                    </div>
                }) }
            </div>
        </div>
    }
}
