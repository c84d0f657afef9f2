use chrono::Utc;
use gloo_timers::callback::Interval;
use log::info;
use web_sys::Element;
use yew::prelude::*;

use crate::config::{COUNTDOWN_CONTAINER_ID, COUNTDOWN_LABEL_ID, COUNTDOWN_TICK_MS};
use crate::countdown::{Countdown, CountdownView};
use crate::effects::dom::{by_id, set_style};
use crate::events::EventCatalog;

#[derive(Properties, PartialEq)]
pub struct CountdownPillProps {
    pub countdown: Countdown,
    pub container: Element,
}

#[function_component(CountdownPill)]
pub fn countdown_pill(props: &CountdownPillProps) -> Html {
    let label = use_state(String::new);

    {
        let label = label.clone();
        let countdown = props.countdown.clone();
        let container = props.container.clone();

        use_effect_with_deps(
            move |_| {
                let mut countdown = countdown;
                let mut update = move || match countdown.tick(Utc::now()) {
                    CountdownView::Visible(text) => {
                        set_style(&container, "display", "flex");
                        label.set(text);
                    }
                    CountdownView::Hidden => {
                        set_style(&container, "display", "none");
                        label.set(String::new());
                    }
                };

                // Initial tick, then once a minute
                update();
                let interval = Interval::new(COUNTDOWN_TICK_MS, update);

                move || drop(interval)
            },
            (),
        );
    }

    html! { <>{ (*label).clone() }</> }
}

/// Picks the next event and mounts the live label into the header pill.
/// Does nothing if the pill is not on this page.
pub fn mount_countdown(catalog: &EventCatalog) {
    let (Some(container), Some(label)) = (by_id(COUNTDOWN_CONTAINER_ID), by_id(COUNTDOWN_LABEL_ID))
    else {
        return;
    };

    let Some(countdown) = Countdown::start(catalog, Utc::now()) else {
        info!("No upcoming events, hiding countdown");
        set_style(&container, "display", "none");
        return;
    };

    info!("Counting down to event {}", countdown.target().id);
    label.set_text_content(None);
    yew::Renderer::<CountdownPill>::with_root_and_props(
        label,
        CountdownPillProps {
            countdown,
            container,
        },
    )
    .render();
}
