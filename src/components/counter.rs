use log::error;
use yew::prelude::*;

use crate::animation::spec::AnimationSpec;
use crate::config;
use crate::content::Stat;
use crate::hooks::{use_count_up, use_visible_once};

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub stat: &'static Stat,
}

/// Number that counts up from zero the first time it scrolls into view.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    match props.stat.spec() {
        Ok(spec) => html! { <CountUpText {spec} /> },
        Err(e) => {
            error!("Counter for {} left static: {}", props.stat.label, e);
            html! {
                <div class="counter-value">{ props.stat.static_text() }</div>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct CountUpTextProps {
    spec: AnimationSpec,
}

#[function_component(CountUpText)]
fn count_up_text(props: &CountUpTextProps) -> Html {
    let node = use_node_ref();
    let visible = use_visible_once(node.clone(), config::COUNTER_THRESHOLD);
    let text = use_count_up(props.spec.clone(), visible);

    html! {
        <div ref={node} class="counter-value">{ text }</div>
    }
}
