use yew::prelude::*;
use yew_hooks::prelude::*;
use log::info;
use web_sys::MouseEvent;

mod config;
mod content;
mod hooks;
mod animation {
    pub mod cancel;
    pub mod clock;
    pub mod count_up;
    pub mod error;
    pub mod scheduler;
    pub mod spec;
    pub mod visibility;
    #[cfg(test)]
    pub mod testing;
}
mod components {
    pub mod about;
    pub mod counter;
    pub mod footer;
    pub mod hero;
    pub mod location;
    pub mod menu;
}
mod pages {
    pub mod landing;
}

use content::{ADDRESS_LINES, CAFE_NAME, NAV_ITEMS, NAV_TAGLINE, OPENING_HOURS, PHONE};
use pages::landing::Landing;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::NAV_SCROLL_THRESHOLD;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Links are in-page anchors, so the default jump is kept.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let burger_icon = if *menu_open { "✕" } else { "☰" };
    let (brand_head, brand_tail) = CAFE_NAME.split_at(3);

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo">
                    <span class="nav-logo-icon">{"☕"}</span>
                    <span>
                        <span class="nav-logo-name">{brand_head}<span class="accent">{brand_tail}</span></span>
                        <span class="nav-logo-tagline">{NAV_TAGLINE}</span>
                    </span>
                </a>

                <div class="nav-links">
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <a href={item.href} class="nav-link">{item.name}</a>
                    }) }
                </div>

                <a href="#menu" class="button-primary nav-cta">{"Order Now"}</a>

                <button class="burger-menu" onclick={toggle_menu}>
                    {burger_icon}
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "mobile-menu-open"))}>
                { for NAV_ITEMS.iter().map(|item| html! {
                    <a href={item.href} class="mobile-link" onclick={close_menu.clone()}>{item.name}</a>
                }) }
                <div class="mobile-contact">
                    <div>{format!("📍 {}", ADDRESS_LINES.join(" "))}</div>
                    <div>{format!("📞 {}", PHONE)}</div>
                    { for OPENING_HOURS.iter().filter(|slot| !slot.highlight).map(|slot| html! {
                        <div>{format!("🕒 {} {}", slot.days, slot.hours)}</div>
                    }) }
                </div>
                <a href="#menu" class="button-primary full-width" onclick={close_menu.clone()}>{"Order Now"}</a>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {} landing page", CAFE_NAME);
    yew::Renderer::<App>::new().render();
}
