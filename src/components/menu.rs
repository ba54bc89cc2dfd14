use log::info;
use yew::prelude::*;

use crate::config;
use crate::content::{MenuCatalog, MenuCategory, MenuItem};
use crate::hooks::use_reveal;

#[derive(Properties, PartialEq)]
pub struct MenuCardProps {
    pub item: MenuItem,
    #[prop_or(0)]
    pub delay_ms: u32,
}

#[function_component(MenuCard)]
pub fn menu_card(props: &MenuCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), config::CARD_THRESHOLD, props.delay_ms);
    let favorited = use_state(|| false);

    let toggle_favorite = {
        let favorited = favorited.clone();
        Callback::from(move |_: MouseEvent| {
            favorited.set(!*favorited);
        })
    };

    let heart = if *favorited { "♥" } else { "♡" };
    let item = &props.item;
    let picture = match (&item.image, &item.glyph) {
        (Some(src), _) => html! { <img src={src.clone()} alt={item.title.clone()} /> },
        (None, Some(glyph)) => html! { <div class="menu-glyph">{glyph}</div> },
        (None, None) => html! { <div class="menu-glyph">{"☕"}</div> },
    };

    html! {
        <div ref={node} class={classes!("menu-card", "reveal", revealed.then(|| "revealed"))}>
            <div class="menu-picture">
                {picture}
                if item.popular {
                    <div class="popular-badge">{"Popular"}</div>
                }
                <button
                    class={classes!("favorite-button", (*favorited).then(|| "favorited"))}
                    onclick={toggle_favorite}
                >
                    {heart}
                </button>
                <div class="menu-rating">{format!("★ {}", item.rating)}</div>
            </div>
            <div class="menu-body">
                <div class="menu-meta">
                    <span class="menu-category">{&item.category}</span>
                    <span class="menu-price">{&item.price}</span>
                </div>
                <h3>{&item.title}</h3>
                <p>{&item.description}</p>
                <button class="button-primary full-width">{"Add to Cart"}</button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryTabProps {
    pub category: MenuCategory,
    pub active: bool,
    pub on_select: Callback<MenuCategory>,
}

#[function_component(CategoryTab)]
pub fn category_tab(props: &CategoryTabProps) -> Html {
    let onclick = {
        let on_select = props.on_select.clone();
        let category = props.category;
        Callback::from(move |_: MouseEvent| on_select.emit(category))
    };

    html! {
        <button class={classes!("category-tab", props.active.then(|| "active"))} {onclick}>
            <span>{props.category.icon()}</span>
            <span>{props.category.label()}</span>
        </button>
    }
}

#[function_component(MenuSection)]
pub fn menu_section() -> Html {
    let catalog = use_memo(|_| MenuCatalog::bundled(), ());
    let active = use_state(|| MenuCategory::Coffee);

    let on_select = {
        let active = active.clone();
        Callback::from(move |category: MenuCategory| {
            if *active != category {
                info!("Showing {} menu", category.label());
                active.set(category);
            }
        })
    };

    html! {
        <section id="menu" class="menu-section">
            <style>
                {r#"
                    .menu-section {
                        padding: 5rem 2rem;
                        max-width: 1280px;
                        margin: 0 auto;
                    }
                    .category-tabs {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                        margin-bottom: 3rem;
                    }
                    .category-tab {
                        display: flex;
                        gap: 0.5rem;
                        padding: 0.75rem 1.5rem;
                        border-radius: 9999px;
                        font-weight: 600;
                        border: 1px solid #fde68a;
                        background: rgba(255, 255, 255, 0.7);
                        color: #d97706;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .category-tab.active {
                        background: #d97706;
                        color: white;
                        transform: scale(1.05);
                    }
                    .menu-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                        margin-bottom: 4rem;
                    }
                    .menu-card {
                        background: rgba(255, 255, 255, 0.8);
                        border-radius: 1rem;
                        overflow: hidden;
                        border: 1px solid #fef3c7;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    }
                    .menu-picture {
                        position: relative;
                        height: 12rem;
                        background: linear-gradient(135deg, #fef3c7, #ffedd5);
                        overflow: hidden;
                    }
                    .menu-picture img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .menu-glyph {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        height: 100%;
                        font-size: 4rem;
                        opacity: 0.6;
                    }
                    .popular-badge {
                        position: absolute;
                        top: 0.75rem;
                        left: 0.75rem;
                        background: #ef4444;
                        color: white;
                        padding: 0.25rem 0.5rem;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        font-weight: 600;
                    }
                    .favorite-button {
                        position: absolute;
                        top: 0.75rem;
                        right: 0.75rem;
                        border: none;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.8);
                        padding: 0.4rem 0.6rem;
                        font-size: 1.1rem;
                        color: #4b5563;
                        cursor: pointer;
                    }
                    .favorite-button.favorited {
                        color: #ef4444;
                    }
                    .menu-rating {
                        position: absolute;
                        bottom: 0.75rem;
                        left: 0.75rem;
                        background: rgba(255, 255, 255, 0.9);
                        padding: 0.25rem 0.5rem;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        font-weight: 600;
                    }
                    .menu-body {
                        padding: 1.5rem;
                    }
                    .menu-meta {
                        display: flex;
                        justify-content: space-between;
                        color: #d97706;
                    }
                    .menu-category {
                        font-size: 0.75rem;
                        font-weight: 600;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                    }
                    .menu-price {
                        font-weight: 700;
                    }
                    .happy-hour {
                        background: linear-gradient(90deg, #d97706, #ea580c);
                        color: white;
                        border-radius: 1.5rem;
                        padding: 2rem;
                        text-align: center;
                    }
                    .menu-cta {
                        text-align: center;
                        margin-top: 4rem;
                    }
                "#}
            </style>
            <div class="section-header">
                <h2>{"Menu Spesial Kami"}</h2>
                <p>
                    {"Nikmati koleksi menu premium kami yang dibuat dengan bahan-bahan berkualitas tinggi. "}
                    {"Setiap hidangan disiapkan dengan cinta untuk memberikan pengalaman kuliner terbaik."}
                </p>
            </div>

            <div class="category-tabs">
                {
                    MenuCategory::ALL.iter().map(|category| html! {
                        <CategoryTab
                            key={category.label()}
                            category={*category}
                            active={*active == *category}
                            on_select={on_select.clone()}
                        />
                    }).collect::<Html>()
                }
            </div>

            <div class="menu-grid">
                {
                    catalog.items(*active).enumerate().map(|(index, item)| html! {
                        // Keyed per tab so switching categories replays the entrance.
                        <MenuCard
                            key={format!("{}-{}", active.label(), index)}
                            item={item.clone()}
                            delay_ms={index as u32 * config::MENU_STAGGER_MS}
                        />
                    }).collect::<Html>()
                }
            </div>

            <div class="happy-hour">
                <h3>{"⏰ Happy Hour Special!"}</h3>
                <p>{"Dapatkan diskon 20% untuk semua minuman kopi setiap hari pukul 14:00 - 17:00"}</p>
                <div class="button-row">
                    <a href="#menu" class="button-light">{"Order Now"}</a>
                    <a href="#location" class="button-outline-light">{"Learn More"}</a>
                </div>
            </div>

            <div class="menu-cta">
                <h3>{"Siap Merasakan Pengalaman Kopi Terbaik?"}</h3>
                <p>
                    {"Kunjungi Ditcafe hari ini dan rasakan perbedaan kualitas premium dalam setiap tegukan. "}
                    {"Your perfect coffee moment awaits!"}
                </p>
                <div class="button-row">
                    <a href="#location" class="button-primary">{"Visit Our Cafe"}</a>
                    <a href="#location" class="button-outline">{"See Location"}</a>
                </div>
            </div>
        </section>
    }
}
