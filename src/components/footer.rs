use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::content::{ADDRESS_LINES, CAFE_NAME, EMAILS, PHONE, SOCIAL_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #78350f;
                        color: white;
                    }
                    .footer-content {
                        max-width: 1152px;
                        margin: 0 auto;
                        padding: 3rem 1rem;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 2rem;
                    }
                    .site-footer a {
                        color: rgba(255, 255, 255, 0.8);
                        text-decoration: none;
                    }
                    .site-footer a:hover {
                        color: #fcd34d;
                    }
                    .footer-muted {
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 0.875rem;
                        line-height: 1.6;
                    }
                    .social-links {
                        display: flex;
                        gap: 0.75rem;
                    }
                    .social-links a {
                        padding: 0.5rem;
                        background: rgba(255, 255, 255, 0.1);
                        border-radius: 0.5rem;
                    }
                    .footer-links {
                        list-style: none;
                        padding: 0;
                        font-size: 0.875rem;
                    }
                    .footer-links li {
                        margin: 0.5rem 0;
                    }
                    .footer-bottom {
                        border-top: 1px solid rgba(255, 255, 255, 0.2);
                        margin-top: 2rem;
                        padding-top: 1.5rem;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.6);
                    }
                "#}
            </style>
            <div class="footer-content">
                <div class="footer-grid">
                    <div>
                        <h3>{format!("☕ {}", CAFE_NAME)}</h3>
                        <p class="footer-muted">
                            {"Tempat dimana cerita-cerita indah dimulai dengan secangkir kopi terbaik."}
                        </p>
                        <div class="social-links">
                            { for SOCIAL_LINKS.iter().map(|(name, href)| html! {
                                <a href={*href} target="_blank" rel="noopener noreferrer">{*name}</a>
                            }) }
                        </div>
                    </div>

                    <div>
                        <h4>{"Menu"}</h4>
                        <ul class="footer-links">
                            <li><a href="#about">{"Tentang Kami"}</a></li>
                            <li><a href="#menu">{"Menu"}</a></li>
                            <li><a href="#location">{"Lokasi"}</a></li>
                        </ul>
                    </div>

                    <div>
                        <h4>{"Kontak"}</h4>
                        <p class="footer-muted">{ADDRESS_LINES.join(" ")}</p>
                        <p class="footer-muted">{PHONE}</p>
                        <p class="footer-muted">{EMAILS[0]}</p>
                    </div>
                </div>

                <div class="footer-bottom">
                    <span>{format!("© {} {}. Made with ♥ in Indonesia", current_year, CAFE_NAME)}</span>
                </div>
            </div>
        </footer>
    }
}
