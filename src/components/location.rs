use yew::prelude::*;

use crate::config;
use crate::content::{directions_url, tel_link, ADDRESS_LINES, CAFE_NAME, EMAILS, OPENING_HOURS, PHONE};

#[function_component(Location)]
pub fn location() -> Html {
    let directions = directions_url();

    html! {
        <section id="location" class="location">
            <style>
                {r#"
                    .location {
                        padding: 5rem 2rem;
                        max-width: 1280px;
                        margin: 0 auto;
                    }
                    .location-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 3rem;
                        align-items: start;
                    }
                    .map-frame {
                        position: relative;
                        border-radius: 1.5rem;
                        overflow: hidden;
                        background: white;
                        aspect-ratio: 16 / 9;
                    }
                    .map-frame iframe {
                        width: 100%;
                        height: 100%;
                        border: 0;
                    }
                    .map-frame .map-directions {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                    }
                    .contact-stack {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .contact-card {
                        background: rgba(255, 255, 255, 0.8);
                        border-radius: 1rem;
                        padding: 1.5rem 2rem;
                        border: 1px solid #e2e8f0;
                        color: #334155;
                    }
                    .contact-card h3, .contact-card h4 {
                        color: #0f172a;
                        margin-top: 0;
                    }
                    .contact-pair {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 1.5rem;
                    }
                    .hours-row {
                        display: flex;
                        justify-content: space-between;
                        margin: 0.5rem 0;
                    }
                    .hours-row.highlight {
                        color: #d97706;
                        font-weight: 600;
                    }
                    .location-note {
                        margin-top: 4rem;
                        background: linear-gradient(90deg, #d97706, #ea580c);
                        color: white;
                        border-radius: 1.5rem;
                        padding: 2rem;
                        text-align: center;
                    }
                "#}
            </style>
            <div class="section-header">
                <h2>{"Our Location"}</h2>
                <p>
                    {"Temukan kami di lokasi yang strategis dan mudah dijangkau. "}
                    {"Nikmati suasana yang nyaman dan pelayanan terbaik."}
                </p>
            </div>

            <div class="location-grid">
                <div class="map-frame">
                    <iframe
                        src={config::MAP_EMBED_URL}
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                        allowfullscreen=true
                        title={format!("{} Location", CAFE_NAME)}
                    ></iframe>
                    <a href={directions.clone()} target="_blank" rel="noopener noreferrer" class="button-primary map-directions">
                        {"🧭"}
                    </a>
                </div>

                <div class="contact-stack">
                    <div class="contact-card">
                        <h3>{"📍 Alamat Lengkap"}</h3>
                        <p>
                            { for ADDRESS_LINES.iter().map(|line| html! { <>{*line}<br/></> }) }
                        </p>
                    </div>

                    <div class="contact-pair">
                        <div class="contact-card">
                            <h4>{"📞 Telepon"}</h4>
                            <p>{PHONE}</p>
                        </div>
                        <div class="contact-card">
                            <h4>{"✉️ Email"}</h4>
                            { for EMAILS.iter().map(|email| html! {
                                <p><a href={format!("mailto:{}", email)}>{*email}</a></p>
                            }) }
                        </div>
                    </div>

                    <div class="contact-card">
                        <h3>{"🕒 Jam Operasional"}</h3>
                        { for OPENING_HOURS.iter().map(|slot| html! {
                            <div class={classes!("hours-row", slot.highlight.then(|| "highlight"))}>
                                <span>{slot.days}</span>
                                <span>{slot.hours}</span>
                            </div>
                        }) }
                    </div>

                    <div class="button-row">
                        <a href={directions} target="_blank" rel="noopener noreferrer" class="button-primary">
                            {"🧭 Get Directions"}
                        </a>
                        <a href={tel_link(PHONE)} class="button-outline">{"📞 Call Now"}</a>
                    </div>
                </div>
            </div>

            <div class="location-note">
                <h3>{"Mudah Ditemukan & Dijangkau"}</h3>
                <p>
                    {"Berlokasi strategis di pusat kota dengan akses transportasi umum yang mudah. "}
                    {"Tersedia parkir luas untuk kendaraan pribadi dan area yang ramah untuk pejalan kaki."}
                </p>
            </div>
        </section>
    }
}
