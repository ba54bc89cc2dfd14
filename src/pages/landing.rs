use yew::prelude::*;

use crate::components::about::About;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::location::Location;
use crate::components::menu::MenuSection;

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <Hero />
            <About />
            <MenuSection />
            <Location />
            <Footer />
        </div>
    }
}
