use dioxus::prelude::*;

use ui::{AuthProvider, Footer};
use views::{AddRecipe, Header, Home, Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/add-recipe")]
        AddRecipe {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Header and footer around every page.
#[component]
fn Shell() -> Element {
    rsx! {
        div {
            class: "app",
            Header {}
            Outlet::<Route> {}
            Footer {}
        }
    }
}
