// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
pub mod compat;
mod components;
pub mod hooks;
mod injected;
mod notify;
mod screens;

use api::action::ActionKind;
use api::config::VaultConfig;
use app_state::AppState;
use components::pico::Container;
use hooks::{use_flow, Flow};
use screens::mint::MintScreen;
use screens::redeem::RedeemScreen;

/// The two independent flows, one tab each.
#[derive(Clone, Copy, PartialEq, Default)]
enum Screen {
    #[default]
    Mint,
    Redeem,
}

impl Screen {
    fn name(&self) -> &'static str {
        match self {
            Screen::Mint => "Mint",
            Screen::Redeem => "Redeem",
        }
    }
}

const ALL_SCREENS: [Screen; 2] = [Screen::Mint, Screen::Redeem];

/// The navigation tabs component.
#[component]
fn Tabs(mut active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in ALL_SCREENS {
                    li {
                        a {
                            href: "#",
                            class: if active_screen() == screen { "active-tab" } else { "" },
                            "aria-current": if active_screen() == screen { "page" } else { "false" },
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

/// Renders the flow behind the active tab.
///
/// The flows are created by the caller, so the hidden one keeps its session,
/// its trigger and any run still pending.
#[component]
fn ActiveFlow(active_screen: Signal<Screen>, mint: Flow, redeem: Flow) -> Element {
    match active_screen() {
        Screen::Mint => rsx! {
            MintScreen { flow: mint }
        },
        Screen::Redeem => rsx! {
            RedeemScreen { flow: redeem }
        },
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        border-bottom: 3px solid var(--pico-primary);
    }
    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }
    footer small { color: var(--pico-muted-color); }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{responsive_css}"
        }
        LoadedApp {
            app_state: AppState::new(VaultConfig::from_env()),
        }
    }
}

#[component]
fn LoadedApp(app_state: AppState) -> Element {
    use_hook(|| {
        dioxus_logger::tracing::info!("{}", app_state.config.contract_notice());
    });
    let notice = app_state.config.contract_notice();

    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    let active_screen = use_signal(Screen::default);
    // Two separate flows for the lifetime of the page.
    let mint = use_flow(ActionKind::Mint);
    let redeem = use_flow(ActionKind::Redeem);

    rsx! {
        Container {
            header {
                nav {
                    ul {
                        li { strong { "Pair Vault" } }
                    }
                    ul {
                        li {
                            Tabs { active_screen }
                        }
                    }
                }
            }
            div {
                class: "content",
                ActiveFlow { active_screen, mint, redeem }
            }
            footer {
                small { "{notice}" }
            }
        }
    }
}
