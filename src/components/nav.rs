use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::pages::content::{NAV_CTA, NAV_LINKS};

/// Visibility of the mobile navigation overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenuState {
    pub open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Toggle,
    Close,
}

impl Reducible for NavMenuState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            NavAction::Toggle => !self.open,
            NavAction::Close => false,
        };
        if open == self.open {
            self
        } else {
            Rc::new(Self { open })
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub brand: String,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu = use_reducer(NavMenuState::default);

    let toggle = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(NavAction::Toggle))
    };
    // Any link in the overlay closes it
    let close = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(NavAction::Close))
    };

    html! {
        <header class="site-header">
            <div class="container header-bar">
                <a href="#" class="brand">
                    <span class="brand-icon"><i class="fas fa-bolt"></i></span>
                    <span class="brand-name">{&props.brand}</span>
                </a>
                <button
                    class="menu-toggle"
                    onclick={toggle}
                    aria-label="Toggle navigation menu"
                    aria-expanded={menu.open.to_string()}
                >
                    if menu.open {
                        <i class="fas fa-xmark"></i>
                    } else {
                        <i class="fas fa-bars"></i>
                    }
                </button>
                <nav class="desktop-nav">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={link.href()} class="nav-link">{link.label}</a>
                    }) }
                    <a href={NAV_CTA.href()} class="btn btn-primary btn-sm">{NAV_CTA.label}</a>
                </nav>
            </div>
            if menu.open {
                <div class="mobile-menu">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={link.href()} class="mobile-link" onclick={close.clone()}>{link.label}</a>
                    }) }
                    <a href={NAV_CTA.href()} class="btn btn-primary mobile-cta" onclick={close.clone()}>
                        {NAV_CTA.label}
                    </a>
                </div>
            }
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: NavMenuState, action: NavAction) -> NavMenuState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn toggle_twice_restores_visibility() {
        for start in [NavMenuState { open: false }, NavMenuState { open: true }] {
            let once = apply(start, NavAction::Toggle);
            assert_ne!(once, start);
            assert_eq!(apply(once, NavAction::Toggle), start);
        }
    }

    #[test]
    fn close_always_hides() {
        assert!(!apply(NavMenuState { open: true }, NavAction::Close).open);
        assert!(!apply(NavMenuState { open: false }, NavAction::Close).open);
    }

    #[test]
    fn unchanged_state_is_reused() {
        let state = Rc::new(NavMenuState::default());
        let next = state.clone().reduce(NavAction::Close);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn menu_starts_hidden() {
        assert!(!NavMenuState::default().open);
    }
}
