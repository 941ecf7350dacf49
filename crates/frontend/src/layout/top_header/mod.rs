//! TopHeader component - application top bar.
//!
//! Contains:
//! - Application title
//! - Dark mode toggle

use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("products")}
                <span class="top-header__title">"Каталог товаров"</span>
            </div>

            <div class="top-header__actions">
                <ThemeToggle />
            </div>
        </div>
    }
}
