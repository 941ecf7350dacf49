//! Theme management module for the application.
//!
//! Единственная пользовательская настройка: тёмный режим.
//! Флаг хранится в localStorage под ключом "dark" строками
//! "true"/"false", применяется через data-theme на body.

use leptos::prelude::*;
use web_sys::window;

const DARK_STORAGE_KEY: &str = "dark";

/// Load dark flag from localStorage.
pub fn load_dark_flag() -> bool {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(DARK_STORAGE_KEY).ok().flatten())
        .map(|v| v == "true")
        .unwrap_or(false)
}

/// Save dark flag to localStorage.
fn save_dark_flag(dark: bool) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(DARK_STORAGE_KEY, if dark { "true" } else { "false" });
    }
}

/// Apply theme via data-theme attribute on body.
fn apply_theme(dark: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", if dark { "dark" } else { "light" });
    }
}

/// Кнопка переключения тёмного режима для шапки
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let dark = RwSignal::new(load_dark_flag());

    // Применяем сохранённую тему при монтировании
    Effect::new(move |_| {
        apply_theme(dark.get_untracked());
    });

    let toggle = move |_| {
        let next = !dark.get();
        dark.set(next);
        save_dark_flag(next);
        apply_theme(next);
    };

    view! {
        <button
            class="top-header__icon-btn"
            on:click=toggle
            title=move || if dark.get() { "Светлая тема" } else { "Тёмная тема" }
        >
            {move || if dark.get() {
                crate::shared::icons::icon("sun")
            } else {
                crate::shared::icons::icon("moon")
            }}
        </button>
    }
}
