use crate::domain::product::ui::list::ProductList;
use crate::layout::top_header::TopHeader;
use leptos::prelude::*;

/// Корневой компонент: шапка + единственная страница со списком товаров.
/// Роутер не нужен — страница одна.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-main">
                <ProductList />
            </div>
        </div>
    }
}
