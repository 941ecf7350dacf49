use contracts::catalog::Product;
use leptos::prelude::*;

use crate::shared::list_utils::{sort_list, Sortable};

/// Structural comparison per field: строки через cmp, цена через total_cmp.
/// Неизвестное поле сортирует по id.
impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "title" => self.title.cmp(&other.title),
            "price" => self.price.total_cmp(&other.price),
            _ => self.id.cmp(&other.id),
        }
    }
}

/// Состояние списка товаров: единственный владелец всех производных данных.
///
/// `filtered` — производный список: подмножество `products`, чей title
/// содержит поисковый текст без учёта регистра, пересчитывается целиком.
/// Все мутации проходят через методы ниже; компонент только рендерит.
#[derive(Clone, Debug)]
pub struct ProductListState {
    pub products: Vec<Product>,
    pub filtered: Vec<Product>,
    pub search: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub is_loaded: bool,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            filtered: Vec::new(),
            search: String::new(),
            sort_field: String::new(),
            sort_ascending: true,
            page: 1,
            page_size: 5,
            is_loaded: false,
        }
    }
}

impl ProductListState {
    /// Заменяет оба списка целиком после загрузки/перезагрузки.
    /// Фильтр не применяется заново, страница сбрасывается на первую.
    pub fn apply_products(&mut self, products: Vec<Product>) {
        self.filtered = products.clone();
        self.products = products;
        self.page = 1;
        self.is_loaded = true;
    }

    /// Применяет результат загрузки: успех заменяет оба списка целиком,
    /// ошибка не мутирует ничего и возвращается для единственного уведомления
    pub fn apply_load_result(
        &mut self,
        result: Result<Vec<Product>, String>,
    ) -> Option<String> {
        match result {
            Ok(products) => {
                self.apply_products(products);
                None
            }
            Err(e) => Some(e),
        }
    }

    /// Пересчитывает производный список по поисковому тексту, страница = 1
    pub fn apply_search(&mut self, text: String) {
        let query = text.to_lowercase();
        self.filtered = self
            .products
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&query))
            .cloned()
            .collect();
        self.search = text;
        self.page = 1;
    }

    /// Размер страницы, страница = 1
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size;
        self.page = 1;
    }

    /// Переключает направление при повторном клике по тому же полю,
    /// для нового поля сбрасывает на возрастание. Сортирует filtered на месте.
    pub fn sort_by(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
        sort_list(&mut self.filtered, &self.sort_field, self.sort_ascending);
    }

    /// Без проверки границ: страница за пределами данных даёт пустое тело
    pub fn goto_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Видимый срез производного списка для текущей страницы
    pub fn visible_page(&self) -> Vec<Product> {
        let start = (self.page.saturating_sub(1)) * self.page_size;
        let end = (start + self.page_size).min(self.filtered.len());
        self.filtered.get(start..end).unwrap_or(&[]).to_vec()
    }

    /// Число страниц: ceil(len(filtered) / size), ноль для пустого списка
    pub fn page_count(&self) -> usize {
        if self.filtered.is_empty() {
            0
        } else {
            (self.filtered.len() + self.page_size - 1) / self.page_size
        }
    }

    /// Поиск по id в полном списке — просмотр/редактирование работают
    /// независимо от активного фильтра
    pub fn find(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, title: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            description: String::new(),
            category: None,
            images: Vec::new(),
            creation_at: None,
            updated_at: None,
        }
    }

    fn state_with(products: Vec<Product>) -> ProductListState {
        let mut state = ProductListState::default();
        state.apply_products(products);
        state
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_apply_products_resets_view() {
        let mut state = ProductListState::default();
        state.goto_page(7);
        state.apply_search("old".to_string());
        state.apply_products(vec![product(1, "iPhone 12", 899.0)]);
        assert_eq!(state.filtered.len(), 1);
        assert_eq!(state.page, 1);
        assert!(state.is_loaded);
    }

    #[test]
    fn test_search_filters_by_title_case_insensitive() {
        let mut state = state_with(vec![
            product(1, "iPhone 12", 899.0),
            product(2, "Kettle", 25.0),
        ]);
        state.goto_page(3);
        state.apply_search("phone".to_string());
        assert_eq!(ids(&state.filtered), vec![1]);
        assert_eq!(state.page, 1);

        // Пустой запрос возвращает полный список
        state.apply_search(String::new());
        assert_eq!(ids(&state.filtered), vec![1, 2]);
    }

    #[test]
    fn test_search_is_subset_of_full_list() {
        let mut state = state_with(vec![
            product(1, "Red Chair", 10.0),
            product(2, "Blue Chair", 20.0),
            product(3, "Table", 30.0),
        ]);
        state.apply_search("chair".to_string());
        assert!(state
            .filtered
            .iter()
            .all(|p| state.products.iter().any(|f| f.id == p.id)));
        assert_eq!(state.filtered.len(), 2);
    }

    #[test]
    fn test_sort_toggles_and_resets_direction() {
        let mut state = state_with(vec![
            product(1, "Banana", 3.0),
            product(2, "Apple", 2.0),
            product(3, "Cherry", 1.0),
        ]);

        state.sort_by("title");
        assert!(state.sort_ascending);
        assert_eq!(ids(&state.filtered), vec![2, 1, 3]);

        // Повторный клик по тому же полю — обратный порядок
        state.sort_by("title");
        assert!(!state.sort_ascending);
        assert_eq!(ids(&state.filtered), vec![3, 1, 2]);

        // Другое поле — снова по возрастанию
        state.sort_by("price");
        assert!(state.sort_ascending);
        assert_eq!(ids(&state.filtered), vec![3, 2, 1]);
    }

    #[test]
    fn test_double_sort_reverses_single_sort() {
        let mut once = state_with(vec![
            product(1, "b", 2.0),
            product(2, "a", 1.0),
            product(3, "c", 3.0),
        ]);
        let mut twice = once.clone();
        once.sort_by("price");
        twice.sort_by("price");
        twice.sort_by("price");
        let reversed: Vec<i64> = ids(&once.filtered).into_iter().rev().collect();
        assert_eq!(ids(&twice.filtered), reversed);
    }

    #[test]
    fn test_page_count_and_visible_slice() {
        let products: Vec<Product> = (1..=12)
            .map(|i| product(i, &format!("Item {}", i), i as f64))
            .collect();
        let mut state = state_with(products);

        assert_eq!(state.page_count(), 3);
        assert_eq!(ids(&state.visible_page()), vec![1, 2, 3, 4, 5]);

        state.goto_page(3);
        assert_eq!(ids(&state.visible_page()), vec![11, 12]);

        // Страница за пределами данных — пустое тело, не ошибка
        state.goto_page(9);
        assert!(state.visible_page().is_empty());
    }

    #[test]
    fn test_page_count_empty_list() {
        let state = ProductListState::default();
        assert_eq!(state.page_count(), 0);
        assert!(state.visible_page().is_empty());
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let products: Vec<Product> = (1..=12)
            .map(|i| product(i, &format!("Item {}", i), i as f64))
            .collect();
        let mut state = state_with(products);
        state.goto_page(3);
        state.set_page_size(10);
        assert_eq!(state.page, 1);
        assert_eq!(state.visible_page().len(), 10);
        assert_eq!(state.page_count(), 2);
    }

    #[test]
    fn test_visible_page_length_rule() {
        // len(visible) == min(size, len(filtered) - (page-1)*size), не меньше нуля
        let products: Vec<Product> = (1..=7)
            .map(|i| product(i, &format!("Item {}", i), i as f64))
            .collect();
        let mut state = state_with(products);
        state.set_page_size(3);
        for page in 1..=4 {
            state.goto_page(page);
            let expected = 7usize
                .saturating_sub((page - 1) * 3)
                .min(3);
            assert_eq!(state.visible_page().len(), expected, "page {}", page);
        }
    }

    #[test]
    fn test_find_ignores_active_filter() {
        let mut state = state_with(vec![
            product(1, "iPhone 12", 899.0),
            product(2, "Kettle", 25.0),
        ]);
        state.apply_search("phone".to_string());
        assert!(state.find(2).is_some());
        assert!(state.find(99).is_none());
    }

    #[test]
    fn test_failed_load_leaves_state_untouched() {
        let mut state = state_with(vec![
            product(1, "iPhone 12", 899.0),
            product(2, "Kettle", 25.0),
        ]);
        state.apply_search("phone".to_string());
        let before = state.clone();

        let error = state.apply_load_result(Err("network down".to_string()));

        // Ошибка возвращается ровно один раз, состояние как было
        assert_eq!(error, Some("network down".to_string()));
        assert_eq!(ids(&state.products), ids(&before.products));
        assert_eq!(ids(&state.filtered), ids(&before.filtered));
        assert_eq!(state.page, before.page);
        assert_eq!(state.search, before.search);
    }

    #[test]
    fn test_successful_load_replaces_lists_wholesale() {
        let mut state = state_with(vec![product(1, "Old", 1.0)]);
        state.apply_search("old".to_string());

        let error = state.apply_load_result(Ok(vec![
            product(2, "New A", 2.0),
            product(3, "New B", 3.0),
        ]));

        assert_eq!(error, None);
        assert_eq!(ids(&state.products), vec![2, 3]);
        // Фильтр не применяется заново: производный список = полный
        assert_eq!(ids(&state.filtered), vec![2, 3]);
        assert_eq!(state.page, 1);
    }
}
