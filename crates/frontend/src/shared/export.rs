/// Экспорт видимой страницы таблицы в CSV файл
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Trait для типов, которые могут быть экспортированы в CSV
pub trait CsvExportable {
    /// Строка заголовка CSV
    fn csv_header() -> &'static str;

    /// Одна строка CSV для записи (без перевода строки)
    fn to_csv_line(&self) -> String;
}

/// Собирает CSV текст: заголовок + строка на запись, '\n' в конце каждой
/// строки включая последнюю. Без BOM, кавычки определяет to_csv_line.
pub fn build_csv<T: CsvExportable>(rows: &[T]) -> String {
    let mut content = String::from(T::csv_header());
    content.push('\n');
    for row in rows {
        content.push_str(&row.to_csv_line());
        content.push('\n');
    }
    content
}

/// Инициирует скачивание CSV текста как файла через Blob + временную ссылку
pub fn download_csv(content: &str, filename: &str) -> Result<(), String> {
    let blob = create_csv_blob(content)?;
    download_blob(&blob, filename)
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::catalog::{Category, Product};

    fn product(id: i64, title: &str, price: f64, category: Option<&str>) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            description: String::new(),
            category: category.map(|name| Category {
                id: 1,
                name: name.to_string(),
                image: None,
            }),
            images: Vec::new(),
            creation_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_build_csv_known_page() {
        let rows = vec![
            product(1, "iPhone 12", 899.0, Some("Electronics")),
            product(2, "Kettle", 25.5, Some("Home")),
            product(3, "Chair", 49.0, None),
        ];
        assert_eq!(
            build_csv(&rows),
            "id,title,price,category\n\
             1,\"iPhone 12\",899,\"Electronics\"\n\
             2,\"Kettle\",25.5,\"Home\"\n\
             3,\"Chair\",49,\"\"\n"
        );
    }

    #[test]
    fn test_build_csv_empty() {
        let rows: Vec<Product> = Vec::new();
        assert_eq!(build_csv(&rows), "id,title,price,category\n");
    }
}
