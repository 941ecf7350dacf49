//! Форматирование цен для таблицы и диалогов

/// Форматирует цену: 2 знака после запятой, пробел как разделитель тысяч.
/// Пример: 1234.5 -> "1 234.50"
pub fn format_price(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    // Пробел каждые 3 цифры с конца целой части, минус не трогаем
    let mut grouped = String::new();
    let digits: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            grouped.push(' ');
        }
        grouped.push(*c);
    }
    let integer_grouped: String = grouped.chars().rev().collect();

    format!("{}.{}", integer_grouped, decimal_part)
}
