// ============================================================================
// FORMATO - Números y fechas para mensajes de estado
// ============================================================================

use chrono::{DateTime, Local, NaiveDateTime};

// Suficientes para la expansión decimal exacta de cualquier f64 (máx. 1074 decimales)
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Igual que `Number.prototype.toFixed`: redondea el valor binario exacto,
/// los empates hacia arriba (1.45 → "1.4", 0.125 → "0.13")
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .map(|b| b - b'0')
        .collect();
    let mut int_len = int_part.len();

    if frac_part.as_bytes().get(decimals).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
            int_len += 1;
        }
    }

    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    for (i, digit) in digits.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(b'0' + digit));
    }
    out
}

/// Importe con símbolo de moneda: `₹12.50`
pub fn format_money(amount: f64, currency_symbol: &str) -> String {
    format!("{}{}", currency_symbol, to_fixed(amount, 2))
}

/// Fecha/hora ISO-8601 del backend a `YYYY-MM-DD HH:MM`.
/// Vacío → "", no parseable → "Invalid Date".
pub fn format_datetime(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        return String::new();
    }

    // Con zona horaria: mostrar en hora local del navegador
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string();
    }

    // Sin zona horaria (naive): ya es hora local
    let normalized = input.replacen(' ', "T", 1);
    match normalized.parse::<NaiveDateTime>() {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => {
            log::warn!("⚠️ [FORMAT] Fecha no válida: {}", input);
            "Invalid Date".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed_rounds_half_up() {
        assert_eq!(to_fixed(3.25, 1), "3.3");
        assert_eq!(to_fixed(12.5, 2), "12.50");
        assert_eq!(to_fixed(0.0, 1), "0.0");
        assert_eq!(to_fixed(2.04, 1), "2.0");
        assert_eq!(to_fixed(1.45, 1), "1.4");
    }

    #[test]
    fn test_to_fixed_uses_exact_binary_value() {
        assert_eq!(to_fixed(8.345, 2), "8.35");
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(0.125, 2), "0.13");
    }

    #[test]
    fn test_to_fixed_carries_into_integer_part() {
        assert_eq!(to_fixed(9.96, 1), "10.0");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-1.25, 1), "-1.3");
        assert_eq!(to_fixed(-0.01, 1), "-0.0");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(12.5, "₹"), "₹12.50");
        assert_eq!(format_money(40.0, "£"), "£40.00");
    }

    #[test]
    fn test_format_naive_datetime() {
        assert_eq!(format_datetime("2024-04-02T15:30:12.345678"), "2024-04-02 15:30");
        assert_eq!(format_datetime("2024-04-02 09:05:00"), "2024-04-02 09:05");
    }

    #[test]
    fn test_format_datetime_edge_cases() {
        assert_eq!(format_datetime(""), "");
        assert_eq!(format_datetime("   "), "");
        assert_eq!(format_datetime("yesterday"), "Invalid Date");
    }

    #[test]
    fn test_format_datetime_with_offset_uses_local_time() {
        let expected = DateTime::parse_from_rfc3339("2024-04-02T15:30:00Z")
            .unwrap()
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string();
        assert_eq!(format_datetime("2024-04-02T15:30:00Z"), expected);
    }
}
