//! Normalización de parámetros de query.
//!
//! Nada aquí devuelve error: un valor ausente, no numérico, cero o negativo
//! cae al valor por defecto.

use crate::models::news::Pagination;

/// Interpreta el prefijo entero de `raw` (signo opcional + dígitos ASCII).
/// `"12abc"` es 12, `"abc"` es `None`. Valores enormes saturan.
fn leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        &digits[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let value = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -value } else { value })
}

fn positive_or(raw: Option<&str>, default: usize) -> usize {
    match raw.and_then(leading_int) {
        Some(n) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX),
        _ => default,
    }
}

pub fn parse_page(raw: Option<&str>) -> usize {
    positive_or(raw, Pagination::DEFAULT_PAGE)
}

pub fn parse_limit(raw: Option<&str>) -> usize {
    positive_or(raw, Pagination::DEFAULT_LIMIT)
}

pub fn parse_pagination(page: Option<&str>, limit: Option<&str>) -> Pagination {
    Pagination {
        page: parse_page(page),
        limit: parse_limit(limit),
    }
}

/// Solo el literal `"true"` activa el filtro.
pub fn parse_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

/// Un filtro de texto vacío equivale a no filtrar.
pub fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.filter(|value| !value.is_empty()).map(str::to_string)
}

/// Pares clave/valor del query string tal como llegaron.
///
/// Leer los pares sueltos (en lugar de un struct) evita que una clave
/// repetida o rara invalide las demás: cada clave se lee por separado y,
/// si se repite, gana la primera aparición.
#[derive(Debug, Clone, Default)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pagination(&self) -> Pagination {
        parse_pagination(self.first("page"), self.first("limit"))
    }
}

impl From<Vec<(String, String)>> for QueryParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}
