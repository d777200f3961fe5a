use super::kind::Kind;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub kind: Kind,
}

/// Categories inserted on every startup (duplicates are ignored).
pub const DEFAULT_CATEGORIES: [(&str, Kind); 7] = [
    ("Alimentos", Kind::Expense),
    ("Transporte", Kind::Expense),
    ("Vivienda", Kind::Expense),
    ("Entretenimiento", Kind::Expense),
    ("Salario", Kind::Income),
    ("Freelance", Kind::Income),
    ("Inversiones", Kind::Income),
];
