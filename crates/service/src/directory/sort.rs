//! Sort key resolution for directory listings.
//!
//! The raw `sort`/`order` strings are resolved once into a [`SortKey`]. Each
//! field maps to one column (SQL ordering) and one comparator (in-memory
//! ordering). Anything unrecognized resolves to ascending id.

use std::cmp::Ordering;

use models::student;
use sea_orm::{Order, QueryOrder, Select};

use super::domain::Student;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    FirstName,
    Age,
    Email,
    Address,
    City,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for SortKey {
    fn default() -> Self {
        Self { field: SortField::Id, order: SortOrder::Asc }
    }
}

impl SortField {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "firstname" => Some(Self::FirstName),
            "age" => Some(Self::Age),
            "email" => Some(Self::Email),
            "address" => Some(Self::Address),
            "city" => Some(Self::City),
            _ => None,
        }
    }

    pub fn column(self) -> student::Column {
        match self {
            Self::Id => student::Column::Id,
            Self::FirstName => student::Column::FirstName,
            Self::Age => student::Column::Age,
            Self::Email => student::Column::Email,
            Self::Address => student::Column::Address,
            Self::City => student::Column::City,
        }
    }

    pub fn compare(self, a: &Student, b: &Student) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::FirstName => a.first_name.cmp(&b.first_name),
            Self::Age => a.age.cmp(&b.age),
            Self::Email => a.email.cmp(&b.email),
            Self::Address => a.address.cmp(&b.address),
            Self::City => a.city.cmp(&b.city),
        }
    }
}

impl SortOrder {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

impl SortKey {
    /// Resolve caller strings. `order` defaults to `asc`; an unknown field or
    /// direction (including `id`) yields the default key.
    pub fn resolve(sort: Option<&str>, order: Option<&str>) -> Self {
        let order = order.filter(|o| !o.trim().is_empty()).unwrap_or("asc");
        match (sort.and_then(SortField::parse), SortOrder::parse(order)) {
            (Some(field), Some(order)) => Self { field, order },
            _ => Self::default(),
        }
    }

    pub fn apply(self, select: Select<student::Entity>) -> Select<student::Entity> {
        let order = match self.order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };
        select.order_by(self.field.column(), order)
    }

    pub fn compare(self, a: &Student, b: &Student) -> Ordering {
        let ord = self.field.compare(a, b);
        match self.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_pairs_case_insensitively() {
        assert_eq!(
            SortKey::resolve(Some("firstName"), Some("DESC")),
            SortKey { field: SortField::FirstName, order: SortOrder::Desc }
        );
        assert_eq!(
            SortKey::resolve(Some("age"), None),
            SortKey { field: SortField::Age, order: SortOrder::Asc }
        );
        assert_eq!(
            SortKey::resolve(Some("CITY"), Some("asc")),
            SortKey { field: SortField::City, order: SortOrder::Asc }
        );
    }

    #[test]
    fn unknown_field_or_direction_falls_back_to_id_asc() {
        assert_eq!(SortKey::resolve(Some("bogus"), Some("desc")), SortKey::default());
        assert_eq!(SortKey::resolve(Some("age"), Some("sideways")), SortKey::default());
        assert_eq!(SortKey::resolve(Some("id"), Some("desc")), SortKey::default());
        assert_eq!(SortKey::resolve(Some("name"), None), SortKey::default());
        assert_eq!(SortKey::resolve(None, None), SortKey::default());
    }

    #[test]
    fn descending_comparator_reverses() {
        let young = Student { id: 1, age: 18, ..Default::default() };
        let old = Student { id: 2, age: 40, ..Default::default() };
        let key = SortKey { field: SortField::Age, order: SortOrder::Desc };
        assert_eq!(key.compare(&old, &young), Ordering::Less);
        assert_eq!(SortKey::default().compare(&young, &old), Ordering::Less);
    }
}
