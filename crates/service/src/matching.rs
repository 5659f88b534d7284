//! Text comparison shared by account lookup and directory search.
//!
//! Each `TextMatch` mode has a SQL form (for SeaORM repositories) and an
//! in-memory form (for the mock repositories); both must agree.
//! `IgnoreCase` folds ASCII letters only, on every backend.

use sea_orm::sea_query::{Alias, Expr, Func, SimpleExpr};
use sea_orm::DbBackend;

pub use configs::TextMatch;

const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

/// ASCII-only lower-casing. SQLite's `LOWER` already is; Postgres' follows
/// the locale, so it gets `translate` instead.
fn fold(backend: DbBackend, expr: SimpleExpr) -> SimpleExpr {
    match backend {
        DbBackend::Postgres => Func::cust(Alias::new("translate")).arg(expr).arg(UPPER).arg(LOWER).into(),
        _ => Func::lower(expr).into(),
    }
}

/// `column = value` under `mode`.
pub fn equals(backend: DbBackend, mode: TextMatch, column: SimpleExpr, value: &str) -> SimpleExpr {
    match mode {
        TextMatch::Exact => Expr::expr(column).eq(value),
        TextMatch::IgnoreCase => Expr::expr(fold(backend, column)).eq(fold(backend, Expr::val(value).into())),
    }
}

/// `needle` occurs somewhere in `column` under `mode`.
///
/// Uses the backend's position function instead of `LIKE`, whose case
/// handling differs between stores and which treats `%`/`_` as wildcards.
pub fn contains(backend: DbBackend, mode: TextMatch, column: SimpleExpr, needle: &str) -> SimpleExpr {
    let (haystack, needle): (SimpleExpr, SimpleExpr) = match mode {
        TextMatch::Exact => (column, Expr::val(needle).into()),
        TextMatch::IgnoreCase => (fold(backend, column), fold(backend, Expr::val(needle).into())),
    };
    let position = match backend {
        DbBackend::Postgres => Func::cust(Alias::new("strpos")),
        _ => Func::cust(Alias::new("instr")),
    };
    Expr::expr(position.arg(haystack).arg(needle)).gt(0)
}

pub fn text_eq(mode: TextMatch, stored: &str, value: &str) -> bool {
    match mode {
        TextMatch::Exact => stored == value,
        TextMatch::IgnoreCase => stored.eq_ignore_ascii_case(value),
    }
}

pub fn text_contains(mode: TextMatch, haystack: &str, needle: &str) -> bool {
    match mode {
        TextMatch::Exact => haystack.contains(needle),
        TextMatch::IgnoreCase => haystack.to_ascii_lowercase().contains(&needle.to_ascii_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sea_query::{PostgresQueryBuilder, Query, SqliteQueryBuilder};

    fn first_name() -> SimpleExpr {
        Expr::col(Alias::new("first_name")).into()
    }

    fn render_sqlite(cond: SimpleExpr) -> String {
        Query::select()
            .column(Alias::new("id"))
            .from(Alias::new("student"))
            .and_where(cond)
            .to_string(SqliteQueryBuilder)
    }

    #[test]
    fn exact_contains_uses_instr_on_sqlite() {
        let sql = render_sqlite(contains(DbBackend::Sqlite, TextMatch::Exact, first_name(), "Ann"));
        assert!(sql.contains("instr(\"first_name\", 'Ann') > 0"), "{sql}");
    }

    #[test]
    fn ignore_case_contains_lowers_both_sides() {
        let sql = render_sqlite(contains(DbBackend::Sqlite, TextMatch::IgnoreCase, first_name(), "Ann"));
        assert!(sql.contains("LOWER(\"first_name\")"), "{sql}");
        assert!(sql.contains("LOWER('Ann')"), "{sql}");
    }

    #[test]
    fn postgres_contains_uses_strpos() {
        let sql = Query::select()
            .column(Alias::new("id"))
            .from(Alias::new("student"))
            .and_where(contains(DbBackend::Postgres, TextMatch::Exact, first_name(), "Ann"))
            .to_string(PostgresQueryBuilder);
        assert!(sql.contains("strpos(\"first_name\", 'Ann') > 0"), "{sql}");
    }

    #[test]
    fn postgres_ignore_case_folds_ascii_with_translate() {
        let sql = Query::select()
            .column(Alias::new("id"))
            .from(Alias::new("account"))
            .and_where(equals(DbBackend::Postgres, TextMatch::IgnoreCase, Expr::col(Alias::new("email")).into(), "A@b.com"))
            .to_string(PostgresQueryBuilder);
        assert!(sql.contains("translate(\"email\", 'ABCDEFGHIJKLMNOPQRSTUVWXYZ', 'abcdefghijklmnopqrstuvwxyz')"), "{sql}");
        assert!(!sql.contains("LOWER"), "{sql}");
    }

    #[test]
    fn in_memory_forms() {
        assert!(text_eq(TextMatch::Exact, "a@b.com", "a@b.com"));
        assert!(!text_eq(TextMatch::Exact, "A@b.com", "a@b.com"));
        assert!(text_eq(TextMatch::IgnoreCase, "A@B.com", "a@b.COM"));

        assert!(text_contains(TextMatch::Exact, "Joanna", "ann"));
        assert!(!text_contains(TextMatch::Exact, "Annie", "ann"));
        assert!(text_contains(TextMatch::IgnoreCase, "Annie", "ann"));
    }

    #[test]
    fn in_memory_ignore_case_leaves_non_ascii_alone() {
        assert!(text_eq(TextMatch::IgnoreCase, "ÉMILE@x.com", "Émile@X.COM"));
        assert!(!text_eq(TextMatch::IgnoreCase, "ÉMILE@x.com", "émile@x.com"));
        assert!(text_contains(TextMatch::IgnoreCase, "Émile", "ÉMILE"));
        assert!(!text_contains(TextMatch::IgnoreCase, "Émile", "émile"));
    }
}
