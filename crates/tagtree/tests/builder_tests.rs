//! Builder tests

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::result::Result;

use pretty_assertions::assert_eq;
use tagtree::*;

// ═══════════════════════════════════════════════════════════════════════
// Construction
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_empty_root_renders_open_and_close() {
    for name in ["table", "tr", "td", "x", "text-line"] {
        let root = create_root(name, |_| {});
        assert_eq!(render(&root), format!("<{name}></{name}>"));
    }
}

#[test]
fn test_table_row_cell() {
    let table = create_root("table", |table| {
        child(table, "tr", |tr| {
            child(tr, "td", |_| {});
        });
    });

    assert_eq!(render(&table), "<table><tr><td></td></tr></table>");
}

#[test]
fn test_two_sibling_rows() {
    let table = create_root("table", |table| {
        child(table, "tr", |tr| {
            child(tr, "td", |_| {});
        });
        child(table, "tr", |tr| {
            child(tr, "td", |_| {});
        });
    });

    assert_eq!(
        render(&table),
        "<table><tr><td></td></tr><tr><td></td></tr></table>"
    );
}

#[test]
fn test_fixed_name_constructors_match_generic_builder() {
    let by_name = create_root("table", |t| {
        child(t, "tr", |row| {
            child(row, "td", |_| {});
            child(row, "td", |_| {});
        });
    });
    let by_tag = table(|t| {
        tr(t, |row| {
            td(row, |_| {});
            td(row, |_| {});
        });
    });

    assert_eq!(by_name, by_tag);
}

#[test]
fn test_children_keep_call_order() {
    let root = create_root("ol", |ol| {
        for name in ["c", "a", "b", "a"] {
            child(ol, name, |_| {});
        }
    });

    let names: Vec<_> = root.children().iter().map(Element::name).collect();
    assert_eq!(names, ["c", "a", "b", "a"]);
    assert_eq!(render(&root), "<ol><c></c><a></a><b></b><a></a></ol>");
}

#[test]
fn test_method_forms() {
    let mut root = Element::new("table");
    root.child("tr", |row| {
        row.child("td", |_| {});
    });

    assert_eq!(root.render(), "<table><tr><td></td></tr></table>");
}

#[test]
fn test_returned_child_can_be_extended() {
    let mut root = Element::new("table");
    let row = root.child("tr", |_| {});
    row.child("td", |_| {});

    assert_eq!(root.render(), "<table><tr><td></td></tr></table>");
}

#[test]
fn test_deep_nesting() {
    fn nest(parent: &mut Element, remaining: usize) {
        if remaining > 0 {
            child(parent, "div", |div| nest(div, remaining - 1));
        }
    }

    let depth = 200;
    let root = create_root("div", |root| nest(root, depth - 1));

    assert_eq!(root.depth(), depth);
    let rendered = render(&root);
    assert_eq!(
        rendered,
        format!("{}{}", "<div>".repeat(depth), "</div>".repeat(depth))
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Configure failures
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, PartialEq)]
struct RowError(usize);

#[test]
fn test_failure_in_second_sibling_returns_no_tree() {
    let mut attempted = Vec::new();

    let result: Result<Element, RowError> = try_create_root("table", |table| {
        for index in 0..2 {
            attempted.push(index);
            try_child(table, "tr", |tr| {
                child(tr, "td", |_| {});
                if index == 1 {
                    return Err(RowError(index));
                }
                Ok(())
            })?;
        }
        Ok(())
    });

    assert_eq!(result, Err(RowError(1)));
    assert_eq!(attempted, [0, 1]);
}

#[test]
fn test_failed_child_is_not_attached() {
    let mut table = Element::new("table");
    table.child("tr", |_| {});

    let result = table.try_child("tr", |tr| {
        tr.child("td", |_| {});
        Err::<(), _>(RowError(7))
    });

    assert_eq!(result.map(|_| ()), Err(RowError(7)));
    assert_eq!(table.render(), "<table><tr></tr></table>");
}

#[test]
fn test_fallible_success_builds_tree() {
    let table: Result<Element, RowError> = try_create_root("table", |table| {
        try_child(table, "tr", |tr| -> Result<(), RowError> {
            try_child(tr, "td", |_| Ok::<(), RowError>(()))?;
            Ok(())
        })?;
        Ok(())
    });

    assert_eq!(
        table.map(|t| t.render()),
        Ok("<table><tr><td></td></tr></table>".to_string())
    );
}

#[test]
fn test_panic_propagates_unchanged() {
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        create_root("table", |table| {
            child(table, "tr", |_| {});
            child(table, "tr", |_| panic!("second row"));
        })
    }));

    let payload = outcome.expect_err("configure panicked");
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"second row"));
}
