//! Example building a dynamic UPDATE out of typed fragments.
//!
//! Run with:
//!   cargo run --example dynamic_update -p sql-compose

use sql_compose::prelude::*;

/// Build `UPDATE <table> SET <col> = :<bind>, ... WHERE "id" = :id`.
///
/// `changes` holds (column name, bind name) pairs. Column names may come
/// from untrusted input; they only ever enter the statement as quoted
/// identifiers.
fn build_update(table: &[&str], changes: &[(&str, &str)]) -> ComposeResult<Sequence> {
    let assignments = changes
        .iter()
        .map(|(col, bind)| {
            let assignment = Literal::new("{c} = {v}").format([
                ("c", Fragment::from(Identifier::new([*col])?)),
                ("v", Fragment::from(Placeholder::new(*bind)?)),
            ])?;
            Ok(Fragment::from(assignment))
        })
        .collect::<ComposeResult<Vec<_>>>()?;

    Literal::new("UPDATE {t} SET {sets} WHERE {key} = {id}").format([
        ("t", Fragment::from(Identifier::new(table.iter().copied())?)),
        ("sets", Fragment::from(Literal::new(", ").join(assignments))),
        ("key", Fragment::from(Identifier::single("id"))),
        ("id", Fragment::from(Placeholder::new("id")?)),
    ])
}

/// Collect the bind-parameter names the caller must supply at execution time.
fn bind_names(fragment: &Fragment, out: &mut Vec<String>) {
    match fragment {
        Fragment::Placeholder(p) => out.push(p.name().to_owned()),
        Fragment::Sequence(seq) => {
            for item in seq {
                bind_names(item, out);
            }
        }
        Fragment::Literal(_) | Fragment::Identifier(_) => {}
    }
}

fn main() -> ComposeResult<()> {
    let stmt = build_update(
        &["app", "users"],
        &[("display name", "display_name"), ("email", "email")],
    )?;

    println!("SQL:   {}", stmt.to_sql());

    let mut binds = Vec::new();
    bind_names(&Fragment::from(stmt.clone()), &mut binds);
    println!("binds: {}", binds.join(", "));

    println!("tree:  {stmt:?}");
    Ok(())
}
