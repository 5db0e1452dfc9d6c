//! Example round-tripping a composed statement through JSON.
//!
//! Run with:
//!   cargo run --example fragment_json -p sql-compose --features serde

use sql_compose::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stmt = Literal::new("SELECT {c} FROM {t} WHERE {k} = {v}").format([
        ("c", Fragment::from(Identifier::new(["name"])?)),
        ("t", Fragment::from(Identifier::new(["app", "users"])?)),
        ("k", Fragment::from(Identifier::new(["id"])?)),
        ("v", Fragment::from(Placeholder::new("id")?)),
    ])?;
    let fragment = Fragment::from(stmt);

    let json = serde_json::to_string_pretty(&fragment)?;
    println!("{json}");

    let back: Fragment = serde_json::from_str(&json)?;
    assert_eq!(back, fragment);
    println!("rendered: {}", back.to_sql());
    Ok(())
}
