//! Quickstart - build a store, compose queries and inspect the results.

use linaria::{DocumentStore, Query, Result};

fn main() -> Result<()> {
    println!("=== Linaria Quickstart ===\n");

    // Build a document store from an ordered sequence of lines. In a real
    // program the lines would come from a file loader.
    let store = DocumentStore::new([
        "the quick brown fox",
        "jumps over the lazy dog",
        "the quick dog barks",
        "",
        "foxes and dogs",
    ]);
    println!(
        "indexed {} lines, {} distinct words\n",
        store.line_count(),
        store.distinct_words()
    );

    // Single-word queries.
    let quick = Query::word("quick")?;
    let dog = Query::word("dog")?;
    println!("{} -> lines {:?}", quick, quick.eval(&store).lines().to_vec());
    println!("{} -> lines {:?}", dog, dog.eval(&store).lines().to_vec());

    // Compose with the standard operators. Borrowed operands stay usable.
    let both = &quick & &dog;
    let either = &quick | &dog;
    let without_fox = &either & &!Query::word("fox")?;

    for query in [&both, &either, &without_fox] {
        let result = query.eval(&store);
        println!("{} -> lines {:?}", query, result.lines().to_vec());
    }

    // Matched lines come back paired with their text for display.
    println!();
    for (line, text) in both.eval(&store).iter() {
        println!("line {}: {}", line, text);
    }

    Ok(())
}
