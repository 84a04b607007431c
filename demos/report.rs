//! Report example - render the classic occurrence report for composed
//! queries, the way a driver program would print search results.

use linaria::{DocumentStore, Query, Result};

fn main() -> Result<()> {
    println!("=== Occurrence Reports ===\n");

    let store = DocumentStore::new([
        "Alice was beginning to get very tired of sitting by her sister",
        "on the bank, and of having nothing to do: once or twice she had",
        "peeped into the book her sister was reading, but it had no",
        "pictures or conversations in it, 'and what is the use of a book,'",
        "thought Alice 'without pictures or conversations?'",
    ]);

    let sister = Query::word("sister")?;
    let pictures = Query::word("pictures")?;
    let book = Query::word("book")?;

    let queries = [
        sister.clone(),
        &pictures | &book,
        pictures.clone() & !sister.clone(),
        !(&sister | &pictures),
    ];

    for query in &queries {
        println!("{}\n", query.eval(&store));
    }

    // The same data is available as structured records for other renderers.
    let matches = (&pictures | &book).eval(&store).matches();
    println!("as records: {:?}", matches);

    Ok(())
}
