// Text Rendering
//
// Human-readable views of records for the presentation layer:
// newline-delimited `Label: value` lines, one block per record.

use std::fmt::Write;

use crate::records::Entity;

/// Render one record, identifier line first. No trailing newline.
pub fn render_record<T: Entity>(id: &str, record: &T) -> String {
    let mut out = format!("{}: {}", T::KIND.id_label(), id);
    for (label, value) in record.display_fields() {
        // Writing into a String cannot fail.
        let _ = write!(out, "\n{label}: {value}");
    }
    out
}

/// Render a whole store.
///
/// Each record block is followed by a blank line. An empty store renders
/// as `No <entities> to display.`
pub fn render_all<'a, T, I>(records: I) -> String
where
    T: Entity + 'a,
    I: IntoIterator<Item = (&'a str, &'a T)>,
{
    let mut out = String::new();
    for (id, record) in records {
        out.push_str(&render_record(id, record));
        out.push_str("\n\n");
    }

    if out.is_empty() {
        return empty_sentinel::<T>();
    }
    out
}

/// The literal shown for an empty store, e.g. `No clients to display.`
pub fn empty_sentinel<T: Entity>() -> String {
    format!("No {} to display.", T::KIND.plural())
}
