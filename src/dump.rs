use core::fmt;

use crate::table::Table;

/// Display-only view of a table's full structure.
///
/// Renders one line per bucket index, in order: `Index i: Empty` for an
/// empty bucket, otherwise `Index i:` followed by the bucket's contacts as
/// ` - name: number` in insertion order. Formatting is pure; the caller
/// decides whether the text goes to stdout, a log, or a test assertion.
pub struct Dump<'a> {
    table: &'a Table,
}

impl<'a> Dump<'a> {
    pub(crate) fn new(table: &'a Table) -> Self {
        Self { table }
    }
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bucket in 0..self.table.capacity() {
            write!(f, "Index {bucket}:")?;

            let mut occupied = false;
            for entry in self.table.chain(bucket) {
                occupied = true;
                write!(f, " - {}", entry.contact)?;
            }

            if !occupied {
                f.write_str(" Empty")?;
            }
            f.write_str("\n")?;
        }

        Ok(())
    }
}
