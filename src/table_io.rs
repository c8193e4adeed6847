//!
//! Reader for comma separated tables.
//!
//! Quoted fields may contain separators, line breaks and
//! doubled quotes. Reading never fails, an unterminated quote
//! just ends the field at the end of the text.
//!

/// A table with a header row.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Position of a column. Header names are trimmed.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|v| v == name)
    }

    /// Field of a row. Missing fields are empty.
    pub fn field<'a>(&self, row: &'a [String], col: Option<usize>) -> &'a str {
        match col {
            Some(col) => row.get(col).map(|v| v.trim()).unwrap_or_default(),
            None => "",
        }
    }
}

/// Read a comma separated table. The first row is the header.
/// Completely empty lines are skipped.
pub fn read_table(text: &str) -> Table {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    enum S {
        Field,
        Quoted,
        QuoteInQuoted,
    }

    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();

    let mut state = S::Field;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match state {
            S::Field => match c {
                '"' if field.is_empty() => state = S::Quoted,
                ',' => record.push(std::mem::take(&mut field)),
                '\r' if chars.peek() == Some(&'\n') => {}
                '\n' => {
                    record.push(std::mem::take(&mut field));
                    push_record(&mut records, std::mem::take(&mut record));
                }
                c => field.push(c),
            },
            S::Quoted => match c {
                '"' => state = S::QuoteInQuoted,
                c => field.push(c),
            },
            S::QuoteInQuoted => match c {
                '"' => {
                    field.push('"');
                    state = S::Quoted;
                }
                ',' => {
                    record.push(std::mem::take(&mut field));
                    state = S::Field;
                }
                '\r' if chars.peek() == Some(&'\n') => {
                    state = S::Field;
                }
                '\n' => {
                    record.push(std::mem::take(&mut field));
                    push_record(&mut records, std::mem::take(&mut record));
                    state = S::Field;
                }
                c => {
                    // junk after the closing quote
                    field.push(c);
                    state = S::Field;
                }
            },
        }
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        push_record(&mut records, record);
    }

    let mut records = records.into_iter();
    let header = records
        .next()
        .map(|v| v.into_iter().map(|v| v.trim().to_string()).collect())
        .unwrap_or_default();

    Table {
        header,
        rows: records.collect(),
    }
}

fn push_record(records: &mut Vec<Vec<String>>, record: Vec<String>) {
    if record.len() == 1 && record[0].trim().is_empty() {
        return;
    }
    records.push(record);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain() {
        let t = read_table("a, b ,c\r\n1,2,3\n\n4,5\n");
        assert_eq!(t.header, vec!["a", "b", "c"]);
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.field(&t.rows[1], t.column("c")), "");
        assert_eq!(t.field(&t.rows[0], t.column("b")), "2");
        assert_eq!(t.field(&t.rows[0], t.column("x")), "");
    }

    #[test]
    fn quoted() {
        let t = read_table("\u{feff}name,hex\n\"a, \"\"b\"\"\",#fff\n\"open");
        assert_eq!(t.header, vec!["name", "hex"]);
        assert_eq!(t.rows[0], vec!["a, \"b\"", "#fff"]);
        assert_eq!(t.rows[1], vec!["open"]);
    }

    #[test]
    fn empty() {
        let t = read_table("");
        assert!(t.header.is_empty());
        assert!(t.rows.is_empty());
    }
}
