//! Line tokenization and classification for table bodies.

/// Line prefixes (upper-case) that mark key or constraint clauses.
///
/// Compared against the trimmed, upper-cased line. `KEY ` keeps its
/// trailing space so column names such as `key_name` are not excluded.
pub const CONSTRAINT_PREFIXES: &[&str] = &["PRIMARY KEY", "UNIQUE KEY", "KEY ", "CONSTRAINT"];

/// A trimmed, non-empty physical line of a table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// Zero-based index among the kept lines.
    pub index: usize,
    pub text: String,
}

/// Classification of one body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Key/constraint clause, never parsed as a column.
    Constraint(&'static str),
    /// May describe a column; still subject to the column shape check.
    Candidate,
}

/// Splits a table body into trimmed, non-empty lines.
pub fn tokenize(body: &str) -> Vec<SourceLine> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, text)| SourceLine {
            index,
            text: text.to_string(),
        })
        .collect()
}

/// Classifies a trimmed line against [`CONSTRAINT_PREFIXES`].
pub fn classify_line(text: &str) -> LineKind {
    let upper = text.trim().to_ascii_uppercase();
    CONSTRAINT_PREFIXES
        .iter()
        .find(|prefix| upper.starts_with(**prefix))
        .map_or(LineKind::Candidate, |prefix| LineKind::Constraint(*prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_trims_and_drops_blank_lines() {
        let lines = tokenize("\r\n  `id` INT,\r\n\n\t`name` TEXT\n   \n");
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["`id` INT,", "`name` TEXT"]);
        assert_eq!(lines[1].index, 1);
    }

    #[test]
    fn test_constraint_prefixes() {
        assert_eq!(
            classify_line("PRIMARY KEY (`id`),"),
            LineKind::Constraint("PRIMARY KEY")
        );
        assert_eq!(
            classify_line("unique key uq_email (email)"),
            LineKind::Constraint("UNIQUE KEY")
        );
        assert_eq!(
            classify_line("KEY idx_user (user_id),"),
            LineKind::Constraint("KEY ")
        );
        assert_eq!(
            classify_line("Constraint fk_user FOREIGN KEY (user_id) REFERENCES users(id)"),
            LineKind::Constraint("CONSTRAINT")
        );
    }

    #[test]
    fn test_columns_are_candidates() {
        assert_eq!(classify_line("`id` INT AUTO_INCREMENT PRIMARY KEY,"), LineKind::Candidate);
        assert_eq!(classify_line("key_name VARCHAR(10)"), LineKind::Candidate);
        assert_eq!(classify_line("FOREIGN KEY (a) REFERENCES b(a)"), LineKind::Candidate);
    }
}
