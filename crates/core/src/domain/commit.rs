/// A single commit as reported by a log query: abbreviated hash plus subject line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub hash: String,
    pub subject: String,
}

impl Commit {
    pub fn new(hash: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            subject: subject.into(),
        }
    }

    /// Parse a `<hash> <subject>` log line.
    ///
    /// The line is split once on the first whitespace run: the first token is
    /// the hash, the remainder (trimmed) is the subject. Blank lines yield `None`;
    /// a lone hash is kept with an empty subject so commits without a subject
    /// still count.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        match line.split_once(char::is_whitespace) {
            Some((hash, subject)) => Some(Self::new(hash, subject.trim_start())),
            None => Some(Self::new(line, "")),
        }
    }

    /// Parse every line of a log query, skipping lines that carry no commit
    pub fn parse_lines<I, S>(lines: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .filter_map(|line| Self::parse_line(line.as_ref()))
            .collect()
    }
}

impl std::fmt::Display for Commit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.hash, self.subject)
    }
}
