/// A single line of an ignore file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreRule {
    /// Matches any candidate path containing it
    Literal(String),
    /// Shell-style pattern, expanded against the tree before walking
    Glob(String),
}

impl IgnoreRule {
    /// Parse one raw line; blank lines carry no rule
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\n', '\r']);

        if line.is_empty() {
            None
        } else if line.contains('*') {
            Some(IgnoreRule::Glob(line.to_string()))
        } else {
            Some(IgnoreRule::Literal(line.to_string()))
        }
    }

    /// Parse every rule of an ignore file's content, in file order
    pub fn parse_all(content: &str) -> Vec<Self> {
        content.split('\n').filter_map(Self::parse).collect()
    }

    pub fn as_str(&self) -> &str {
        match self {
            IgnoreRule::Literal(rule) | IgnoreRule::Glob(rule) => rule,
        }
    }
}
