use serde::{Deserialize, Serialize};

/// Presentation tag the rendering layer uses to pick a colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Comment,
    Log,
    Var,
    Func,
    Class,
    Error,
}

impl Category {
    /// Tags a rendered snippet. Rules are checked in order and the first
    /// match wins; anything unmatched is a [`Category::Var`].
    pub fn classify(snippet: &str) -> Self {
        RULES
            .iter()
            .find(|(rule, _)| rule.matches(snippet))
            .map(|(_, category)| *category)
            .unwrap_or(Category::Var)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::Log => "log",
            Category::Var => "var",
            Category::Func => "func",
            Category::Class => "class",
            Category::Error => "error",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    Prefix(&'static str),
    Contains(&'static str),
}

impl Rule {
    fn matches(self, snippet: &str) -> bool {
        match self {
            Rule::Prefix(prefix) => snippet.starts_with(prefix),
            Rule::Contains(needle) => snippet.contains(needle),
        }
    }
}

const RULES: [(Rule, Category); 5] = [
    (Rule::Prefix("//"), Category::Comment),
    (Rule::Contains("console.log"), Category::Log),
    (Rule::Contains("throw"), Category::Error),
    (Rule::Contains("class"), Category::Class),
    (Rule::Contains("function"), Category::Func),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyrics::CodeTemplate;

    #[test]
    fn each_template_family_maps_to_its_tag() {
        let tags: Vec<Category> = CodeTemplate::ALL
            .iter()
            .map(|template| Category::classify(&template.apply("la la")))
            .collect();

        assert_eq!(
            tags,
            vec![
                Category::Log,
                Category::Var,
                Category::Var,
                Category::Comment,
                Category::Error,
                Category::Func,
                Category::Var,
                Category::Class,
                Category::Var,
                Category::Var,
            ]
        );
    }

    #[test]
    fn earlier_rules_take_priority() {
        // A logged lyric mentioning "throw" is still a log line.
        assert_eq!(
            Category::classify("console.log(\"throw it away\");"),
            Category::Log
        );
        assert_eq!(Category::classify("// class dismissed"), Category::Comment);
    }

    #[test]
    fn lyric_text_can_change_the_tag() {
        let snippet = CodeTemplate::ConstMemory.apply("first class ticket");
        assert_eq!(Category::classify(&snippet), Category::Class);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Category::Func).unwrap();
        assert_eq!(json, "\"func\"");
    }
}
