/// Rendering rule that turns a lyric into a fake line of source code.
///
/// Variant order matters: lines are assigned a template by
/// `line_index % CodeTemplate::ALL.len()`, so reordering changes which lyric
/// receives which style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeTemplate {
    ConsoleLog,
    ConstMemory,
    IfFeeling,
    LineComment,
    ThrowError,
    UnderstandFunction,
    AwaitPromise,
    EmotionClass,
    ImportFromPast,
    ExportReality,
}

impl CodeTemplate {
    pub const ALL: [CodeTemplate; 10] = [
        CodeTemplate::ConsoleLog,
        CodeTemplate::ConstMemory,
        CodeTemplate::IfFeeling,
        CodeTemplate::LineComment,
        CodeTemplate::ThrowError,
        CodeTemplate::UnderstandFunction,
        CodeTemplate::AwaitPromise,
        CodeTemplate::EmotionClass,
        CodeTemplate::ImportFromPast,
        CodeTemplate::ExportReality,
    ];

    /// Picks the template for the physical line at `line_index`.
    pub fn for_line(line_index: usize) -> Self {
        Self::ALL[line_index % Self::ALL.len()]
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            CodeTemplate::ConsoleLog => format!("console.log(\"{text}\");"),
            CodeTemplate::ConstMemory => format!("const memory = \"{text}\";"),
            CodeTemplate::IfFeeling => format!("if (feeling) {{\n  return \"{text}\";\n}}"),
            CodeTemplate::LineComment => format!("// {text}"),
            CodeTemplate::ThrowError => format!("throw new Error(\"{text}\");"),
            CodeTemplate::UnderstandFunction => {
                format!("function understand() {{\n  yield \"{text}\";\n}}")
            }
            CodeTemplate::AwaitPromise => {
                format!("await new Promise(resolve => resolve(\"{text}\"));")
            }
            CodeTemplate::EmotionClass => format!(
                "class Emotion extends Heart {{\n  constructor() {{\n    super(\"{text}\");\n  }}\n}}"
            ),
            CodeTemplate::ImportFromPast => {
                // Identifiers cannot contain whitespace.
                let ident: String = text.split_whitespace().collect();
                format!("import {{ {ident} }} from 'past';")
            }
            CodeTemplate::ExportReality => format!("export const reality = \"{text}\";"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_wraps_around() {
        assert_eq!(CodeTemplate::for_line(0), CodeTemplate::ConsoleLog);
        assert_eq!(CodeTemplate::for_line(9), CodeTemplate::ExportReality);
        assert_eq!(CodeTemplate::for_line(10), CodeTemplate::ConsoleLog);
        assert_eq!(CodeTemplate::for_line(23), CodeTemplate::LineComment);
    }

    #[test]
    fn renders_multi_line_templates() {
        assert_eq!(
            CodeTemplate::IfFeeling.apply("go"),
            "if (feeling) {\n  return \"go\";\n}"
        );
        assert_eq!(
            CodeTemplate::EmotionClass.apply("hi"),
            "class Emotion extends Heart {\n  constructor() {\n    super(\"hi\");\n  }\n}"
        );
    }

    #[test]
    fn import_strips_all_whitespace() {
        assert_eq!(
            CodeTemplate::ImportFromPast.apply("we were  young\tonce"),
            "import { wewereyoungonce } from 'past';"
        );
    }
}
