//! Tree dump for debugging.

use crate::Node;

/// Dump layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpConfig {
    /// Deepest level whose children are still printed.
    pub max_depth: usize,
    /// Indentation for one level.
    pub indent: String,
    /// Levels of indentation added in front of every line.
    pub extra_depth: usize,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            indent: "  ".to_string(),
            extra_depth: 0,
        }
    }
}

impl DumpConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn extra_depth(mut self, depth: usize) -> Self {
        self.extra_depth = depth;
        self
    }
}

/// Render `node` as one `kind: text` line per node, children indented
/// below their parent. Children past `max_depth` collapse into a single
/// `[Children]` line. The result ends with a newline.
pub fn dump(node: &Node, config: &DumpConfig) -> String {
    let mut out = String::new();
    // Explicit stack of (node, depth); children pushed in reverse.
    let mut stack = vec![(node, 0usize)];
    while let Some((node, depth)) = stack.pop() {
        push_indent(&mut out, config, depth);
        out.push_str(node.kind().as_str());
        out.push_str(": ");
        out.push_str(&node.text().replace('\n', "\\n"));
        out.push('\n');

        if node.children().is_empty() {
            continue;
        }
        if depth >= config.max_depth {
            push_indent(&mut out, config, depth + 1);
            out.push_str("[Children]\n");
            continue;
        }
        for child in node.children().iter().rev() {
            stack.push((child, depth + 1));
        }
    }
    out
}

/// Like [`dump`], with the tree indented one level under `label`.
pub fn dump_labeled(node: &Node, label: &str, config: &DumpConfig) -> String {
    let nested = config.clone().extra_depth(config.extra_depth + 1);
    let mut out = String::with_capacity(label.len() + 1);
    out.push_str(label);
    out.push('\n');
    out.push_str(&dump(node, &nested));
    out
}

fn push_indent(out: &mut String, config: &DumpConfig, depth: usize) {
    for _ in 0..config.extra_depth + depth {
        out.push_str(&config.indent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapt;
    use lazynix_parser::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = DumpConfig::default();
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.indent, "  ");
        assert_eq!(config.extra_depth, 0);
    }

    #[test]
    fn test_dump_nested() {
        let source = "__add 1 2";
        let tree = parse(source).unwrap();
        let root = adapt(tree.cursor(), source);
        let doc = &root.children()[0];

        let expected = "\
Nix: __add 1 2
  Call: __add 1 2
    Call: __add 1
      Primop: __add
      Int: 1
    Int: 2
";
        assert_eq!(dump(doc, &DumpConfig::default()), expected);
    }

    #[test]
    fn test_dump_collapses_past_max_depth() {
        let source = "[ [ 1 ] ]";
        let tree = parse(source).unwrap();
        let root = adapt(tree.cursor(), source);
        let doc = &root.children()[0];

        let config = DumpConfig::new().max_depth(1).indent("-");
        assert_eq!(
            dump(doc, &config),
            "Nix: [ [ 1 ] ]\n-List: [ [ 1 ] ]\n--[Children]\n"
        );
    }

    #[test]
    fn test_dump_labeled_indents_under_label() {
        let source = "true";
        let tree = parse(source).unwrap();
        let root = adapt(tree.cursor(), source);
        let doc = &root.children()[0];

        assert_eq!(
            dump_labeled(doc, "result:", &DumpConfig::default()),
            "result:\n  Nix: true\n    TRUE: true\n"
        );
    }
}
