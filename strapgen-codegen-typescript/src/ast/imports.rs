//! TypeScript import builder.

use strapgen_codegen::{CodeFragment, ImportCollector, Renderable};

/// Builder for named TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// One import per module in the collector, in first-seen order.
    pub fn from_collector(imports: &ImportCollector) -> Vec<Import> {
        imports
            .iter()
            .map(|(module, symbols)| {
                symbols
                    .iter()
                    .fold(Import::new(module), |import, symbol| import.named(symbol))
            })
            .collect()
    }

    fn statement(&self) -> String {
        if self.named.is_empty() {
            format!("import \"{}\";", self.from)
        } else {
            format!(
                "import {{ {} }} from \"{}\";",
                self.named.join(", "),
                self.from
            )
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}
