/// A literal search/replace pair applied to the raw text of an HTML file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub search: &'static str,
    pub replacement: &'static str,
}

/// Partial loaders that get a `?v=` query appended.
///
/// Every search string ends in the closing quote and paren, so a call that
/// already carries a query string never matches.
pub const RULES: &[Rule] = &[
    Rule {
        search: "fetch('/partials/header.html')",
        replacement: "fetch('/partials/header.html?v=' + Date.now())",
    },
    Rule {
        search: "fetch('/partials/footer.html')",
        replacement: "fetch('/partials/footer.html?v=' + Date.now())",
    },
    Rule {
        search: "fetch('../partials/header.html')",
        replacement: "fetch('../partials/header.html?v=' + Date.now())",
    },
    Rule {
        search: "fetch('../partials/footer.html')",
        replacement: "fetch('../partials/footer.html?v=' + Date.now())",
    },
    Rule {
        search: "fetch(\"/partials/header.html\")",
        replacement: "fetch(\"/partials/header.html?v=\" + Date.now())",
    },
    Rule {
        search: "fetch(\"/partials/footer.html\")",
        replacement: "fetch(\"/partials/footer.html?v=\" + Date.now())",
    },
    Rule {
        search: "fetch(\"../partials/header.html\")",
        replacement: "fetch(\"../partials/header.html?v=\" + Date.now())",
    },
    Rule {
        search: "fetch(\"../partials/footer.html\")",
        replacement: "fetch(\"../partials/footer.html?v=\" + Date.now())",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub applied: Vec<&'static Rule>,
}

impl Rewrite {
    pub fn changed(&self) -> bool {
        !self.applied.is_empty()
    }
}

/// Runs every rule over `content`.
///
/// A rule fires only when its search string is present and its replacement is
/// not, which keeps a second pass over already patched text a no-op.
pub fn apply(content: &str) -> Rewrite {
    let mut content = content.to_owned();
    let mut applied = Vec::new();
    for rule in RULES {
        if content.contains(rule.search) && !content.contains(rule.replacement) {
            content = content.replace(rule.search, rule.replacement);
            applied.push(rule);
        }
    }
    Rewrite { content, applied }
}
