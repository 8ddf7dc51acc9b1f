// Frontend build step: copy index.html into the dist folder with the API
// URL constant rewritten. Injection strategies are tried in order until one
// reports a change; content with no match passes through unchanged.

use crate::logger;
use regex::{NoExpand, Regex};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "frontend/index.html";
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

// Literal marker some pages carry instead of a real assignment.
pub const PLACEHOLDER_TOKEN: &str = "__API_URL__";

// Ordered injection strategies. The assignment rewrite is primary; the
// placeholder replacement only runs when the regex produced zero matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectStrategy {
    ConstAssignment,
    PlaceholderToken,
}

const STRATEGIES: [InjectStrategy; 2] = [
    InjectStrategy::ConstAssignment,
    InjectStrategy::PlaceholderToken,
];

#[derive(Debug)]
pub struct BuildReport {
    pub output: PathBuf,
    pub api_url: String,
    // None when neither strategy matched and the file was copied through.
    pub strategy: Option<InjectStrategy>,
}

pub struct FrontendBuilder {
    input: PathBuf,
    output_dir: PathBuf,
    assign_re: Regex,
}

impl FrontendBuilder {
    pub fn new(input: PathBuf, output_dir: PathBuf) -> Self {
        // Matches: const API_URL = '...'; or "...", whitespace around `=`.
        let assign_re = Regex::new(r#"const API_URL\s*=\s*['"].*?['"];"#)
            .expect("valid api url assignment regex");
        Self {
            input,
            output_dir,
            assign_re,
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join("index.html")
    }

    // Read the input page, inject the URL, write the dist copy. Re-running
    // with the same arguments and input is byte-identical.
    pub fn build(&self, api_url: &str) -> crate::Result<BuildReport> {
        if !self.output_dir.exists() {
            fs::create_dir_all(&self.output_dir)?;
        }

        logger::debug(&format!("Build: reading {}", self.input.display()));
        let content = fs::read_to_string(&self.input)?;

        let (new_content, strategy) = self.inject(&content, api_url);
        match strategy {
            Some(s) => logger::debug(&format!("Build: injected via {:?}", s)),
            None => logger::debug("Build: no injection point found, copying through"),
        }

        let output = self.output_path();
        fs::write(&output, new_content)?;

        Ok(BuildReport {
            output,
            api_url: api_url.to_string(),
            strategy,
        })
    }

    // Try each strategy in order; the first one that changes the content
    // wins. Returns the original content when none match.
    pub fn inject(&self, content: &str, api_url: &str) -> (String, Option<InjectStrategy>) {
        for strategy in STRATEGIES {
            if let Some(changed) = self.apply(strategy, content, api_url) {
                return (changed, Some(strategy));
            }
        }
        (content.to_string(), None)
    }

    // One strategy applied to the original content. None means zero matches.
    // api_url is embedded verbatim with no escaping; a URL containing a
    // single quote corrupts the resulting statement silently.
    fn apply(&self, strategy: InjectStrategy, content: &str, api_url: &str) -> Option<String> {
        match strategy {
            InjectStrategy::ConstAssignment => {
                if !self.assign_re.is_match(content) {
                    return None;
                }
                let replacement = format!("const API_URL = '{}';", api_url);
                Some(
                    self.assign_re
                        .replace_all(content, NoExpand(&replacement))
                        .into_owned(),
                )
            }
            InjectStrategy::PlaceholderToken => {
                if !content.contains(PLACEHOLDER_TOKEN) {
                    return None;
                }
                Some(content.replace(PLACEHOLDER_TOKEN, api_url))
            }
        }
    }
}
