//! Helpers shared by the golden-file harness.

use std::path::{Path, PathBuf};

use anyhow::Result;
use swc_common::{Span, DUMMY_SP};
use swc_ecma_ast as ast;
use swc_ecma_visit::{VisitMut, VisitMutWith};
use uw_ast::UnpackOptions;
use uw_parser::parse_bundle;
use uw_unpack::{print_script, render_bundle, unpack, UnpackOutcome};

pub fn fixtures_dir() -> PathBuf {
    // CARGO_MANIFEST_DIR is crates/uw_test/, so go up two levels to workspace root.
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
}

/// Fixture directories (those holding an `input.js`), sorted.
pub fn collect_cases(dir: &Path) -> Vec<PathBuf> {
    let mut cases = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.join("input.js").is_file() {
                cases.push(path);
            }
        }
    }
    cases.sort();
    cases
}

/// Options for a case: `options.json` next to `input.js`, or the defaults.
pub fn case_options(case: &Path) -> Result<UnpackOptions> {
    let path = case.join("options.json");
    if !path.exists() {
        return Ok(UnpackOptions::default());
    }
    Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
}

/// Run the whole pipeline and return `(file name, code)` pairs. A source
/// without a bundle produces no files.
pub fn run_pipeline(source: &str, filename: &str, options: &UnpackOptions) -> Result<Vec<(String, String)>> {
    let parsed = parse_bundle(source, filename)?;
    match unpack(&parsed.script, options)? {
        UnpackOutcome::Unpacked(bundle) => Ok(render_bundle(&bundle, &parsed.source_map)?
            .into_iter()
            .map(|file| (file.name, file.code))
            .collect()),
        UnpackOutcome::NoMatch(_) => Ok(Vec::new()),
    }
}

/// Reprint `code` with literal spellings dropped, so expected files can be
/// written by hand without matching the code generator's formatting.
pub fn normalize(code: &str, filename: &str) -> Result<String> {
    let mut parsed = parse_bundle(code, filename)?;
    parsed.script.visit_mut_with(&mut StripRaw);
    Ok(print_script(&parsed.script, parsed.source_map, filename)?)
}

/// Drops literal spellings and source positions.
struct StripRaw;

impl VisitMut for StripRaw {
    fn visit_mut_span(&mut self, span: &mut Span) {
        *span = DUMMY_SP;
    }

    fn visit_mut_str(&mut self, node: &mut ast::Str) {
        node.raw = None;
        node.visit_mut_children_with(self);
    }

    fn visit_mut_number(&mut self, node: &mut ast::Number) {
        node.raw = None;
        node.visit_mut_children_with(self);
    }
}
