use swc_common::{sync::Lrc, SourceMap, Span, DUMMY_SP};
use swc_ecma_ast as ast;
use swc_ecma_visit::{VisitMut, VisitMutWith};
use uw_parser::{parse_bundle, ParseResult};

pub(crate) fn parse(src: &str) -> ParseResult {
    parse_bundle(src, "test.js").expect("test source should parse")
}

pub(crate) fn emit(script: &ast::Script, source_map: &Lrc<SourceMap>) -> String {
    crate::print_script(script, source_map.clone(), "test.js").expect("codegen")
}

/// Reprint `src` so that formatting and literal spelling do not matter when
/// comparing generated code.
pub(crate) fn normalize(src: &str) -> String {
    let mut parsed = parse(src);
    parsed.script.visit_mut_with(&mut StripRaw);
    emit(&parsed.script, &parsed.source_map)
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
