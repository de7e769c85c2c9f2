use anyhow::Result;
use swc_common::{errors::Handler, sync::Lrc, FileName, SourceMap};
use swc_ecma_parser::{EsSyntax, Syntax};
use uw_ast::{EsVersion, Script};

/// Result of parsing a bundle file.
pub struct ParseResult {
    pub script: Script,
    /// Source map holding the parsed file; the code generator needs it to
    /// resolve spans of nodes carried over from the input.
    pub source_map: Lrc<SourceMap>,
}

/// Parse a JavaScript source string as a script.
///
/// Errors the parser recovered from are still reported and fail the parse,
/// so a tree is only returned for input that is valid as written.
pub fn parse_bundle(source: &str, filename: &str) -> Result<ParseResult> {
    let source_map: Lrc<SourceMap> = Default::default();
    let source_file = source_map.new_source_file(
        Lrc::new(FileName::Custom(filename.to_string())),
        source.to_string(),
    );

    let handler = Handler::with_emitter_writer(Box::new(std::io::stderr()), Some(source_map.clone()));

    let syntax = Syntax::Es(EsSyntax {
        jsx: filename.ends_with(".jsx"),
        ..Default::default()
    });

    let mut recovered = vec![];
    let script = swc_ecma_parser::parse_file_as_script(
        &source_file,
        syntax,
        EsVersion::latest(),
        None,
        &mut recovered,
    )
    .map_err(|e| {
        e.into_diagnostic(&handler).emit();
        anyhow::anyhow!("failed to parse {filename}")
    })?;

    if !recovered.is_empty() {
        let count = recovered.len();
        for e in recovered {
            e.into_diagnostic(&handler).emit();
        }
        anyhow::bail!("failed to parse {filename}: {count} syntax error(s)");
    }

    log::debug!("parsed {filename}: {} top-level statements", script.body.len());

    Ok(ParseResult { script, source_map })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_script() {
        let parsed = parse_bundle("var a = 1; a++;", "input.js").unwrap();
        assert_eq!(parsed.script.body.len(), 2);
    }

    #[test]
    fn parses_sloppy_mode_constructs() {
        // `with` is only legal in non-module code.
        let parsed = parse_bundle("with (o) { x = 1; }", "input.js").unwrap();
        assert_eq!(parsed.script.body.len(), 1);
    }

    #[test]
    fn rejects_invalid_source() {
        assert!(parse_bundle("function (", "broken.js").is_err());
    }
}
