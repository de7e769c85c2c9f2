//! Code generation for unpacked trees.

use swc_common::{sync::Lrc, SourceMap};
use swc_ecma_ast as ast;
use swc_ecma_codegen::{text_writer::JsWriter, Emitter, Node};

use crate::error::UnpackError;

/// Print `script` as JavaScript. `source_map` must be the map the input was
/// parsed with, since nodes carried over from the bundle keep their spans.
pub fn print_script(
    script: &ast::Script,
    source_map: Lrc<SourceMap>,
    file: &str,
) -> Result<String, UnpackError> {
    let emit_err = |source: std::io::Error| UnpackError::Emit {
        file: file.to_string(),
        source,
    };

    let mut buf = Vec::new();
    {
        let writer = JsWriter::new(source_map.clone(), "\n", &mut buf, None);
        let mut emitter = Emitter {
            cfg: swc_ecma_codegen::Config::default().with_target(ast::EsVersion::latest()),
            cm: source_map,
            comments: None,
            wr: writer,
        };
        script.emit_with(&mut emitter).map_err(emit_err)?;
    }

    String::from_utf8(buf)
        .map_err(|e| emit_err(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
