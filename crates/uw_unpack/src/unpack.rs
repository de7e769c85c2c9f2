//! Top-level unpacking entry point.
//!
//! Detection is recoverable: a tree without a bundle yields
//! `UnpackOutcome::NoMatch`. Problems found after a match abort the run.

use std::collections::HashSet;

use swc_ecma_ast as ast;
use uw_ast::UnpackOptions;

use crate::detect::detect;
use crate::error::{NoMatch, UnpackError};
use crate::loader::build_loader;
use crate::module::TransformedModule;
use crate::params::as_index;

#[derive(Debug)]
pub enum UnpackOutcome {
    Unpacked(UnpackedBundle),
    NoMatch(NoMatch),
}

/// The loader replacement plus one script per module, ordered by id.
#[derive(Debug, Clone)]
pub struct UnpackedBundle {
    pub utils_name: String,
    pub entry_module: usize,
    pub index: ast::Script,
    pub modules: Vec<TransformedModule>,
    pub additional_candidates: usize,
}

/// Detect the bundle in `script` and rewrite it into standalone files.
pub fn unpack(script: &ast::Script, options: &UnpackOptions) -> Result<UnpackOutcome, UnpackError> {
    let bundle = match detect(script) {
        Ok(bundle) => bundle,
        Err(reason) => {
            log::info!("nothing to unpack: {reason}");
            return Ok(UnpackOutcome::NoMatch(reason));
        }
    };

    if bundle.additional_candidates > 0 {
        log::warn!(
            "found {} more bundle wrapper(s); only the first one is unpacked",
            bundle.additional_candidates
        );
    }

    let index = build_loader(&bundle.utils_name, &bundle.utility_block, bundle.entry_module);

    let emitted: HashSet<usize> = bundle.modules.iter().map(|m| m.id).collect();
    if !emitted.contains(&bundle.entry_module) {
        dangling(options, UnpackError::EntryNotEmitted(bundle.entry_module))?;
    }

    let modules: Vec<TransformedModule> = bundle
        .modules
        .into_iter()
        .map(|module| module.into_file(options))
        .collect();

    for module in &modules {
        for &target in &module.required_ids {
            if !as_index(target).is_some_and(|id| emitted.contains(&id)) {
                dangling(
                    options,
                    UnpackError::DanglingRequire {
                        module: module.id,
                        target,
                    },
                )?;
            }
        }
    }

    log::info!("unpacked {} module(s)", modules.len());

    Ok(UnpackOutcome::Unpacked(UnpackedBundle {
        utils_name: bundle.utils_name,
        entry_module: bundle.entry_module,
        index,
        modules,
        additional_candidates: bundle.additional_candidates,
    }))
}

fn dangling(options: &UnpackOptions, err: UnpackError) -> Result<(), UnpackError> {
    if options.allow_dangling {
        log::warn!("{err}");
        Ok(())
    } else {
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{emit, normalize, parse};
    use pretty_assertions::assert_eq;

    fn unpacked(outcome: UnpackOutcome) -> UnpackedBundle {
        match outcome {
            UnpackOutcome::Unpacked(bundle) => bundle,
            UnpackOutcome::NoMatch(reason) => panic!("no match: {reason}"),
        }
    }

    #[test]
    fn end_to_end_example() {
        let parsed = parse(
            "!function (e) {
                function u(r) {}
                u.helper = function () {}, u(u.s = 0);
            }([
                function (module, exports, require) { require(1); module.exports = 5; },
                function (module, exports) { exports.x = 1; }
            ]);",
        );
        let bundle = unpacked(unpack(&parsed.script, &UnpackOptions::default()).unwrap());
        let cm = &parsed.source_map;

        assert_eq!(bundle.utils_name, "u");
        assert_eq!(bundle.entry_module, 0);
        assert_eq!(
            normalize(&emit(&bundle.index, cm)),
            normalize(
                "function u() {}
                 u.helper = function () {};
                 module.exports = u;
                 require('./module0');"
            )
        );

        assert_eq!(bundle.modules.len(), 2);
        assert_eq!(
            normalize(&emit(&bundle.modules[0].script, cm)),
            normalize("require('./module1'); module.exports = 5;")
        );
        assert_eq!(
            normalize(&emit(&bundle.modules[1].script, cm)),
            normalize("exports.x = 1;")
        );
    }

    #[test]
    fn no_bundle_is_a_no_match() {
        let parsed = parse("console.log(1);");
        let outcome = unpack(&parsed.script, &UnpackOptions::default()).unwrap();
        assert!(matches!(outcome, UnpackOutcome::NoMatch(NoMatch::NoWrapper)));
    }

    #[test]
    fn dangling_require_is_an_error() {
        let parsed = parse(
            "!function (e) { n.a = function () {}, n(n.s = 0); }([function (e, t, n) { n(7); }]);",
        );
        let err = unpack(&parsed.script, &UnpackOptions::default()).unwrap_err();
        assert!(matches!(err, UnpackError::DanglingRequire { module: 0, target } if target == 7.0));
    }

    #[test]
    fn dangling_require_can_be_allowed() {
        let parsed = parse(
            "!function (e) { n.a = function () {}, n(n.s = 0); }([function (e, t, n) { n(7); }]);",
        );
        let options = UnpackOptions {
            allow_dangling: true,
            ..Default::default()
        };
        let bundle = unpacked(unpack(&parsed.script, &options).unwrap());
        assert_eq!(bundle.modules[0].required_ids, [7.0]);
    }

    #[test]
    fn entry_outside_the_array_is_an_error() {
        let parsed = parse("!function (e) { n.a = function () {}, n(n.s = 3); }([function () {}]);");
        let err = unpack(&parsed.script, &UnpackOptions::default()).unwrap_err();
        assert!(matches!(err, UnpackError::EntryNotEmitted(3)));
    }

    #[test]
    fn modules_are_ordered_by_id() {
        let parsed = parse(
            "!function (e) { n.a = function () {}, n(n.s = 2); }([function () {}, function () {}, function (e, t, n) { n(0); n(1); }]);",
        );
        let bundle = unpacked(unpack(&parsed.script, &UnpackOptions::default()).unwrap());
        let ids: Vec<usize> = bundle.modules.iter().map(|m| m.id).collect();
        assert_eq!(ids, [0, 1, 2]);
        assert_eq!(bundle.modules[2].required_ids, [0.0, 1.0]);
    }
}
