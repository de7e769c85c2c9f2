//! Module transformer: turns one function of the bundle's module array into
//! a standalone CommonJS script.
//!
//! `function (e, t, n) { n(3); e.exports = n.x; }` becomes
//!
//! ```js
//! const utils = require('./index.js');
//! require('./module3');
//! module.exports = utils.x;
//! ```

use std::collections::{BTreeSet, HashMap, HashSet};

use swc_common::DUMMY_SP;
use swc_ecma_ast as ast;
use swc_ecma_visit::{VisitMut, VisitMutWith};
use uw_ast::{module_specifier, ParamRole, UnpackOptions, INDEX_SPECIFIER};

use crate::params::{as_number, single_arg, unparen, ParamBindings};
use crate::scope::{
    block_scoped_decl, function_bindings, hoisted_bindings, lexical_bindings, pat_bindings, var_bindings,
};

/// One module extracted from the bundle.
#[derive(Debug, Clone)]
pub struct BundledModule {
    /// Position in the bundle's module array.
    pub id: usize,
    pub bindings: ParamBindings,
    pub body: Vec<ast::Stmt>,
}

/// A module rewritten as its own file.
#[derive(Debug, Clone)]
pub struct TransformedModule {
    pub id: usize,
    pub script: ast::Script,
    /// Targets of every rewritten numeric require, in source order.
    pub required_ids: Vec<f64>,
    /// Whether the `utils = require('./index.js')` import was prepended.
    pub references_utils: bool,
}

impl BundledModule {
    pub fn new(id: usize, function: &ast::Function) -> Self {
        Self {
            id,
            bindings: ParamBindings::from_params(&function.params),
            body: function
                .body
                .as_ref()
                .map(|body| body.stmts.clone())
                .unwrap_or_default(),
        }
    }

    /// Rewrite the module body into a standalone script.
    pub fn into_file(self, options: &UnpackOptions) -> TransformedModule {
        let BundledModule { id, bindings, body } = self;

        let original = ast::Script {
            span: DUMMY_SP,
            body,
            shebang: None,
        };

        let mut script = original.clone();
        let mut rewriter = ModuleRewriter::new(&bindings, options.resolve_scopes, HashMap::new());
        rewriter.rewrite(&mut script);

        // A renamed reference landed in a scope that declares its new name.
        // Start over with those declarations moved aside.
        if !rewriter.captures.is_empty() {
            let renames = rewriter.fresh_names();
            for ((_, name), fresh) in &renames {
                log::debug!("module {id}: inner `{name}` renamed to `{fresh}`");
            }
            script = original;
            rewriter = ModuleRewriter::new(&bindings, options.resolve_scopes, renames);
            rewriter.rewrite(&mut script);
        }

        let ModuleRewriter {
            required_ids,
            references_utils,
            ..
        } = rewriter;

        if references_utils {
            // After the directive prologue, so `"use strict"` stays a directive.
            let at = script
                .body
                .iter()
                .take_while(|stmt| is_directive(stmt))
                .count();
            let import = utils_import(&script.body);
            script.body.insert(at, import);
        }

        log::debug!(
            "module {id}: {} require(s) rewritten, utils {}",
            required_ids.len(),
            if references_utils { "imported" } else { "unused" }
        );

        TransformedModule {
            id,
            script,
            required_ids,
            references_utils,
        }
    }
}

/// Visitor that rewrites numeric requires and renames parameter bindings.
///
/// With `resolve_scopes` set, names re-declared by a nested scope are
/// shadowed for the extent of that scope and left alone. Declarations of the
/// names the rewrite introduces (`module`, `exports`, `utils`, `require`) are
/// tracked as well: a rename landing inside one is recorded in `captures`,
/// and a second pass renames that declaration to a fresh name.
struct ModuleRewriter<'a> {
    bindings: &'a ParamBindings,
    resolve_scopes: bool,
    /// Binding names currently shadowed, with their nesting depth.
    shadowed: HashMap<String, usize>,
    /// Enclosing declarations of introduced names, innermost last.
    inner: HashMap<String, Vec<InnerBinding>>,
    /// Declarations to rename, by scope number and name.
    renames: HashMap<(usize, String), String>,
    next_scope: usize,
    captures: BTreeSet<(usize, String)>,
    /// Every identifier name in the body before renaming.
    seen: HashSet<String>,
    required_ids: Vec<f64>,
    references_utils: bool,
}

/// A nested declaration of a name the rewrite introduces.
struct InnerBinding {
    scope: usize,
    renamed: Option<String>,
}

/// Names a rewritten file refers to as free variables.
fn is_introduced(name: &str) -> bool {
    name == "require" || ParamRole::ALL.iter().any(|role| role.ambient_name() == name)
}

impl<'a> ModuleRewriter<'a> {
    fn new(
        bindings: &'a ParamBindings,
        resolve_scopes: bool,
        renames: HashMap<(usize, String), String>,
    ) -> Self {
        Self {
            bindings,
            resolve_scopes,
            shadowed: HashMap::new(),
            inner: HashMap::new(),
            renames,
            next_scope: 0,
            captures: BTreeSet::new(),
            seen: HashSet::new(),
            required_ids: Vec::new(),
            references_utils: false,
        }
    }

    /// Rewrite a module body. Its top level is the module function's own
    /// scope: a function declaration there replaces the parameter of the same
    /// name, while a `var` of a parameter's name is the parameter itself.
    fn rewrite(&mut self, script: &mut ast::Script) {
        let mut names = lexical_bindings(&script.body);
        names.extend(
            var_bindings(&script.body)
                .into_iter()
                .filter(|name| self.bindings.role_of(name).is_none()),
        );
        self.scoped(names, |this| {
            script.visit_mut_children_with(this);
            // The utils import calls `require` from the top level.
            if this.references_utils {
                this.note_capture("require");
            }
        });
    }

    /// Fresh names for every captured declaration, avoiding any name the
    /// body already uses.
    fn fresh_names(&self) -> HashMap<(usize, String), String> {
        let mut taken = self.seen.clone();
        let mut renames = HashMap::new();
        for (scope, name) in &self.captures {
            let mut n = 1;
            let fresh = loop {
                let candidate = format!("{name}{n}");
                if !taken.contains(&candidate) {
                    break candidate;
                }
                n += 1;
            };
            taken.insert(fresh.clone());
            renames.insert((*scope, name.clone()), fresh);
        }
        renames
    }

    /// The parameter role an occurrence of `name` refers to here.
    fn resolve(&self, name: &str) -> Option<ParamRole> {
        if self.shadowed.contains_key(name) {
            return None;
        }
        self.bindings.role_of(name)
    }

    /// The fresh name of the innermost declaration of `name`, when that
    /// declaration is being moved aside.
    fn inner_rename(&self, name: &str) -> Option<&str> {
        self.inner.get(name)?.last()?.renamed.as_deref()
    }

    /// Whether an occurrence of `name` here is rewritten.
    fn is_renamed(&self, name: &str) -> bool {
        self.inner_rename(name).is_some() || self.resolve(name).is_some()
    }

    /// A reference is about to be rewritten to `target`; record the inner
    /// declaration it would resolve to, if any.
    fn note_capture(&mut self, target: &str) {
        if let Some(binding) = self.inner.get(target).and_then(|stack| stack.last()) {
            if binding.renamed.is_none() {
                self.captures.insert((binding.scope, target.to_string()));
            }
        }
    }

    /// Run `f` with `names` declared by a new scope: they shadow any parameter
    /// binding of the same name.
    fn scoped(&mut self, names: Vec<String>, f: impl FnOnce(&mut Self)) {
        let scope = self.next_scope;
        self.next_scope += 1;
        if !self.resolve_scopes {
            f(self);
            return;
        }

        let mut shadows = Vec::new();
        let mut introduced = Vec::new();
        for name in names {
            if is_introduced(&name) {
                let renamed = self.renames.get(&(scope, name.clone())).cloned();
                self.inner
                    .entry(name.clone())
                    .or_default()
                    .push(InnerBinding { scope, renamed });
                introduced.push(name.clone());
            }
            if self.bindings.role_of(&name).is_some() {
                *self.shadowed.entry(name.clone()).or_default() += 1;
                shadows.push(name);
            }
        }

        f(self);

        for name in &introduced {
            if let Some(stack) = self.inner.get_mut(name) {
                stack.pop();
                if stack.is_empty() {
                    self.inner.remove(name);
                }
            }
        }
        for name in &shadows {
            if let Some(depth) = self.shadowed.get_mut(name) {
                *depth -= 1;
                if *depth == 0 {
                    self.shadowed.remove(name);
                }
            }
        }
    }

    /// `N` for a call `require(N)` whose callee is the module's own require
    /// binding and whose only argument is a numeric literal.
    fn numeric_require_target(&self, expr: &ast::Expr) -> Option<f64> {
        let ast::Expr::Call(call) = expr else {
            return None;
        };
        let ast::Callee::Expr(callee) = &call.callee else {
            return None;
        };
        let ast::Expr::Ident(ident) = unparen(callee) else {
            return None;
        };
        if self.resolve(&ident.sym) != Some(ParamRole::Require) {
            return None;
        }
        as_number(single_arg(call)?)
    }
}

impl VisitMut for ModuleRewriter<'_> {
    fn visit_mut_expr(&mut self, expr: &mut ast::Expr) {
        if let Some(target) = self.numeric_require_target(expr) {
            // The replacement is final: its `require` must not be renamed.
            self.note_capture("require");
            *expr = require_call(&module_specifier(target));
            self.required_ids.push(target);
            return;
        }
        expr.visit_mut_children_with(self);
    }

    fn visit_mut_ident(&mut self, ident: &mut ast::Ident) {
        self.seen.insert(ident.sym.to_string());
        if let Some(fresh) = self.inner_rename(&ident.sym) {
            ident.sym = fresh.into();
            return;
        }
        if let Some(role) = self.resolve(&ident.sym) {
            let target = role.ambient_name();
            if &*ident.sym != target {
                self.note_capture(target);
            }
            ident.sym = target.into();
            if role == ParamRole::Require {
                self.references_utils = true;
            }
        }
    }

    fn visit_mut_prop(&mut self, prop: &mut ast::Prop) {
        // `{ e }` would become `{ module }`; keep the key and rename the value.
        if let ast::Prop::Shorthand(ident) = prop {
            if self.is_renamed(&ident.sym) {
                *prop = ast::Prop::KeyValue(ast::KeyValueProp {
                    key: ast::PropName::Ident(ast::IdentName::new(ident.sym.clone(), ident.span)),
                    value: Box::new(ast::Expr::Ident(ident.clone())),
                });
            }
        }
        prop.visit_mut_children_with(self);
    }

    fn visit_mut_object_pat_prop(&mut self, prop: &mut ast::ObjectPatProp) {
        if let ast::ObjectPatProp::Assign(assign) = prop {
            if self.is_renamed(&assign.key.id.sym) {
                let key = ast::PropName::Ident(ast::IdentName::new(
                    assign.key.id.sym.clone(),
                    assign.key.id.span,
                ));
                let binding = ast::Pat::Ident(assign.key.clone());
                let value = match assign.value.take() {
                    Some(default) => ast::Pat::Assign(ast::AssignPat {
                        span: assign.span,
                        left: Box::new(binding),
                        right: default,
                    }),
                    None => binding,
                };
                *prop = ast::ObjectPatProp::KeyValue(ast::KeyValuePatProp {
                    key,
                    value: Box::new(value),
                });
            }
        }
        prop.visit_mut_children_with(self);
    }

    fn visit_mut_function(&mut self, node: &mut ast::Function) {
        let names = function_bindings(node.params.iter().map(|p| &p.pat), node.body.as_ref());
        self.scoped(names, |this| node.visit_mut_children_with(this));
    }

    fn visit_mut_arrow_expr(&mut self, node: &mut ast::ArrowExpr) {
        let body = match &*node.body {
            ast::BlockStmtOrExpr::BlockStmt(block) => Some(block),
            _ => None,
        };
        let names = function_bindings(node.params.iter(), body);
        self.scoped(names, |this| node.visit_mut_children_with(this));
    }

    fn visit_mut_constructor(&mut self, node: &mut ast::Constructor) {
        let params = node.params.iter().filter_map(|param| match param {
            ast::ParamOrTsParamProp::Param(param) => Some(&param.pat),
            _ => None,
        });
        let names = function_bindings(params, node.body.as_ref());
        self.scoped(names, |this| node.visit_mut_children_with(this));
    }

    fn visit_mut_getter_prop(&mut self, node: &mut ast::GetterProp) {
        let names = function_bindings(std::iter::empty(), node.body.as_ref());
        self.scoped(names, |this| node.visit_mut_children_with(this));
    }

    fn visit_mut_setter_prop(&mut self, node: &mut ast::SetterProp) {
        let params = std::iter::once(&*node.param).chain(node.this_param.as_ref());
        let names = function_bindings(params, node.body.as_ref());
        self.scoped(names, |this| node.visit_mut_children_with(this));
    }

    fn visit_mut_fn_expr(&mut self, node: &mut ast::FnExpr) {
        let names = node.ident.iter().map(|i| i.sym.to_string()).collect();
        self.scoped(names, |this| node.visit_mut_children_with(this));
    }

    fn visit_mut_class_expr(&mut self, node: &mut ast::ClassExpr) {
        let names = node.ident.iter().map(|i| i.sym.to_string()).collect();
        self.scoped(names, |this| node.visit_mut_children_with(this));
    }

    fn visit_mut_block_stmt(&mut self, node: &mut ast::BlockStmt) {
        let names = lexical_bindings(&node.stmts);
        self.scoped(names, |this| node.visit_mut_children_with(this));
    }

    fn visit_mut_static_block(&mut self, node: &mut ast::StaticBlock) {
        let names = hoisted_bindings(&node.body);
        self.scoped(names, |this| node.visit_mut_children_with(this));
    }

    fn visit_mut_for_stmt(&mut self, node: &mut ast::ForStmt) {
        let names = match &node.init {
            Some(ast::VarDeclOrExpr::VarDecl(var)) => block_scoped_decl(var),
            _ => Vec::new(),
        };
        self.scoped(names, |this| node.visit_mut_children_with(this));
    }

    fn visit_mut_for_in_stmt(&mut self, node: &mut ast::ForInStmt) {
        let names = match &node.left {
            ast::ForHead::VarDecl(var) => block_scoped_decl(var),
            _ => Vec::new(),
        };
        self.scoped(names, |this| node.visit_mut_children_with(this));
    }

    fn visit_mut_for_of_stmt(&mut self, node: &mut ast::ForOfStmt) {
        let names = match &node.left {
            ast::ForHead::VarDecl(var) => block_scoped_decl(var),
            _ => Vec::new(),
        };
        self.scoped(names, |this| node.visit_mut_children_with(this));
    }

    fn visit_mut_catch_clause(&mut self, node: &mut ast::CatchClause) {
        let mut names = Vec::new();
        if let Some(param) = &node.param {
            pat_bindings(param, &mut names);
        }
        self.scoped(names, |this| node.visit_mut_children_with(this));
    }

    fn visit_mut_switch_stmt(&mut self, node: &mut ast::SwitchStmt) {
        node.discriminant.visit_mut_with(self);
        let names = node
            .cases
            .iter()
            .flat_map(|case| lexical_bindings(&case.cons))
            .collect();
        self.scoped(names, |this| node.cases.visit_mut_with(this));
    }

    // Labels live in their own namespace.
    fn visit_mut_labeled_stmt(&mut self, node: &mut ast::LabeledStmt) {
        node.body.visit_mut_with(self);
    }

    fn visit_mut_break_stmt(&mut self, _: &mut ast::BreakStmt) {}

    fn visit_mut_continue_stmt(&mut self, _: &mut ast::ContinueStmt) {}
}

/// Build `require('<specifier>')`.
pub(crate) fn require_call(specifier: &str) -> ast::Expr {
    ast::Expr::Call(ast::CallExpr {
        span: DUMMY_SP,
        callee: ast::Callee::Expr(Box::new(ast::Expr::Ident(ast::Ident::new_no_ctxt(
            "require".into(),
            DUMMY_SP,
        )))),
        args: vec![ast::ExprOrSpread {
            spread: None,
            expr: Box::new(ast::Expr::Lit(ast::Lit::Str(ast::Str {
                span: DUMMY_SP,
                value: specifier.into(),
                raw: None,
            }))),
        }],
        type_args: None,
        ..Default::default()
    })
}

fn is_directive(stmt: &ast::Stmt) -> bool {
    matches!(stmt, ast::Stmt::Expr(stmt) if matches!(&*stmt.expr, ast::Expr::Lit(ast::Lit::Str(_))))
}

/// Build `const utils = require('./index.js');`. It is a `var` when `body`
/// also hoists a `utils`, as a rewritten `var n = n || {}` does.
fn utils_import(body: &[ast::Stmt]) -> ast::Stmt {
    let name = ParamRole::Require.ambient_name();
    let mut hoisted = var_bindings(body).into_iter().chain(body.iter().filter_map(|stmt| match stmt {
        ast::Stmt::Decl(ast::Decl::Fn(decl)) => Some(decl.ident.sym.to_string()),
        _ => None,
    }));
    let kind = if hoisted.any(|hoisted| hoisted == name) {
        ast::VarDeclKind::Var
    } else {
        ast::VarDeclKind::Const
    };

    let declarator = ast::VarDeclarator {
        span: DUMMY_SP,
        name: ast::Pat::Ident(ast::BindingIdent {
            id: ast::Ident::new_no_ctxt(name.into(), DUMMY_SP),
            type_ann: None,
        }),
        init: Some(Box::new(require_call(INDEX_SPECIFIER))),
        definite: false,
    };

    ast::Stmt::Decl(ast::Decl::Var(Box::new(ast::VarDecl {
        span: DUMMY_SP,
        kind,
        declare: false,
        decls: vec![declarator],
        ..Default::default()
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::as_fn_expr;
    use crate::test_util::{emit, normalize, parse};
    use pretty_assertions::assert_eq;
    use swc_common::{sync::Lrc, SourceMap};

    struct Case {
        module: TransformedModule,
        source_map: Lrc<SourceMap>,
    }

    impl std::ops::Deref for Case {
        type Target = TransformedModule;

        fn deref(&self) -> &TransformedModule {
            &self.module
        }
    }

    /// Parse `(function (...) {...});` and transform it as module 0.
    fn transform_with(src: &str, options: &UnpackOptions) -> Case {
        let parsed = parse(src);
        let ast::Stmt::Expr(stmt) = &parsed.script.body[0] else {
            panic!("expected an expression statement");
        };
        let function = &as_fn_expr(&stmt.expr).expect("function expression").function;
        Case {
            module: BundledModule::new(0, function).into_file(options),
            source_map: parsed.source_map,
        }
    }

    fn transform(src: &str) -> Case {
        transform_with(src, &UnpackOptions::default())
    }

    fn assert_output(case: &Case, expected: &str) {
        assert_eq!(
            normalize(&emit(&case.script, &case.source_map)),
            normalize(expected)
        );
    }

    #[test]
    fn rewrites_numeric_requires() {
        let module = transform("(function (e, t, n) { var a = n(3); n(0).x(); });");
        assert_output(
            &module,
            "var a = require('./module3'); require('./module0').x();",
        );
        assert_eq!(module.required_ids, [3.0, 0.0]);
        assert!(!module.references_utils);
    }

    #[test]
    fn renames_module_and_exports() {
        let module = transform("(function (e, t) { e.exports = t; t.a = 1; });");
        assert_output(&module, "module.exports = exports; exports.a = 1;");
    }

    #[test]
    fn other_require_uses_become_utils() {
        let module = transform("(function (e, t, n) { n.r(t); var o = n(2); n.d(t, 'a', o); });");
        assert!(module.references_utils);
        assert_output(
            &module,
            "const utils = require('./index.js'); utils.r(exports); var o = require('./module2'); utils.d(exports, 'a', o);",
        );
    }

    #[test]
    fn non_numeric_and_foreign_calls_are_untouched() {
        let module = transform("(function (e, t, n) { n('x'); n(1, 2); r(1); n(...a); });");
        assert!(module.required_ids.is_empty());
        assert_output(
            &module,
            "const utils = require('./index.js'); utils('x'); utils(1, 2); r(1); utils(...a);",
        );
    }

    #[test]
    fn zero_params_leave_body_alone() {
        let module = transform("(function () { e.exports = n(1); });");
        assert!(module.required_ids.is_empty());
        assert!(!module.references_utils);
        assert_output(&module, "e.exports = n(1);");
    }

    #[test]
    fn property_names_are_not_renamed() {
        let module = transform("(function (e, t) { t.e = e.t; var o = { t: 1 }; });");
        assert_output(&module, "exports.e = module.t; var o = { t: 1 };");
    }

    #[test]
    fn shorthand_keeps_its_key() {
        let module = transform("(function (e, t) { var o = { t }; var { e } = o; });");
        assert_output(
            &module,
            "var o = { t: exports }; var { e: module } = o;",
        );
    }

    #[test]
    fn shorthand_pattern_with_default_keeps_its_key() {
        let module = transform("(function (e, t) { ({ t = 1 } = o); });");
        assert_output(&module, "({ t: exports = 1 } = o);");
    }

    #[test]
    fn shadowed_names_are_left_alone() {
        let module = transform(
            "(function (e, t, n) {
                function f(e) { return e + t; }
                var g = function () { var n = 1; return n(2); };
                try {} catch (t) { t.x = 1; }
                { let e = 2; e++; }
                for (const t of []) t.y = 1;
                e.exports = f;
            });",
        );
        assert!(module.required_ids.is_empty());
        assert!(!module.references_utils);
        assert_output(
            &module,
            "function f(e) { return e + exports; }
             var g = function () { var n = 1; return n(2); };
             try {} catch (t) { t.x = 1; }
             { let e = 2; e++; }
             for (const t of []) t.y = 1;
             module.exports = f;",
        );
    }

    #[test]
    fn shadowing_ends_with_its_scope() {
        let module = transform("(function (e, t, n) { [1].map(function (n) { return n; }); n(4); });");
        assert_eq!(module.required_ids, [4.0]);
        assert_output(
            &module,
            "[1].map(function (n) { return n; }); require('./module4');",
        );
    }

    #[test]
    fn name_based_mode_ignores_shadowing() {
        let options = UnpackOptions {
            resolve_scopes: false,
            ..Default::default()
        };
        let module = transform_with(
            "(function (e, t, n) { function f(n) { return n(1); } });",
            &options,
        );
        assert_eq!(module.required_ids, [1.0]);
        assert!(module.references_utils);
        assert_output(
            &module,
            "const utils = require('./index.js'); function f(utils) { return require('./module1'); }",
        );
    }

    #[test]
    fn utils_import_follows_directives() {
        let module = transform("(function (e, t, n) { 'use strict'; n.r(t); });");
        assert_output(
            &module,
            "'use strict'; const utils = require('./index.js'); utils.r(exports);",
        );
    }

    #[test]
    fn labels_are_not_renamed() {
        let module = transform("(function (e) { e: for (;;) { break e; } e.exports = 1; });");
        assert_output(&module, "e: for (;;) { break e; } module.exports = 1;");
    }

    #[test]
    fn arrow_params_shadow() {
        let module = transform("(function (e, t) { var f = (t) => t; var g = () => t; });");
        assert_output(&module, "var f = (t) => t; var g = () => exports;");
    }

    #[test]
    fn top_level_function_replaces_parameter() {
        let module = transform("(function (e, t, n) { function n(x) { return x; } t.v = n(1); });");
        assert!(module.required_ids.is_empty());
        assert!(!module.references_utils);
        assert_output(&module, "function n(x) { return x; } exports.v = n(1);");
    }

    #[test]
    fn var_redeclaring_require_is_imported_with_var() {
        let module = transform("(function (e, t, n) { var n = n || {}; n.a = 1; });");
        assert!(module.references_utils);
        assert_output(
            &module,
            "var utils = require('./index.js'); var utils = utils || {}; utils.a = 1;",
        );
    }

    #[test]
    fn inner_binding_of_new_name_is_moved_aside() {
        let module = transform("(function (e, t) { function f(module) { return e.id + module; } t.f = f; });");
        assert_output(
            &module,
            "function f(module1) { return module.id + module1; } exports.f = f;",
        );
    }

    #[test]
    fn inner_require_binding_is_moved_aside() {
        let module = transform("(function (e, t, n) { function f(require) { return n(1) + require; } });");
        assert_eq!(module.required_ids, [1.0]);
        assert_output(
            &module,
            "function f(require1) { return require('./module1') + require1; }",
        );
    }

    #[test]
    fn top_level_utils_is_moved_aside() {
        let module = transform("(function (e, t, n) { var utils = 1; n.d(t, utils); });");
        assert_output(
            &module,
            "const utils = require('./index.js'); var utils1 = 1; utils.d(exports, utils1);",
        );
    }

    #[test]
    fn fresh_names_avoid_existing_ones() {
        let module = transform(
            "(function (e, t) { var exports1; function f(exports) { return { exports, a: t, b: exports1 }; } });",
        );
        assert_output(
            &module,
            "var exports1; function f(exports2) { return { exports: exports2, a: exports, b: exports1 }; }",
        );
    }

    #[test]
    fn uncaptured_inner_bindings_keep_their_names() {
        let module = transform("(function (e, t) { function f(exports) { return exports; } e.exports = f; });");
        assert_output(&module, "function f(exports) { return exports; } module.exports = f;");
    }
}
