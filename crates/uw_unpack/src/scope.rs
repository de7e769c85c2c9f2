//! Binding collection for scope-resolved renaming.
//!
//! The transformer only needs to know which names a nested scope declares:
//! an occurrence inside that scope refers to the inner declaration, not to
//! the module parameter of the same name.

use swc_ecma_ast as ast;
use swc_ecma_visit::{Visit, VisitWith};

/// Names bound by a binding pattern. Default values and computed keys are
/// expressions and contribute nothing.
pub(crate) fn pat_bindings(pat: &ast::Pat, names: &mut Vec<String>) {
    let mut collector = PatCollector { names };
    pat.visit_with(&mut collector);
}

struct PatCollector<'a> {
    names: &'a mut Vec<String>,
}

impl Visit for PatCollector<'_> {
    fn visit_binding_ident(&mut self, node: &ast::BindingIdent) {
        self.names.push(node.id.sym.to_string());
    }

    fn visit_expr(&mut self, _: &ast::Expr) {}
}

/// Names declared directly in a statement list by `let`, `const`, `class` and
/// function declarations.
pub(crate) fn lexical_bindings(stmts: &[ast::Stmt]) -> Vec<String> {
    let mut names = Vec::new();
    for stmt in stmts {
        let ast::Stmt::Decl(decl) = stmt else {
            continue;
        };
        match decl {
            ast::Decl::Var(var) if var.kind != ast::VarDeclKind::Var => {
                for declarator in &var.decls {
                    pat_bindings(&declarator.name, &mut names);
                }
            }
            ast::Decl::Fn(f) => names.push(f.ident.sym.to_string()),
            ast::Decl::Class(c) => names.push(c.ident.sym.to_string()),
            _ => {}
        }
    }
    names
}

/// Names a `let`/`const` loop head or declaration binds. `var` is hoisted to
/// the enclosing function and yields nothing here.
pub(crate) fn block_scoped_decl(var: &ast::VarDecl) -> Vec<String> {
    let mut names = Vec::new();
    if var.kind != ast::VarDeclKind::Var {
        for declarator in &var.decls {
            pat_bindings(&declarator.name, &mut names);
        }
    }
    names
}

/// Every name a function-like scope declares: its parameters, the `var`
/// declarations hoisted out of its body and the body's lexical declarations.
pub(crate) fn function_bindings<'a>(
    params: impl IntoIterator<Item = &'a ast::Pat>,
    body: Option<&ast::BlockStmt>,
) -> Vec<String> {
    let mut names = Vec::new();
    for pat in params {
        pat_bindings(pat, &mut names);
    }
    if let Some(body) = body {
        names.extend(hoisted_bindings(body));
    }
    names
}

/// `var` declarations anywhere in `body` (without entering nested functions)
/// plus the lexical declarations at its top level.
pub(crate) fn hoisted_bindings(body: &ast::BlockStmt) -> Vec<String> {
    let mut names = var_bindings(&body.stmts);
    names.extend(lexical_bindings(&body.stmts));
    names
}

/// `var` declarations anywhere in `stmts`, without entering nested functions.
pub(crate) fn var_bindings(stmts: &[ast::Stmt]) -> Vec<String> {
    let mut collector = VarCollector { names: Vec::new() };
    for stmt in stmts {
        stmt.visit_with(&mut collector);
    }
    collector.names
}

struct VarCollector {
    names: Vec<String>,
}

impl Visit for VarCollector {
    fn visit_var_decl(&mut self, node: &ast::VarDecl) {
        if node.kind == ast::VarDeclKind::Var {
            for declarator in &node.decls {
                pat_bindings(&declarator.name, &mut self.names);
            }
        }
    }

    // Nothing below these nodes can hoist into the current function.
    fn visit_expr(&mut self, _: &ast::Expr) {}
    fn visit_function(&mut self, _: &ast::Function) {}
    fn visit_arrow_expr(&mut self, _: &ast::ArrowExpr) {}
    fn visit_constructor(&mut self, _: &ast::Constructor) {}
    fn visit_getter_prop(&mut self, _: &ast::GetterProp) {}
    fn visit_setter_prop(&mut self, _: &ast::SetterProp) {}
    fn visit_static_block(&mut self, _: &ast::StaticBlock) {}
}
