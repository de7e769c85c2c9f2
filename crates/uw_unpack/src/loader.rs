//! The loader replacement written to `index.js`.
//!
//! ```js
//! function n() {}
//! n.d = function (e, t, r) { /* ... */ }, n.r = function (e) { /* ... */ };
//! module.exports = n;
//! require('./module0');
//! ```
//!
//! The empty declaration establishes the binding before the helper
//! assignments run; the trailing require starts the entry module the way the
//! bundle's bootstrap did.

use swc_common::DUMMY_SP;
use swc_ecma_ast as ast;
use uw_ast::module_specifier;

use crate::detect::UtilityBlock;
use crate::module::require_call;

pub fn build_loader(utils_name: &str, utility_block: &UtilityBlock, entry_module: usize) -> ast::Script {
    ast::Script {
        span: DUMMY_SP,
        body: vec![
            utils_stub(utils_name),
            expr_stmt(utility_block.to_expr()),
            export_stmt(utils_name),
            expr_stmt(require_call(&module_specifier(entry_module))),
        ],
        shebang: None,
    }
}

/// `function <name>() {}`
fn utils_stub(name: &str) -> ast::Stmt {
    ast::Stmt::Decl(ast::Decl::Fn(ast::FnDecl {
        ident: ast::Ident::new_no_ctxt(name.into(), DUMMY_SP),
        declare: false,
        function: Box::new(ast::Function {
            params: vec![],
            body: Some(ast::BlockStmt {
                span: DUMMY_SP,
                stmts: vec![],
                ..Default::default()
            }),
            ..Default::default()
        }),
    }))
}

/// `module.exports = <name>;`
fn export_stmt(name: &str) -> ast::Stmt {
    let target = ast::MemberExpr {
        span: DUMMY_SP,
        obj: Box::new(ast::Expr::Ident(ast::Ident::new_no_ctxt("module".into(), DUMMY_SP))),
        prop: ast::MemberProp::Ident(ast::IdentName::new("exports".into(), DUMMY_SP)),
    };

    expr_stmt(ast::Expr::Assign(ast::AssignExpr {
        span: DUMMY_SP,
        op: ast::AssignOp::Assign,
        left: ast::AssignTarget::Simple(ast::SimpleAssignTarget::Member(target)),
        right: Box::new(ast::Expr::Ident(ast::Ident::new_no_ctxt(name.into(), DUMMY_SP))),
    }))
}

fn expr_stmt(expr: ast::Expr) -> ast::Stmt {
    ast::Stmt::Expr(ast::ExprStmt {
        span: DUMMY_SP,
        expr: Box::new(expr),
    })
}
