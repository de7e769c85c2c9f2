//! Parameter bindings of a bundled module function and the small shape
//! queries shared by the detector and the transformer.

use swc_ecma_ast as ast;
use uw_ast::ParamRole;

/// Names bound by the first three formal parameters of a module function.
///
/// A slot is only bound when the parameter is a plain identifier; patterns,
/// rest elements and defaults leave it empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamBindings {
    pub module: Option<String>,
    pub exports: Option<String>,
    pub require: Option<String>,
}

impl ParamBindings {
    pub fn from_params(params: &[ast::Param]) -> Self {
        let slot = |role: ParamRole| {
            params.get(role.slot()).and_then(|param| match &param.pat {
                ast::Pat::Ident(binding) => Some(binding.id.sym.to_string()),
                _ => None,
            })
        };

        Self {
            module: slot(ParamRole::Module),
            exports: slot(ParamRole::Exports),
            require: slot(ParamRole::Require),
        }
    }

    pub fn get(&self, role: ParamRole) -> Option<&str> {
        match role {
            ParamRole::Module => self.module.as_deref(),
            ParamRole::Exports => self.exports.as_deref(),
            ParamRole::Require => self.require.as_deref(),
        }
    }

    /// The role whose binding is named `name`. Earlier slots win when a
    /// function repeats a parameter name.
    pub fn role_of(&self, name: &str) -> Option<ParamRole> {
        ParamRole::ALL
            .into_iter()
            .find(|role| self.get(*role) == Some(name))
    }
}

/// Strip any number of enclosing parentheses.
pub(crate) fn unparen(mut expr: &ast::Expr) -> &ast::Expr {
    while let ast::Expr::Paren(paren) = expr {
        expr = &paren.expr;
    }
    expr
}

/// The function of a (possibly parenthesized) `function` expression. Arrow
/// functions do not count.
pub(crate) fn as_fn_expr(expr: &ast::Expr) -> Option<&ast::FnExpr> {
    match unparen(expr) {
        ast::Expr::Fn(fn_expr) => Some(fn_expr),
        _ => None,
    }
}

/// Value of a (possibly parenthesized) numeric literal.
pub(crate) fn as_number(expr: &ast::Expr) -> Option<f64> {
    match unparen(expr) {
        ast::Expr::Lit(ast::Lit::Num(num)) => Some(num.value),
        _ => None,
    }
}

/// The expression of a call's only argument, if it has exactly one and it is
/// not spread.
pub(crate) fn single_arg(call: &ast::CallExpr) -> Option<&ast::Expr> {
    match call.args.as_slice() {
        [arg] if arg.spread.is_none() => Some(&arg.expr),
        _ => None,
    }
}

/// Interpret a numeric literal value as a module array index.
pub(crate) fn as_index(value: f64) -> Option<usize> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= usize::MAX as f64 {
        Some(value as usize)
    } else {
        None
    }
}
