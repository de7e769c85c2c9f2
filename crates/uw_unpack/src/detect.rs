//! Bundle detection.
//!
//! The wrapper looks like
//!
//! ```js
//! !function (e) {
//!     function n(r) { /* module cache and loader */ }
//!     n.d = function (e, t, r) { /* ... */ }, n.r = function (e) { /* ... */ }, n(n.s = 0);
//! }([function (e, t, n) { /* module 0 */ }, function (e, t) { /* module 1 */ }]);
//! ```
//!
//! The unary operator discards the result of the immediately-invoked
//! function, whose only argument is the module array. The sequence ending in
//! `n(n.s = 0)` is the utility block: its function assignments are the
//! runtime helpers and the trailing call names the entry module.

use swc_common::DUMMY_SP;
use swc_ecma_ast as ast;
use swc_ecma_visit::{Visit, VisitWith};

use crate::error::NoMatch;
use crate::module::BundledModule;
use crate::params::{as_fn_expr, as_index, as_number, single_arg, unparen};

/// The runtime helper assignments of a bundle, in source order.
#[derive(Debug, Clone)]
pub struct UtilityBlock {
    pub assignments: Vec<ast::AssignExpr>,
}

impl UtilityBlock {
    /// The assignments as one sequence expression.
    pub fn to_expr(&self) -> ast::Expr {
        ast::Expr::Seq(ast::SeqExpr {
            span: DUMMY_SP,
            exprs: self
                .assignments
                .iter()
                .cloned()
                .map(|assign| Box::new(ast::Expr::Assign(assign)))
                .collect(),
        })
    }
}

/// Everything extracted from a matched bundle.
#[derive(Debug, Clone)]
pub struct BundleMatch {
    /// Object the runtime helpers are assigned onto.
    pub utils_name: String,
    pub utility_block: UtilityBlock,
    pub entry_module: usize,
    /// Modules in array order; ids are array positions.
    pub modules: Vec<BundledModule>,
    /// Length of the module array, holes included.
    pub array_len: usize,
    /// Further wrapper-shaped statements that were not processed.
    pub additional_candidates: usize,
}

/// Find and extract the bundle in `script`. The first wrapper in source order
/// wins. The input tree is not modified.
pub fn detect(script: &ast::Script) -> Result<BundleMatch, NoMatch> {
    let mut finder = WrapperFinder::default();
    script.visit_with(&mut finder);

    let wrapper = finder.wrapper.ok_or(NoMatch::NoWrapper)?;
    let mut bundle = extract(&wrapper)?;
    bundle.additional_candidates = finder.additional;
    Ok(bundle)
}

#[derive(Default)]
struct WrapperFinder {
    wrapper: Option<ast::CallExpr>,
    additional: usize,
}

impl Visit for WrapperFinder {
    fn visit_expr_stmt(&mut self, stmt: &ast::ExprStmt) {
        match wrapper_call(stmt) {
            Some(call) => {
                if self.wrapper.is_none() {
                    self.wrapper = Some(call.clone());
                } else {
                    self.additional += 1;
                }
            }
            None => stmt.visit_children_with(self),
        }
    }
}

/// The immediately-invoked call of a wrapper statement:
/// `<unary> function (...) {...}([function..., ...])`.
fn wrapper_call(stmt: &ast::ExprStmt) -> Option<&ast::CallExpr> {
    let ast::Expr::Unary(unary) = unparen(&stmt.expr) else {
        return None;
    };
    let ast::Expr::Call(call) = unparen(&unary.arg) else {
        return None;
    };
    let ast::Callee::Expr(callee) = &call.callee else {
        return None;
    };
    as_fn_expr(callee)?;

    let ast::Expr::Array(array) = unparen(single_arg(call)?) else {
        return None;
    };
    let all_functions = array.elems.iter().all(|elem| {
        matches!(elem, Some(elem) if elem.spread.is_none() && as_fn_expr(&elem.expr).is_some())
    });

    all_functions.then_some(call)
}

/// The sequence expression of a utility block statement: at least two
/// sub-expressions, the last a call whose single argument is an assignment.
fn utility_sequence(stmt: &ast::Stmt) -> Option<&ast::SeqExpr> {
    let ast::Stmt::Expr(stmt) = stmt else {
        return None;
    };
    let ast::Expr::Seq(seq) = unparen(&stmt.expr) else {
        return None;
    };
    if seq.exprs.len() < 2 {
        return None;
    }
    entry_assignment(seq)?;
    Some(seq)
}

/// `n.s = 0` in the trailing `n(n.s = 0)` of a utility sequence.
fn entry_assignment(seq: &ast::SeqExpr) -> Option<&ast::AssignExpr> {
    let ast::Expr::Call(call) = unparen(seq.exprs.last()?) else {
        return None;
    };
    match unparen(single_arg(call)?) {
        ast::Expr::Assign(assign) => Some(assign),
        _ => None,
    }
}

fn extract(call: &ast::CallExpr) -> Result<BundleMatch, NoMatch> {
    let ast::Callee::Expr(callee) = &call.callee else {
        return Err(NoMatch::NoWrapper);
    };
    let wrapper = as_fn_expr(callee).ok_or(NoMatch::NoWrapper)?;
    let body = wrapper
        .function
        .body
        .as_ref()
        .ok_or(NoMatch::NoUtilityBlock)?;

    // Later utility-shaped statements override earlier ones.
    let seq = body
        .stmts
        .iter()
        .filter_map(utility_sequence)
        .last()
        .ok_or(NoMatch::NoUtilityBlock)?;

    let assignments: Vec<ast::AssignExpr> = seq
        .exprs
        .iter()
        .filter_map(|expr| match unparen(expr) {
            ast::Expr::Assign(assign) if as_fn_expr(&assign.right).is_some() => Some(assign.clone()),
            _ => None,
        })
        .collect();

    let utils_name = utils_name(assignments.first().ok_or(NoMatch::NoUtilityAssignments)?)
        .ok_or(NoMatch::UtilsNameNotMember)?;

    let entry = entry_assignment(seq).ok_or(NoMatch::NoUtilityBlock)?;
    let entry_value = as_number(&entry.right).ok_or(NoMatch::EntryNotNumeric)?;
    let entry_module = as_index(entry_value).ok_or(NoMatch::EntryNotIndex(entry_value))?;

    let ast::Expr::Array(array) = unparen(single_arg(call).ok_or(NoMatch::NoWrapper)?) else {
        return Err(NoMatch::NoWrapper);
    };

    let mut modules = Vec::with_capacity(array.elems.len());
    for (id, elem) in array.elems.iter().enumerate() {
        match elem.as_ref().and_then(|elem| as_fn_expr(&elem.expr)) {
            Some(function) => modules.push(BundledModule::new(id, &function.function)),
            None => log::trace!("module array slot {id} is not a function, skipping"),
        }
    }

    log::debug!(
        "matched bundle: utils `{utils_name}`, {} helper(s), entry {entry_module}, {} module(s)",
        assignments.len(),
        modules.len()
    );

    Ok(BundleMatch {
        utils_name,
        utility_block: UtilityBlock { assignments },
        entry_module,
        modules,
        array_len: array.elems.len(),
        additional_candidates: 0,
    })
}

/// `n` from `n.d = function () {}`.
fn utils_name(assign: &ast::AssignExpr) -> Option<String> {
    let ast::AssignTarget::Simple(ast::SimpleAssignTarget::Member(member)) = &assign.left else {
        return None;
    };
    match unparen(&member.obj) {
        ast::Expr::Ident(ident) => Some(ident.sym.to_string()),
        _ => None,
    }
}
