use swc_core::{common::Span, ecma::ast::*};

use crate::{MOCK_METHODS, MOCK_NAMESPACE};

/// A recognized call shape, borrowed from the call it was matched on.
#[derive(Debug)]
pub struct CallMatch<'a> {
    pub method_name: String,
    pub type_argument: Option<&'a TsType>,
    pub first_argument: Option<&'a Expr>,
    pub span: Span,
}

fn single_type_argument(call: &CallExpr) -> Option<&TsType> {
    match &call.type_args {
        Some(args) if args.params.len() == 1 => Some(&*args.params[0]),
        _ => None,
    }
}

fn type_argument_count(call: &CallExpr) -> usize {
    call.type_args.as_ref().map_or(0, |args| args.params.len())
}

// -----------------------------------------------------------------------------
// Helper call: `transformToModuleName<T>()`
// -----------------------------------------------------------------------------

pub fn match_helper_call<'a>(call: &'a CallExpr, helper_local: &str) -> Option<CallMatch<'a>> {
    let Callee::Expr(callee) = &call.callee else {
        return None;
    };
    let Expr::Ident(ident) = &**callee else {
        return None;
    };
    if ident.sym.as_ref() != helper_local || !call.args.is_empty() {
        return None;
    }
    let type_argument = single_type_argument(call)?;
    Some(CallMatch {
        method_name: ident.sym.to_string(),
        type_argument: Some(type_argument),
        first_argument: None,
        span: call.span,
    })
}

/// True when `expr` is itself a helper call, so the witness travels inside it.
pub fn is_helper_call(expr: &Expr, helper_local: Option<&str>) -> bool {
    match (expr, helper_local) {
        (Expr::Call(call), Some(local)) => match_helper_call(call, local).is_some(),
        _ => false,
    }
}

// -----------------------------------------------------------------------------
// Mocking API: `jest.mock<T>(...)`, `jest.autoMockOff().mock<T>(...)`
// -----------------------------------------------------------------------------

pub fn match_mock_call(call: &CallExpr) -> Option<CallMatch<'_>> {
    if type_argument_count(call) > 1 {
        return None;
    }
    let Callee::Expr(callee) = &call.callee else {
        return None;
    };
    let Expr::Member(member) = &**callee else {
        return None;
    };
    let MemberProp::Ident(prop) = &member.prop else {
        return None;
    };
    let method = prop.sym.as_ref();
    if !MOCK_METHODS.iter().any(|m| *m == method) || !member_roots_at_namespace(member) {
        return None;
    }
    let first_argument = match call.args.first() {
        Some(arg) if arg.spread.is_none() => Some(&*arg.expr),
        _ => None,
    };
    Some(CallMatch {
        method_name: method.to_string(),
        type_argument: single_type_argument(call),
        first_argument,
        span: call.span,
    })
}

fn member_roots_at_namespace(member: &MemberExpr) -> bool {
    matches!(member.prop, MemberProp::Ident(_)) && object_roots_at_namespace(&member.obj)
}

// `jest` itself, or a call whose callee is a property access rooted at `jest`.
fn object_roots_at_namespace(obj: &Expr) -> bool {
    match obj {
        Expr::Ident(ident) => ident.sym.as_ref() == MOCK_NAMESPACE,
        Expr::Call(CallExpr {
            callee: Callee::Expr(callee),
            ..
        }) => match &**callee {
            Expr::Member(inner) => member_roots_at_namespace(inner),
            _ => false,
        },
        _ => false,
    }
}
