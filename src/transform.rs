use swc_core::{
    common::{Span, Spanned},
    ecma::{
        ast::*,
        utils::ExprFactory,
        visit::{VisitMut, VisitMutWith},
    },
};

use crate::{
    config::Config,
    diagnostics::{Diagnostic, DiagnosticSink},
    imports::{is_helper_import, ImportIndex},
    matchers::{is_helper_call, match_helper_call, match_mock_call},
    witness::{extract_witness, Witness},
    HELPER_NAME, MOCK_NAMESPACE,
};

// -----------------------------------------------------------------------------
// Transform state
// -----------------------------------------------------------------------------

/// Rewrites type witnesses into module-path string literals for one file.
pub struct TypedPathsTransform<S: DiagnosticSink> {
    file: String,
    warn_missing_type_argument: bool,
    sink: S,
    // rebuilt for every module visited
    index: ImportIndex,
}

impl<S: DiagnosticSink> TypedPathsTransform<S> {
    pub fn new(file: impl Into<String>, config: &Config, sink: S) -> Self {
        Self {
            file: file.into(),
            warn_missing_type_argument: config.warn_missing_type_argument,
            sink,
            index: ImportIndex::default(),
        }
    }

    /// Module path a type argument stands for. Failures are reported at
    /// `report_span`, or at the type node itself when none is given.
    fn resolve(&mut self, ty: &TsType, report_span: Option<Span>, member: &str) -> Option<String> {
        let witness = extract_witness(ty);
        let span = report_span.unwrap_or_else(|| witness.span());
        let resolved = match witness {
            Witness::Name { name, .. } => self.index.module_for(&name).map(str::to_string),
            Witness::ModulePath { path, .. } => Some(path),
            Witness::Unsupported { .. } => None,
        };
        if resolved.is_none() {
            self.sink
                .add_diagnostic(Diagnostic::unsupported_type_argument(&self.file, member, span));
        }
        resolved
    }

    /// `transformToModuleName<T>()` becomes the module path literal. `None` when
    /// the call is not a helper call, `Some(None)` when it failed to resolve.
    fn rewrite_helper_call(&mut self, call: &CallExpr) -> Option<Option<Expr>> {
        let helper_local = self.index.helper_local()?;
        let m = match_helper_call(call, helper_local)?;
        let ty = m.type_argument?;
        let resolved = self.resolve(ty, Some(m.span), HELPER_NAME);
        Some(resolved.map(|module| {
            tracing::debug!(file = %self.file, module = %module, "replaced helper call");
            str_lit(module, m.span)
        }))
    }

    /// `jest.mock<T>(first, ...rest)` becomes `jest.mock<T>("module", ...rest)`.
    fn rewrite_mock_call(&mut self, call: &mut CallExpr) {
        let Some(m) = match_mock_call(call) else {
            return;
        };
        let nested_helper = m
            .first_argument
            .is_some_and(|first| is_helper_call(first, self.index.helper_local()));
        if nested_helper {
            // the inner helper call is rewritten when the visitor reaches it
            return;
        }
        let member = format!("{MOCK_NAMESPACE}.{}", m.method_name);
        let span = m.span;
        let Some(ty) = m.type_argument else {
            if self.warn_missing_type_argument {
                self.sink
                    .add_diagnostic(Diagnostic::missing_type_argument(&self.file, &member, span));
            }
            return;
        };
        let Some(module) = self.resolve(ty, None, &member) else {
            return;
        };
        tracing::debug!(file = %self.file, module = %module, "rewrote {member} argument");
        let literal = str_lit(module, replaced_span(call.args.first(), span)).as_arg();
        if call.args.is_empty() {
            call.args.push(literal);
        } else {
            call.args[0] = literal;
        }
    }
}

fn str_lit(value: String, span: Span) -> Expr {
    Expr::Lit(Lit::Str(Str {
        span,
        value: value.into(),
        raw: None,
    }))
}

// Span of the argument being replaced, or the call when there was none.
fn replaced_span(first: Option<&ExprOrSpread>, call_span: Span) -> Span {
    first.map_or(call_span, |arg| arg.expr.span())
}

impl<S: DiagnosticSink> VisitMut for TypedPathsTransform<S> {
    fn visit_mut_program(&mut self, program: &mut Program) {
        // scripts have no imports; modules rebuild the index on entry
        self.index = ImportIndex::default();
        program.visit_mut_children_with(self);
    }

    fn visit_mut_module(&mut self, m: &mut Module) {
        self.index = ImportIndex::from_module(m);
        m.visit_mut_children_with(self);
    }

    fn visit_mut_module_items(&mut self, items: &mut Vec<ModuleItem>) {
        items.retain(|item| match item {
            ModuleItem::ModuleDecl(ModuleDecl::Import(import)) if is_helper_import(import) => {
                tracing::debug!(file = %self.file, "removed helper import");
                false
            }
            _ => true,
        });
        items.visit_mut_children_with(self);
    }

    fn visit_mut_expr(&mut self, expr: &mut Expr) {
        if let Expr::Call(call) = expr {
            match self.rewrite_helper_call(call) {
                Some(Some(literal)) => {
                    *expr = literal;
                    return;
                }
                // unresolved helper call: already reported, leave it in place
                Some(None) => {}
                None => self.rewrite_mock_call(call),
            }
        }
        expr.visit_mut_children_with(self);
    }
}
