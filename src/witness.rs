use swc_core::{
    common::{Span, Spanned},
    ecma::ast::*,
};

/// What a type argument says about the module it stands for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Witness {
    /// A type or value name to look up among the file's imports.
    Name { name: String, span: Span },
    /// A module path written inline, e.g. `import("./mod")`.
    ModulePath { path: String, span: Span },
    Unsupported { span: Span },
}

impl Witness {
    pub fn span(&self) -> Span {
        match self {
            Witness::Name { span, .. }
            | Witness::ModulePath { span, .. }
            | Witness::Unsupported { span } => *span,
        }
    }
}

/// Classify the type argument of a helper or `jest.*` call.
pub fn extract_witness(ty: &TsType) -> Witness {
    let span = ty.span();
    match ty {
        TsType::TsTypeRef(r) => Witness::Name {
            name: entity_name_text(&r.type_name),
            span,
        },
        TsType::TsTypeQuery(q) => match &q.expr_name {
            TsTypeQueryExpr::TsEntityName(n) => Witness::Name {
                name: entity_name_text(n),
                span,
            },
            TsTypeQueryExpr::Import(i) => match import_type_path(i) {
                Some(path) => Witness::ModulePath { path, span },
                None => Witness::Unsupported { span },
            },
        },
        TsType::TsImportType(i) => match import_type_path(i) {
            Some(path) => Witness::ModulePath { path, span },
            None => Witness::Unsupported { span },
        },
        _ => Witness::Unsupported { span },
    }
}

/// Module path of `import("m")` or `typeof import("m")` with no member qualifier.
pub fn inline_import_path(ty: &TsType) -> Option<String> {
    match ty {
        TsType::TsImportType(i) => import_type_path(i),
        TsType::TsTypeQuery(q) => match &q.expr_name {
            TsTypeQueryExpr::Import(i) => import_type_path(i),
            TsTypeQueryExpr::TsEntityName(_) => None,
        },
        _ => None,
    }
}

fn import_type_path(i: &TsImportType) -> Option<String> {
    if i.qualifier.is_some() {
        return None;
    }
    Some(strip_quotes(&i.arg.value.to_string()))
}

// Only the first of each quote character is removed.
fn strip_quotes(input: &str) -> String {
    input.replacen('\'', "", 1).replacen('"', "", 1)
}

/// Dotted source text of `A` or `A.B.C`.
pub fn entity_name_text(name: &TsEntityName) -> String {
    match name {
        TsEntityName::Ident(i) => i.sym.to_string(),
        TsEntityName::TsQualifiedName(q) => {
            format!("{}.{}", entity_name_text(&q.left), q.right.sym)
        }
    }
}
