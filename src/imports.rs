use std::collections::HashMap;

use swc_core::ecma::ast::*;

use crate::{
    witness::{extract_witness, inline_import_path, Witness},
    HELPER_MODULE, HELPER_NAME,
};

/// Local names of one file mapped to the module each was imported from.
#[derive(Debug, Default)]
pub struct ImportIndex {
    modules: HashMap<String, String>,
    /// Local name of `transformToModuleName`, when the file imports it.
    helper_local: Option<String>,
}

impl ImportIndex {
    /// Scan the top-level items of a module. Nested scopes cannot hold imports
    /// so they are not visited.
    pub fn from_module(module: &Module) -> Self {
        let mut index = Self::default();
        for item in &module.body {
            match item {
                ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => index.add_import(import),
                ModuleItem::Stmt(Stmt::Decl(Decl::TsTypeAlias(alias))) => index.add_type_alias(alias),
                ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(ExportDecl {
                    decl: Decl::TsTypeAlias(alias),
                    ..
                })) => index.add_type_alias(alias),
                _ => {}
            }
        }
        tracing::trace!(
            bindings = index.modules.len(),
            helper = ?index.helper_local,
            "built import index"
        );
        index
    }

    pub fn module_for(&self, local: &str) -> Option<&str> {
        self.modules.get(local).map(String::as_str)
    }

    pub fn helper_local(&self) -> Option<&str> {
        self.helper_local.as_deref()
    }

    fn insert(&mut self, local: &str, module: &str) {
        self.modules.insert(local.to_string(), module.to_string());
    }

    fn add_import(&mut self, import: &ImportDecl) {
        let module = import.src.value.to_string();
        if module == HELPER_MODULE {
            if let Some(local) = helper_local_name(import) {
                self.helper_local = Some(local);
            }
            return;
        }
        for s in &import.specifiers {
            let local = match s {
                ImportSpecifier::Named(named) => &named.local,
                ImportSpecifier::Default(def) => &def.local,
                ImportSpecifier::Namespace(ns) => &ns.local,
            };
            self.insert(local.sym.as_ref(), &module);
        }
    }

    fn add_type_alias(&mut self, alias: &TsTypeAliasDecl) {
        let module = inline_import_path(&alias.type_ann)
            .or_else(|| self.aliased_module(&alias.type_ann));
        if let Some(module) = module {
            self.insert(alias.id.sym.as_ref(), &module);
        }
    }

    // `type T = typeof thing` follows `thing` when it is already bound.
    fn aliased_module(&self, ty: &TsType) -> Option<String> {
        match extract_witness(ty) {
            Witness::Name { name, .. } => self.module_for(&name).map(str::to_string),
            _ => None,
        }
    }
}

/// `import { transformToModuleName as local }` yields `local`. Default and
/// namespace imports of the helper module do not bind the helper.
fn helper_local_name(import: &ImportDecl) -> Option<String> {
    import.specifiers.iter().find_map(|s| match s {
        ImportSpecifier::Named(named) => {
            let imported = match &named.imported {
                Some(ModuleExportName::Ident(i)) => i.sym.to_string(),
                Some(ModuleExportName::Str(s)) => s.value.to_string(),
                None => named.local.sym.to_string(),
            };
            (imported == HELPER_NAME).then(|| named.local.sym.to_string())
        }
        _ => None,
    })
}

/// Whether `import` pulls from the helper module and must be dropped from output.
pub fn is_helper_import(import: &ImportDecl) -> bool {
    import.src.value.as_ref() == HELPER_MODULE
}
