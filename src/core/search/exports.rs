//! Export scanning for search-schema declarations.
//!
//! A page declares a search schema when its frontmatter exports either:
//!
//! - a binding named `searchSchema`
//!   (`export const searchSchema = z.object(...)`, `export { s as searchSchema }`)
//! - a `Route` built by `createRoute({ searchSchema: ... })`

use swc_ecma_ast::{
    Callee, Decl, ExportDecl, ExportSpecifier, Expr, ModuleExportName, NamedExport, Pat, Prop,
    PropName, PropOrSpread, TsModuleDecl, VarDeclarator,
};
use swc_ecma_visit::Visit;

const SEARCH_SCHEMA_EXPORT: &str = "searchSchema";
const ROUTE_EXPORT: &str = "Route";
const CREATE_ROUTE_FN: &str = "createRoute";

/// Visitor that records whether a module exports a search schema.
///
/// # Usage
///
/// ```ignore
/// let mut collector = SearchSchemaCollector::default();
/// module.visit_with(&mut collector);
/// if collector.found { ... }
/// ```
#[derive(Debug, Default)]
pub struct SearchSchemaCollector {
    pub found: bool,
}

impl Visit for SearchSchemaCollector {
    fn visit_export_decl(&mut self, node: &ExportDecl) {
        match &node.decl {
            Decl::Var(var_decl) => {
                if var_decl.decls.iter().any(declares_search_schema) {
                    self.found = true;
                }
            }
            Decl::Fn(fn_decl) => {
                if fn_decl.ident.sym.as_str() == SEARCH_SCHEMA_EXPORT {
                    self.found = true;
                }
            }
            _ => {}
        }
    }

    fn visit_named_export(&mut self, node: &NamedExport) {
        for specifier in &node.specifiers {
            let ExportSpecifier::Named(named) = specifier else {
                continue;
            };
            let exported = named.exported.as_ref().unwrap_or(&named.orig);
            let is_search_schema = matches!(
                exported,
                ModuleExportName::Ident(ident) if ident.sym.as_str() == SEARCH_SCHEMA_EXPORT
            );
            if is_search_schema {
                self.found = true;
            }
        }
    }

    // Exports inside `namespace` / `declare module` bodies are not page exports.
    fn visit_ts_module_decl(&mut self, _: &TsModuleDecl) {}
}

fn declares_search_schema(decl: &VarDeclarator) -> bool {
    let Pat::Ident(binding) = &decl.name else {
        return false;
    };

    match binding.id.sym.as_str() {
        SEARCH_SCHEMA_EXPORT => true,
        ROUTE_EXPORT => decl
            .init
            .as_deref()
            .is_some_and(is_create_route_with_search),
        _ => false,
    }
}

/// `createRoute({ searchSchema })`, looking through `as`, `satisfies` and parens.
fn is_create_route_with_search(expr: &Expr) -> bool {
    match expr {
        Expr::Call(call) => {
            let Callee::Expr(callee) = &call.callee else {
                return false;
            };
            let Expr::Ident(ident) = &**callee else {
                return false;
            };
            ident.sym.as_str() == CREATE_ROUTE_FN
                && call
                    .args
                    .iter()
                    .any(|arg| arg.spread.is_none() && has_search_schema_prop(&arg.expr))
        }
        Expr::TsAs(as_expr) => is_create_route_with_search(&as_expr.expr),
        Expr::TsSatisfies(satisfies) => is_create_route_with_search(&satisfies.expr),
        Expr::Paren(paren) => is_create_route_with_search(&paren.expr),
        _ => false,
    }
}

fn has_search_schema_prop(expr: &Expr) -> bool {
    let Expr::Object(object) = expr else {
        return false;
    };

    object.props.iter().any(|prop| {
        let PropOrSpread::Prop(prop) = prop else {
            return false;
        };
        match &**prop {
            Prop::KeyValue(kv) => matches!(
                &kv.key,
                PropName::Ident(ident) if ident.sym.as_str() == SEARCH_SCHEMA_EXPORT
            ),
            Prop::Shorthand(ident) => ident.sym.as_str() == SEARCH_SCHEMA_EXPORT,
            _ => false,
        }
    })
}
