use std::{
    env, fs,
    path::{Path, PathBuf},
};

use syn::{Expr, ExprLit, ExprMethodCall, File, Lit, visit::Visit};

#[derive(Debug, Clone)]
struct SitemapRow {
    method: String,
    path: String,
}

#[derive(Default)]
struct RouteCollector {
    rows: Vec<SitemapRow>,
}

impl<'ast> Visit<'ast> for RouteCollector {
    fn visit_expr_method_call(&mut self, node: &'ast ExprMethodCall) {
        if node.method == "route" {
            let path = node.args.first().and_then(string_literal);
            let methods = node.args.iter().nth(1).map(http_methods).unwrap_or_default();
            if let Some(path) = path {
                for method in methods {
                    self.rows.push(SitemapRow {
                        method,
                        path: path.clone(),
                    });
                }
            }
        }

        syn::visit::visit_expr_method_call(self, node);
    }
}

fn string_literal(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(value),
            ..
        }) => Some(value.value()),
        Expr::Paren(expr) => string_literal(&expr.expr),
        Expr::Reference(expr) => string_literal(&expr.expr),
        _ => None,
    }
}

/// `get(a).delete(b)` yields `["GET", "DELETE"]`.
fn http_methods(expr: &Expr) -> Vec<String> {
    let mut names = Vec::new();
    chained_calls(expr, &mut names);
    names.reverse();

    let mut methods: Vec<String> = Vec::new();
    for name in names {
        if let Some(method) = normalize_method(&name) {
            if !methods.iter().any(|existing| existing == method) {
                methods.push(method.to_string());
            }
        }
    }
    methods
}

fn chained_calls(expr: &Expr, out: &mut Vec<String>) {
    match expr {
        Expr::Call(call) => {
            if let Expr::Path(path) = &*call.func {
                if let Some(segment) = path.path.segments.last() {
                    out.push(segment.ident.to_string());
                }
            }
        }
        Expr::MethodCall(method_call) => {
            out.push(method_call.method.to_string());
            chained_calls(&method_call.receiver, out);
        }
        Expr::Paren(expr) => chained_calls(&expr.expr, out),
        Expr::Reference(expr) => chained_calls(&expr.expr, out),
        _ => {}
    }
}

fn normalize_method(name: &str) -> Option<&'static str> {
    match name {
        "get" => Some("GET"),
        "post" => Some("POST"),
        "put" => Some("PUT"),
        "delete" => Some("DELETE"),
        "patch" => Some("PATCH"),
        _ => None,
    }
}

fn parse_routes(path: &Path) -> Vec<SitemapRow> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {}", path.display(), err));
    let parsed: File = syn::parse_file(&content)
        .unwrap_or_else(|err| panic!("failed to parse {}: {}", path.display(), err));
    let mut collector = RouteCollector::default();
    collector.visit_file(&parsed);
    collector.rows
}

fn route_files(routes_dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(routes_dir)
        .unwrap_or_else(|err| panic!("failed to read {}: {}", routes_dir.display(), err));
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("rs"))
        .collect();
    files.sort();
    files
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR");
    let routes_dir = Path::new(&manifest_dir).join("src/routes");

    let files = route_files(&routes_dir);
    let mut rows = Vec::new();
    for file in &files {
        println!("cargo:rerun-if-changed={}", file.display());
        rows.extend(parse_routes(file));
    }
    rows.sort_by(|a, b| a.path.cmp(&b.path).then(a.method.cmp(&b.method)));

    let out_dir = env::var("OUT_DIR").expect("missing OUT_DIR");
    let out_path = Path::new(&out_dir).join("sitemap_generated.rs");
    let mut output = String::from("pub static ROUTES: &[RouteInfo] = &[\n");
    for row in rows {
        output.push_str(&format!(
            "    RouteInfo {{ method: {:?}, path: {:?} }},\n",
            row.method, row.path
        ));
    }
    output.push_str("];\n");

    fs::write(&out_path, output)
        .unwrap_or_else(|err| panic!("failed to write {}: {}", out_path.display(), err));
}
