//! Rendering IR to Rust source text.
//!
//! Output depends only on the IR, the runtime crate path and the indent
//! width, so rendering the same blocks twice gives byte-identical text.

use crate::ir::{Callee, Expr, Function, ImplBlock, Stmt, Ty};
use std::fmt::Write;

/// Renders IR with a fixed runtime path and indentation.
#[derive(Debug, Clone)]
pub struct Renderer {
    runtime: String,
    indent: String,
}

impl Renderer {
    pub fn new(runtime_crate: &str, indent_width: usize) -> Self {
        Self {
            runtime: runtime_crate.trim_end_matches("::").to_string(),
            indent: " ".repeat(indent_width),
        }
    }

    /// Render one impl block, attribute and trailing newline included.
    pub fn render_impl(&self, block: &ImplBlock) -> String {
        let mut out = String::new();
        out.push_str("#[automatically_derived]\n");
        let _ = writeln!(
            out,
            "impl {} for {} {{",
            self.runtime_item(block.trait_name),
            block.self_ty
        );
        self.function(&block.function, 1, &mut out);
        out.push_str("}\n");
        out
    }

    fn function(&self, function: &Function, depth: usize, out: &mut String) {
        let mut params = Vec::with_capacity(function.params.len() + 1);
        if function.takes_self {
            params.push("&self".to_string());
        }
        params.extend(
            function
                .params
                .iter()
                .map(|p| format!("{}: {}", p.name, self.ty(&p.ty))),
        );

        self.line(
            out,
            depth,
            &format!(
                "fn {}({}) -> {} {{",
                function.name,
                params.join(", "),
                self.ty(&function.ret)
            ),
        );
        for stmt in &function.body {
            self.stmt(stmt, depth + 1, out);
        }
        self.line(out, depth, "}");
    }

    fn stmt(&self, stmt: &Stmt, depth: usize, out: &mut String) {
        match stmt {
            Stmt::Let {
                name,
                mutable,
                value,
            } => {
                let binding = if *mutable { "let mut" } else { "let" };
                self.line(out, depth, &format!("{binding} {name} = {};", self.expr(value)));
            }
            Stmt::Expr(expr) => self.line(out, depth, &format!("{};", self.expr(expr))),
            Stmt::IfLetSome {
                binding,
                value,
                then,
            } => {
                self.line(
                    out,
                    depth,
                    &format!("if let Some({binding}) = {} {{", self.expr(value)),
                );
                for inner in then {
                    self.stmt(inner, depth + 1, out);
                }
                self.line(out, depth, "}");
            }
            Stmt::Tail(expr) => self.line(out, depth, &self.expr(expr)),
        }
    }

    /// Render an expression on a single line.
    pub fn expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Local(name) => name.clone(),
            Expr::Str(value) => format!("{value:?}"),
            Expr::SelfField(ident) => format!("self.{ident}"),
            Expr::Ref(inner) => format!("&{}", self.expr(inner)),
            Expr::RefMut(inner) => format!("&mut {}", self.expr(inner)),
            Expr::Call {
                callee,
                turbofish,
                args,
            } => {
                let callee = match callee {
                    Callee::Runtime(name) => self.runtime_item(name),
                    Callee::SelfAssoc(name) => format!("Self::{name}"),
                };
                let turbofish = turbofish
                    .as_ref()
                    .map(|ty| format!("::<{ty}>"))
                    .unwrap_or_default();
                let args: Vec<String> = args.iter().map(|a| self.expr(a)).collect();
                format!("{callee}{turbofish}({})", args.join(", "))
            }
            Expr::Try(inner) => format!("{}?", self.expr(inner)),
            Expr::Ok(inner) => format!("Ok({})", self.expr(inner)),
            Expr::StructLit(fields) if fields.is_empty() => "Self {}".to_string(),
            Expr::StructLit(fields) => {
                let fields: Vec<String> = fields
                    .iter()
                    .map(|(name, value)| match value {
                        Expr::Local(local) if local == name => name.clone(),
                        value => format!("{name}: {}", self.expr(value)),
                    })
                    .collect();
                format!("Self {{ {} }}", fields.join(", "))
            }
            Expr::Println(text) => format!("println!({text:?})"),
            Expr::Unit => "()".to_string(),
        }
    }

    pub fn ty(&self, ty: &Ty) -> String {
        match ty {
            Ty::Runtime(name) => self.runtime_item(name),
            Ty::SelfType => "Self".to_string(),
            Ty::Unit => "()".to_string(),
            Ty::Ref(inner) => format!("&{}", self.ty(inner)),
            Ty::Result(inner) => format!(
                "{}<{}>",
                self.runtime_item("ConvertResult"),
                self.ty(inner)
            ),
        }
    }

    fn runtime_item(&self, name: &str) -> String {
        format!("{}::{name}", self.runtime)
    }

    fn line(&self, out: &mut String, depth: usize, text: &str) {
        for _ in 0..depth {
            out.push_str(&self.indent);
        }
        out.push_str(text);
        out.push('\n');
    }
}
