//! Intermediate representation of synthesized functions.
//!
//! Synthesizers build these trees; [`crate::render`] turns them into text
//! only at emission time. The trees are small on purpose: they cover the
//! handful of statement and expression shapes generated code needs.
//!
//! Items of the runtime crate are referenced by name only (`Map`,
//! `put_scalar`); the renderer decides which crate path they live under.

use crate::capability::Capability;

/// One `impl Trait for Type` block holding a single function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplBlock {
    pub capability: Capability,

    /// Runtime trait implemented, e.g. `ToMap`
    pub trait_name: &'static str,

    /// Implementing type as named in its own module
    pub self_ty: String,

    pub function: Function,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: &'static str,

    /// Takes `&self`
    pub takes_self: bool,

    pub params: Vec<Param>,

    pub ret: Ty,

    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: Ty,
}

/// Types appearing in signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ty {
    /// An item of the runtime crate
    Runtime(&'static str),
    SelfType,
    Unit,
    Ref(Box<Ty>),
    /// `ConvertResult<T>`
    Result(Box<Ty>),
}

impl Ty {
    pub fn reference(ty: Ty) -> Self {
        Ty::Ref(Box::new(ty))
    }

    pub fn result(ty: Ty) -> Self {
        Ty::Result(Box::new(ty))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Let {
        name: String,
        mutable: bool,
        value: Expr,
    },

    /// Expression statement, rendered with a trailing `;`
    Expr(Expr),

    /// `if let Some(binding) = value { then }`
    IfLetSome {
        binding: String,
        value: Expr,
        then: Vec<Stmt>,
    },

    /// Final expression of the body
    Tail(Expr),
}

/// Callee of a call expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Callee {
    /// A function of the runtime crate, e.g. `put_scalar` or `Map::new`
    Runtime(&'static str),

    /// An associated function of the implementing type, `Self::name`
    SelfAssoc(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Local(String),

    /// String literal
    Str(String),

    /// `self.<ident>`
    SelfField(String),

    Ref(Box<Expr>),
    RefMut(Box<Expr>),

    Call {
        callee: Callee,

        /// Explicit type argument, rendered as `::<T>`
        turbofish: Option<String>,

        args: Vec<Expr>,
    },

    /// `expr?`
    Try(Box<Expr>),

    /// `Ok(expr)`
    Ok(Box<Expr>),

    /// `Self { field: expr, .. }`
    StructLit(Vec<(String, Expr)>),

    /// `println!("...")`
    Println(String),

    Unit,
}

impl Expr {
    pub fn local(name: impl Into<String>) -> Self {
        Expr::Local(name.into())
    }

    pub fn str(value: impl Into<String>) -> Self {
        Expr::Str(value.into())
    }

    pub fn reference(expr: Expr) -> Self {
        Expr::Ref(Box::new(expr))
    }

    pub fn reference_mut(expr: Expr) -> Self {
        Expr::RefMut(Box::new(expr))
    }

    pub fn runtime_call(name: &'static str, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Callee::Runtime(name),
            turbofish: None,
            args,
        }
    }

    pub fn with_turbofish(self, ty: impl Into<String>) -> Self {
        match self {
            Expr::Call { callee, args, .. } => Expr::Call {
                callee,
                turbofish: Some(ty.into()),
                args,
            },
            other => other,
        }
    }

    pub fn propagate(expr: Expr) -> Self {
        Expr::Try(Box::new(expr))
    }

    pub fn ok(expr: Expr) -> Self {
        Expr::Ok(Box::new(expr))
    }
}
