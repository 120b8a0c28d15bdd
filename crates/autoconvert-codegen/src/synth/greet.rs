//! Greeting synthesis: `impl Greet`, printing a fixed greeting.

use crate::capability::Capability;
use crate::ir::{Expr, Function, ImplBlock, Stmt, Ty};
use crate::schema::TypeSchema;

pub const GREETING: &str = "Hello";

pub fn synthesize(schema: &TypeSchema) -> ImplBlock {
    ImplBlock {
        capability: Capability::Greet,
        trait_name: "Greet",
        self_ty: schema.name.clone(),
        function: Function {
            name: "say_hello",
            takes_self: true,
            params: Vec::new(),
            ret: Ty::result(Ty::Unit),
            body: vec![
                Stmt::Expr(Expr::Println(GREETING.to_string())),
                Stmt::Tail(Expr::ok(Expr::Unit)),
            ],
        },
    }
}
