//! Serialize synthesis: `impl ToMap`.

use super::expected_type;
use crate::capability::Capability;
use crate::ir::{Expr, Function, ImplBlock, Stmt, Ty};
use crate::schema::{PropertyKind, TypeSchema};

const MAP: &str = "map";
const VALUE: &str = "value";

pub fn synthesize(schema: &TypeSchema) -> ImplBlock {
    let mut body = vec![Stmt::Let {
        name: MAP.to_string(),
        mutable: !schema.properties.is_empty(),
        value: Expr::runtime_call("Map::new", Vec::new()),
    }];

    for property in &schema.properties {
        let key = schema.key_for(property);
        let field = Expr::SelfField(property.ident.clone());

        let put = |value: Expr| {
            let call = match property.kind() {
                PropertyKind::NestedConvertible | PropertyKind::NullableNestedConvertible => {
                    Expr::runtime_call(
                        "put_nested",
                        vec![
                            Expr::reference_mut(Expr::local(MAP)),
                            Expr::str(&key),
                            value,
                        ],
                    )
                }
                PropertyKind::Scalar | PropertyKind::NullableScalar | PropertyKind::Generic => {
                    Expr::runtime_call(
                        "put_scalar",
                        vec![
                            Expr::reference_mut(Expr::local(MAP)),
                            Expr::str(&key),
                            value,
                            Expr::str(expected_type(property)),
                        ],
                    )
                }
            };
            Stmt::Expr(Expr::propagate(call))
        };

        if property.nullable {
            // None omits the key.
            body.push(Stmt::IfLetSome {
                binding: VALUE.to_string(),
                value: Expr::reference(field),
                then: vec![put(Expr::local(VALUE))],
            });
        } else {
            body.push(put(Expr::reference(field)));
        }
    }

    body.push(Stmt::Tail(Expr::ok(Expr::local(MAP))));

    ImplBlock {
        capability: Capability::Serialize,
        trait_name: "ToMap",
        self_ty: schema.name.clone(),
        function: Function {
            name: "to_map",
            takes_self: true,
            params: Vec::new(),
            ret: Ty::result(Ty::Runtime("Map")),
            body,
        },
    }
}
