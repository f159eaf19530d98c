//! Representative library functions
//!
//! Each function is an ordinary client of `Module::def`. Implementations
//! stay total when checking is disabled: ill-typed input falls back to a
//! loose interpretation instead of panicking.

use std::slice;

use kurry_types::{adt, builtins, Error, Type, TypeClass, Value};

use crate::curry::CurriedFunction;
use crate::module::Module;

pub(crate) fn register(module: &mut Module) {
    let functions = vec![
        add(module),
        inc(module),
        identity(module),
        constant(module),
        apply(module),
        and(module),
        or(module),
        not(module),
        concat(module),
        prop(module),
        type_of(module),
        is(module),
        just(module),
        nothing(module),
        left(module),
        right(module),
        from_maybe(module),
        maybe(module),
        either(module),
        parse_int(module),
    ];
    for function in functions {
        module.export(function);
    }
}

/// Call `f` with a single argument; non-functions yield `undefined`.
fn call1(this: &Value, f: &Value, x: &Value) -> Result<Value, Error> {
    match f.as_function() {
        Some(f) => f.call_with(this, slice::from_ref(x)),
        None => Ok(Value::Undefined),
    }
}

fn to_key(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

fn add(module: &Module) -> CurriedFunction {
    module
        .def(
            "add",
            vec![builtins::finite_number(), builtins::finite_number()],
            |_, args| Ok(Value::Number(args[0].to_number() + args[1].to_number())),
        )
        .returning(builtins::finite_number())
}

fn inc(module: &Module) -> CurriedFunction {
    module
        .def("inc", vec![builtins::finite_number()], |_, args| {
            Ok(Value::Number(args[0].to_number() + 1.0))
        })
        .returning(builtins::finite_number())
}

fn identity(module: &Module) -> CurriedFunction {
    let a = Type::var("a");
    module
        .def("I", vec![a.clone()], |_, args| Ok(args[0].clone()))
        .returning(a)
}

fn constant(module: &Module) -> CurriedFunction {
    let a = Type::var("a");
    module
        .def("K", vec![a.clone(), Type::var("b")], |_, args| Ok(args[0].clone()))
        .returning(a)
}

fn apply(module: &Module) -> CurriedFunction {
    module
        .def(
            "A",
            vec![builtins::function(), Type::var("a")],
            |this, args| call1(this, &args[0], &args[1]),
        )
        .returning(Type::var("b"))
}

fn and(module: &Module) -> CurriedFunction {
    let a = Type::constrained("a", vec![TypeClass::BooleanLike]);
    let env = module.env().clone();
    module
        .def("and", vec![a.clone(), a.clone()], move |_, args| {
            let truthy = env
                .capabilities()
                .to_boolean(&args[0])
                .unwrap_or_else(|| args[0].is_truthy());
            Ok(if truthy { args[1].clone() } else { args[0].clone() })
        })
        .returning(a)
}

fn or(module: &Module) -> CurriedFunction {
    let a = Type::constrained("a", vec![TypeClass::BooleanLike]);
    let env = module.env().clone();
    module
        .def("or", vec![a.clone(), a.clone()], move |_, args| {
            let truthy = env
                .capabilities()
                .to_boolean(&args[0])
                .unwrap_or_else(|| args[0].is_truthy());
            Ok(if truthy { args[0].clone() } else { args[1].clone() })
        })
        .returning(a)
}

fn not(module: &Module) -> CurriedFunction {
    module
        .def("not", vec![builtins::boolean()], |_, args| {
            Ok(Value::Boolean(!args[0].is_truthy()))
        })
        .returning(builtins::boolean())
}

fn concat(module: &Module) -> CurriedFunction {
    let a = Type::constrained("a", vec![TypeClass::Semigroup]);
    let env = module.env().clone();
    module
        .def("concat", vec![a.clone(), a.clone()], move |_, args| {
            Ok(env
                .capabilities()
                .concat(&args[0], &args[1])
                .unwrap_or_else(|| args[0].clone()))
        })
        .returning(a)
}

fn prop(module: &Module) -> CurriedFunction {
    module
        .def(
            "prop",
            vec![builtins::string(), Type::Accessible],
            |_, args| {
                let key = to_key(&args[0]);
                args[1].get(&key).ok_or_else(|| {
                    Error::generic(
                        "prop",
                        format!(
                            "‘prop’ expected object to have a property named ‘{}’; {} does not",
                            key, args[1]
                        ),
                    )
                })
            },
        )
        .returning(builtins::any())
}

fn type_of(module: &Module) -> CurriedFunction {
    module
        .def("type", vec![builtins::any()], |_, args| {
            Ok(Value::from(args[0].kind().name()))
        })
        .returning(builtins::string())
}

fn is(module: &Module) -> CurriedFunction {
    let env = module.env().clone();
    module
        .def("is", vec![Type::TypeRep, builtins::any()], move |_, args| {
            let member = args[0]
                .as_function()
                .and_then(|rep| env.lookup(rep.name()))
                .is_some_and(|ty| ty.test(&args[1]));
            Ok(Value::Boolean(member))
        })
        .returning(builtins::boolean())
}

fn just(module: &Module) -> CurriedFunction {
    module
        .def("Just", vec![Type::var("a")], |_, args| Ok(adt::just(args[0].clone())))
        .returning(builtins::maybe())
}

fn nothing(module: &Module) -> CurriedFunction {
    module
        .def("Nothing", vec![], |_, _| Ok(adt::nothing()))
        .returning(builtins::maybe())
}

fn left(module: &Module) -> CurriedFunction {
    module
        .def("Left", vec![Type::var("a")], |_, args| Ok(adt::left(args[0].clone())))
        .returning(builtins::either())
}

fn right(module: &Module) -> CurriedFunction {
    module
        .def("Right", vec![Type::var("a")], |_, args| Ok(adt::right(args[0].clone())))
        .returning(builtins::either())
}

fn from_maybe(module: &Module) -> CurriedFunction {
    let a = Type::var("a");
    module
        .def("fromMaybe", vec![a.clone(), builtins::maybe()], |_, args| {
            Ok(adt::from_just(&args[1])
                .cloned()
                .unwrap_or_else(|| args[0].clone()))
        })
        .returning(a)
}

fn maybe(module: &Module) -> CurriedFunction {
    let b = Type::var("b");
    module
        .def(
            "maybe",
            vec![b.clone(), builtins::function(), builtins::maybe()],
            |this, args| match adt::from_just(&args[2]) {
                Some(x) => call1(this, &args[1], x),
                None => Ok(args[0].clone()),
            },
        )
        .returning(b)
}

fn either(module: &Module) -> CurriedFunction {
    module
        .def(
            "either",
            vec![builtins::function(), builtins::function(), builtins::either()],
            |this, args| match adt::from_either(&args[2]) {
                Some(Ok(r)) => call1(this, &args[1], r),
                Some(Err(l)) => call1(this, &args[0], l),
                None => Ok(Value::Undefined),
            },
        )
        .returning(Type::var("c"))
}

fn parse_int(module: &Module) -> CurriedFunction {
    module
        .def(
            "parseInt",
            vec![builtins::integer(), builtins::string()],
            |_, args| {
                let radix = args[0].to_number();
                if !(radix.trunc() == radix && (2.0..=36.0).contains(&radix)) {
                    return Err(Error::range("parseInt", "Radix not in [2 .. 36]"));
                }
                let parsed = parse_digits(radix as u32, &to_key(&args[1]));
                Ok(parsed.map_or_else(adt::nothing, |n| adt::just(Value::Number(n))))
            },
        )
        .returning(builtins::maybe())
}

/// Strict integer parsing: optional sign, `0x` prefix for radix 16, and
/// nothing but digits valid in `radix`.
fn parse_digits(radix: u32, s: &str) -> Option<f64> {
    let s = s.trim();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits = if radix == 16 {
        digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
            .unwrap_or(digits)
    } else {
        digits
    };
    if digits.is_empty() {
        return None;
    }
    let mut n = 0.0;
    for c in digits.chars() {
        n = n * f64::from(radix) + f64::from(c.to_digit(radix)?);
    }
    Some(if negative { -n } else { n })
}
