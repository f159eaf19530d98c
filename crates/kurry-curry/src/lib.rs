//! # Kurry
//!
//! Type-checked curry engine. `Module::def` wraps a function with one type
//! constraint per parameter; the result accepts its arguments one at a
//! time or in any grouping, honours the `__` placeholder, and validates
//! each argument as soon as it is supplied.

mod config;
mod curry;
mod module;
mod prelude;


// Re-export public API
pub use config::{ConfigError, Options, CHECK_TYPES_VAR, ENV_VAR};
pub use curry::{Applied, CurriedFunction, Implementation};
pub use module::{create, Module};

pub use kurry_types as types;
pub use kurry_types::{Error, ErrorKind, Type, Value, __};

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use kurry_types::{adt, builtins, Environment, Kind, NullaryType, Tagged, TypeClass};

    fn module() -> Module {
        create(Options::default())
    }

    fn unchecked() -> Module {
        create(Options::default().with_check_types(false))
    }

    fn func<'a>(m: &'a Module, name: &str) -> &'a CurriedFunction {
        m.get(name).unwrap()
    }

    fn arr(items: &[f64]) -> Value {
        Value::array(items.iter().map(|&n| Value::Number(n)).collect())
    }

    #[test]
    fn test_add_one_at_a_time() {
        let m = module();
        let add = func(&m, "add");
        let inc = add.apply(&[Value::from(1)]).unwrap().partial().unwrap();
        assert_eq!(inc.arity(), 1);
        assert_eq!(inc.call(&[Value::from(1)]).unwrap(), Value::from(2));
        assert_eq!(add.call(&[Value::from(1), Value::from(1)]).unwrap(), Value::from(2));
    }

    #[test]
    fn test_add_rejects_non_finite() {
        let m = module();
        let add = func(&m, "add");

        let err = add.call(&[Value::from(2), Value::from(true)]).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidValue { index: 1, .. }));
        assert!(err.to_string().contains("The second argument to ‘add’"));

        let err = add
            .call(&[Value::Number(f64::INFINITY), Value::from(1)])
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidValue { index: 0, .. }));
        assert!(err.to_string().contains("The first argument to ‘add’"));
    }

    #[test]
    fn test_out_of_range_date_is_reported() {
        let m = module();
        let err = func(&m, "add")
            .call(&[Value::Date(1e35), Value::from(1)])
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidValue { index: 0, .. }));
        assert!(err.to_string().contains("1)  new Date(1e+35) :: Date"));
    }

    #[test]
    fn test_fail_fast_reports_first_bad_argument() {
        let m = module();
        let err = func(&m, "add")
            .call(&[Value::from(true), Value::from(false)])
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidValue { index: 0, .. }));
    }

    #[test]
    fn test_constant() {
        let m = module();
        let k = func(&m, "K");
        assert_eq!(
            k.call(&[Value::from("foo"), Value::from("bar")]).unwrap(),
            Value::from("foo")
        );
        let partial = k.apply(&[Value::from("foo")]).unwrap().partial().unwrap();
        assert_eq!(partial.arity(), 1);
        assert_eq!(partial.call(&[Value::from("bar")]).unwrap(), Value::from("foo"));
        // Independent type variables do not unify.
        assert_eq!(
            k.call(&[Value::from("foo"), Value::from(1)]).unwrap(),
            Value::from("foo")
        );
    }

    #[test]
    fn test_and() {
        let m = module();
        let and = func(&m, "and");
        assert_eq!(and.call(&[arr(&[]), arr(&[42.0])]).unwrap(), arr(&[]));
        assert_eq!(and.call(&[arr(&[42.0]), arr(&[43.0])]).unwrap(), arr(&[43.0]));

        let err = and.call(&[arr(&[]), Value::from(false)]).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::TypeVarViolation { .. }));
        let text = err.to_string();
        assert!(text.starts_with("Type-variable constraint violation"));
        assert!(text.contains("1)  [] :: Array"));
        assert!(text.contains("2)  false :: Boolean"));
    }

    #[test]
    fn test_type_var_checked_across_calls() {
        let m = module();
        let and = func(&m, "and");
        let partial = and.apply(&[arr(&[])]).unwrap().partial().unwrap();
        let err = partial.call(&[Value::from(true)]).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::TypeVarViolation { .. }));

        let later = and.apply(&[__, Value::from(false)]).unwrap().partial().unwrap();
        let err = later.call(&[arr(&[1.0])]).unwrap_err();
        match err.kind {
            ErrorKind::TypeVarViolation { witnesses, .. } => {
                let slots: Vec<usize> = witnesses.iter().map(|w| w.index).collect();
                assert_eq!(slots, vec![0, 1]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_type_class_required() {
        let m = module();
        let err = func(&m, "and")
            .call(&[Value::from(1), Value::from(2)])
            .unwrap_err();
        assert!(matches!(
            err.kind,
            ErrorKind::TypeClassViolation {
                class: TypeClass::BooleanLike,
                ..
            }
        ));
        let err = func(&m, "concat")
            .call(&[Value::from(true), Value::from(false)])
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::TypeClassViolation { .. }));
    }

    #[test]
    fn test_concat() {
        let m = module();
        let concat = func(&m, "concat");
        assert_eq!(
            concat.call(&[Value::from("foo"), Value::from("bar")]).unwrap(),
            Value::from("foobar")
        );
        assert_eq!(
            concat.call(&[arr(&[1.0]), arr(&[2.0])]).unwrap(),
            arr(&[1.0, 2.0])
        );
        assert_eq!(
            concat
                .call(&[adt::nothing(), adt::just(Value::from("x"))])
                .unwrap(),
            adt::just(Value::from("x"))
        );
    }

    #[test]
    fn test_placeholder_defers_argument() {
        let m = module();
        let k = func(&m, "K");
        let waiting = k.apply(&[__, Value::from("b")]).unwrap().partial().unwrap();
        assert_eq!(waiting.arity(), 1);
        assert_eq!(waiting.call(&[Value::from("a")]).unwrap(), Value::from("a"));

        let same = k.apply(&[__]).unwrap().partial().unwrap();
        assert_eq!(same.arity(), 2);
        let same = k.apply(&[]).unwrap().partial().unwrap();
        assert_eq!(same.arity(), 2);
    }

    #[test]
    fn test_over_application() {
        let m = module();
        let add = func(&m, "add");
        let err = add
            .call(&[Value::from(1), Value::from(2), Value::from(3)])
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ArityMismatch { expected: 2, found: 3 });
        assert_eq!(
            err.to_string(),
            "‘add’ requires two arguments; received three arguments."
        );

        let partial = add.apply(&[Value::from(1)]).unwrap().partial().unwrap();
        let err = partial.call(&[Value::from(2), Value::from(3)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "‘add’ requires one argument; received two arguments."
        );
    }

    #[test]
    fn test_trailing_placeholders_are_not_counted() {
        let m = module();
        let add = func(&m, "add");

        let partial = add.apply(&[Value::from(1), __, __]).unwrap().partial().unwrap();
        assert_eq!(partial.arity(), 1);
        assert_eq!(partial.call(&[Value::from(2)]).unwrap(), Value::from(3));

        let err = add
            .call(&[Value::from(1), __, Value::from(2), Value::from(3)])
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ArityMismatch { expected: 2, found: 3 });

        // One concrete value, but positioned past the last open slot
        let err = add.call(&[__, __, Value::from(1)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "‘add’ requires two arguments; received three arguments."
        );
    }

    #[test]
    fn test_branches_do_not_interfere() {
        let m = module();
        let g = func(&m, "add")
            .apply(&[Value::from(1)])
            .unwrap()
            .partial()
            .unwrap();
        assert_eq!(g.call(&[Value::from(2)]).unwrap(), Value::from(3));
        assert_eq!(g.call(&[Value::from(10)]).unwrap(), Value::from(11));
        assert_eq!(g.arity(), 1);
    }

    #[test]
    fn test_no_implementation_call_on_failure() {
        let m = module();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let f = m.def(
            "count",
            vec![builtins::number(), builtins::string()],
            move |_, _| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(Value::Null)
            },
        );
        assert!(f.call(&[Value::from(1), Value::from(2)]).is_err());
        assert!(f.call(&[Value::from(1), Value::from(1), Value::from(1)]).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(f.call(&[Value::from(1), Value::from("x")]).is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_this_is_passed_through() {
        let m = module();
        let f = m.def("self", vec![builtins::number(), builtins::number()], |this, _| {
            Ok(this.clone())
        });
        let ctx = Value::object([("name", Value::from("ctx"))]);
        let partial = f.apply(&[Value::from(1)]).unwrap().partial().unwrap();
        let result = partial.apply_with(&ctx, &[Value::from(2)]).unwrap();
        assert_eq!(result.complete(), Some(ctx));
    }

    #[test]
    fn test_unchecked_module() {
        let m = unchecked();
        let add = func(&m, "add");
        assert_eq!(add.call(&[Value::from(2), Value::from(true)]).unwrap(), Value::from(3));
        assert_eq!(
            func(&m, "and").call(&[arr(&[]), Value::from(false)]).unwrap(),
            arr(&[])
        );
        assert_eq!(
            func(&m, "concat").call(&[Value::from(1), Value::from("x")]).unwrap(),
            Value::from(1)
        );
        // Arity is still enforced.
        let err = add
            .call(&[Value::from(1), Value::from(2), Value::from(3)])
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ArityMismatch { .. }));
    }

    #[test]
    fn test_unchecked_matches_checked_on_valid_input() {
        let checked = module();
        let loose = unchecked();
        let cases: Vec<(&str, Vec<Value>)> = vec![
            ("add", vec![Value::from(1.5), Value::from(2)]),
            ("and", vec![arr(&[1.0]), arr(&[])]),
            ("or", vec![Value::from(false), Value::from(true)]),
            ("concat", vec![Value::from("a"), Value::from("b")]),
            ("parseInt", vec![Value::from(16), Value::from("ff")]),
            ("fromMaybe", vec![Value::from(0), adt::nothing()]),
        ];
        for (name, args) in cases {
            assert_eq!(
                func(&checked, name).call(&args).unwrap(),
                func(&loose, name).call(&args).unwrap(),
                "{} differs",
                name
            );
        }
    }

    #[test]
    fn test_prop() {
        let m = module();
        let prop = func(&m, "prop");
        let obj = Value::object([("x", Value::from(1))]);
        assert_eq!(prop.call(&[Value::from("x"), obj.clone()]).unwrap(), Value::from(1));

        let err = prop.call(&[Value::from("x"), Value::Null]).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Inaccessible { index: 1, .. }));

        let err = prop.call(&[Value::from("y"), obj]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "‘prop’ expected object to have a property named ‘y’; {\"x\": 1} does not"
        );
    }

    #[test]
    fn test_parse_int() {
        let m = module();
        let parse = func(&m, "parseInt");
        assert_eq!(
            parse.call(&[Value::from(16), Value::from("ff")]).unwrap(),
            adt::just(Value::from(255))
        );
        assert_eq!(
            parse.call(&[Value::from(10), Value::from("xyz")]).unwrap(),
            adt::nothing()
        );

        let err = parse.call(&[Value::from(37), Value::from("1")]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Range("Radix not in [2 .. 36]".to_string()));

        let err = parse.call(&[Value::from(1.5), Value::from("1")]).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidValue { index: 0, .. }));
    }

    #[test]
    fn test_curried_functions_are_values() {
        let m = module();
        let inc = func(&m, "inc").to_value();
        let maybe = func(&m, "maybe");
        assert_eq!(
            maybe
                .call(&[Value::from(0), inc.clone(), adt::just(Value::from(1))])
                .unwrap(),
            Value::from(2)
        );
        assert_eq!(
            maybe.call(&[Value::from(0), inc, adt::nothing()]).unwrap(),
            Value::from(0)
        );

        let add1 = func(&m, "add").call(&[Value::from(1)]).unwrap();
        assert!(add1.is_callable());
        assert_eq!(
            func(&m, "A").call(&[add1, Value::from(2)]).unwrap(),
            Value::from(3)
        );
    }

    #[test]
    fn test_either() {
        let m = module();
        let either = func(&m, "either");
        let left = func(&m, "type").to_value();
        let right = func(&m, "inc").to_value();
        assert_eq!(
            either
                .call(&[left.clone(), right.clone(), adt::right(Value::from(1))])
                .unwrap(),
            Value::from(2)
        );
        assert_eq!(
            either.call(&[left, right, adt::left(Value::from("e"))]).unwrap(),
            Value::from("String")
        );
    }

    #[test]
    fn test_type_reps() {
        let m = module();
        let is = func(&m, "is");
        let number = m.type_rep("Number").unwrap();
        assert_eq!(is.call(&[number.clone(), Value::from(1)]).unwrap(), Value::from(true));
        assert_eq!(is.call(&[number, Value::from("1")]).unwrap(), Value::from(false));
        assert!(m.type_rep("Accessible").is_none());

        let err = is.call(&[Value::from("Number"), Value::from(1)]).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidValue { index: 0, .. }));
        assert!(m.is(&Type::TypeRep, &func(&m, "inc").to_value()));
    }

    #[test]
    fn test_nullary_function() {
        let m = module();
        let nothing = func(&m, "Nothing");
        assert_eq!(nothing.arity(), 0);
        assert_eq!(nothing.call(&[]).unwrap(), adt::nothing());
        let err = nothing.call(&[Value::Null]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "‘Nothing’ requires zero arguments; received one argument."
        );
    }

    #[test]
    fn test_remaining_signature() {
        let m = module();
        let partial = func(&m, "parseInt")
            .apply(&[Value::from(10)])
            .unwrap()
            .partial()
            .unwrap();
        assert_eq!(partial.remaining_signature().to_string(), "parseInt :: String -> Maybe");
        assert_eq!(
            partial.signature().to_string(),
            "parseInt :: Integer -> String -> Maybe"
        );
    }

    #[test]
    fn test_custom_environment() {
        let finite = builtins::finite_number().as_nullary().cloned().unwrap();
        let m = create(Options::default().with_env(Environment::default().with_type(finite)));
        let err = func(&m, "not").call(&[Value::from(1)]).unwrap_err();
        assert!(err.to_string().contains("1)  1 :: Number, FiniteNumber"));
    }

    const SUM: &str = "Sum";

    fn sum(n: f64) -> Value {
        Value::from(Tagged::new(SUM, SUM, vec![Value::Number(n)]))
    }

    fn sum_total(v: &Value) -> Option<f64> {
        v.as_tagged()?.fields.first()?.as_number()
    }

    fn sum_env() -> Environment {
        Environment::default()
            .with_type(NullaryType::new(SUM, |v| v.kind() == Kind::tagged(SUM)))
            .with_semigroup(Kind::tagged(SUM), |_, a, b| {
                Some(sum(sum_total(a)? + sum_total(b)?))
            })
            .with_boolean(Kind::tagged(SUM), |v| sum_total(v).is_some_and(|n| n != 0.0))
    }

    #[test]
    fn test_user_type_joins_type_classes() {
        let m = create(Options::default().with_env(sum_env()));
        let concat = func(&m, "concat");
        assert_eq!(concat.call(&[sum(1.0), sum(2.0)]).unwrap(), sum(3.0));
        assert_eq!(func(&m, "and").call(&[sum(0.0), sum(5.0)]).unwrap(), sum(0.0));
        assert_eq!(func(&m, "or").call(&[sum(0.0), sum(5.0)]).unwrap(), sum(5.0));

        let err = concat
            .call(&[sum(1.0), adt::just(Value::from("x"))])
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::TypeVarViolation { .. }));
        let text = err.to_string();
        assert!(text.contains("1)  Sum(1) :: Sum"));
        assert!(text.contains("2)  Just(\"x\") :: Maybe"));

        // Without the capability the default environment rejects it
        let err = func(&module(), "concat")
            .call(&[sum(1.0), sum(2.0)])
            .unwrap_err();
        assert!(matches!(
            err.kind,
            ErrorKind::TypeClassViolation {
                class: TypeClass::Semigroup,
                ..
            }
        ));
    }

    #[test]
    fn test_shared_across_threads() {
        let m = module();
        let g = func(&m, "add")
            .apply(&[Value::from(1)])
            .unwrap()
            .partial()
            .unwrap();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let g = g.clone();
                std::thread::spawn(move || g.call(&[Value::from(i)]).unwrap())
            })
            .collect();
        let results: Vec<Value> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(
            results,
            vec![Value::from(1), Value::from(2), Value::from(3), Value::from(4)]
        );
    }
}
