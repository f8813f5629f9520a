//! Numeric primitives. Arithmetic wraps on overflow.

use logo_diagnostic::RuntimeErrorKind;
use logo_ir::{Atom, Number};

use super::{arg, number, ARGUMENT1, ARGUMENT2, ONE, TWO};
use crate::Environment;

pub(super) fn install(env: &mut Environment) {
    arithmetic(env, "sum", |x, y| Some(x.wrapping_add(y)));
    arithmetic(env, "difference", |x, y| Some(x.wrapping_sub(y)));
    arithmetic(env, "product", |x, y| Some(x.wrapping_mul(y)));
    arithmetic(env, "quotient", |x, y| (y != 0).then(|| x.wrapping_div(y)));
    arithmetic(env, "remainder", remainder);

    comparison(env, "less?", |x, y| x < y);
    comparison(env, "greater?", |x, y| x > y);

    env.register_primitive("equal?", TWO, |env| {
        let x = arg(env, ARGUMENT1)?;
        let y = arg(env, ARGUMENT2)?;
        env.output(Atom::boolean(x == y))
    });

    env.register_primitive("negate", ONE, |env| {
        let x = number(env, ARGUMENT1)?;
        env.output(Atom::Number(x.wrapping_neg()))
    });

    env.register_primitive("random", ONE, |env| {
        let bound = number(env, ARGUMENT1)?;
        let n = env.random_below(bound);
        env.output(Atom::Number(n))
    });
}

/// Remainder whose sign follows the divisor. `None` for a zero divisor.
fn remainder(x: Number, y: Number) -> Option<Number> {
    if y == 0 {
        return None;
    }
    let r = x.wrapping_rem(y);
    if r != 0 && (r < 0) != (y < 0) {
        Some(r + y)
    } else {
        Some(r)
    }
}

/// A two-number primitive; `op` gives `None` on division by zero.
fn arithmetic(env: &mut Environment, name: &str, op: fn(Number, Number) -> Option<Number>) {
    env.register_primitive(name, TWO, move |env| {
        let x = number(env, ARGUMENT1)?;
        let y = number(env, ARGUMENT2)?;
        match op(x, y) {
            Some(n) => env.output(Atom::Number(n)),
            None => Err(env.error(RuntimeErrorKind::DivideByZero)),
        }
    });
}

fn comparison(env: &mut Environment, name: &str, op: fn(Number, Number) -> bool) {
    env.register_primitive(name, TWO, move |env| {
        let x = number(env, ARGUMENT1)?;
        let y = number(env, ARGUMENT2)?;
        env.output(Atom::boolean(op(x, y)))
    });
}

#[cfg(test)]
mod tests {
    use super::remainder;

    #[test]
    fn remainder_sign_follows_divisor() {
        assert_eq!(remainder(7, 3), Some(1));
        assert_eq!(remainder(-7, 3), Some(2));
        assert_eq!(remainder(7, -3), Some(-2));
        assert_eq!(remainder(-7, -3), Some(-1));
        assert_eq!(remainder(6, -3), Some(0));
        assert_eq!(remainder(1, 0), None);
    }

    #[test]
    fn remainder_extremes() {
        assert_eq!(remainder(i64::MIN, -1), Some(0));
        assert_eq!(remainder(i64::MIN, i64::MAX), Some(i64::MAX - 1));
    }
}
