//! Native stack growth for the recursive parser, renderer and evaluator.
//!
//! `parse_expression`, expression rendering and `eval` each recurse once per
//! nesting level of the source program, so `(((((1)))))` or a deeply
//! recursive Monkey function consumes host stack proportionally. Wrapping
//! each recursive entry point in [`ensure_sufficient_stack`] lets the host
//! stack grow on demand instead of aborting the process.
//!
//! On `wasm32` the guard is a plain call.

/// Grow when less than this remains (96KB).
const RED_ZONE: usize = 96 * 1024;

/// Size of each freshly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::ensure_sufficient_stack;

    enum Nested {
        Leaf(i64),
        Neg(Box<Nested>),
    }

    fn build(depth: usize) -> Nested {
        let mut node = Nested::Leaf(7);
        for _ in 0..depth {
            node = Nested::Neg(Box::new(node));
        }
        node
    }

    fn eval(node: &Nested) -> i64 {
        ensure_sufficient_stack(|| match node {
            Nested::Leaf(v) => *v,
            Nested::Neg(inner) => -eval(inner),
        })
    }

    #[test]
    fn shallow_nesting_evaluates() {
        assert_eq!(eval(&build(3)), -7);
    }

    #[test]
    fn deep_nesting_does_not_overflow() {
        let tree = build(200_000);
        assert_eq!(eval(&tree), 7);
        // Drop iteratively; the derived drop would recurse.
        let mut node = tree;
        while let Nested::Neg(inner) = node {
            node = *inner;
        }
    }

    #[test]
    fn passes_result_through() {
        let ok: Result<u8, String> = ensure_sufficient_stack(|| Ok(1));
        assert_eq!(ok, Ok(1));
    }
}
