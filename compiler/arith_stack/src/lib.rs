//! Stack growth for recursive pipeline stages.
//!
//! Parsing and evaluation recurse once per nesting level, so an input like
//! `((((...1...))))` with a few hundred thousand parentheses would overflow
//! the native stack. Wrapping each recursive step in
//! [`ensure_sufficient_stack`] grows the stack on demand instead.
//!
//! - **Native targets**: `stacker::maybe_grow`
//! - **WASM targets**: direct call

/// Grow when less than this much stack remains (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the red zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Nest {
        Leaf,
        Paren(Box<Nest>),
    }

    fn nested(depth: usize) -> Nest {
        let mut node = Nest::Leaf;
        for _ in 0..depth {
            node = Nest::Paren(Box::new(node));
        }
        node
    }

    fn depth_of(node: &Nest) -> usize {
        ensure_sufficient_stack(|| match node {
            Nest::Leaf => 0,
            Nest::Paren(inner) => depth_of(inner) + 1,
        })
    }

    #[test]
    fn test_shallow_nesting() {
        assert_eq!(depth_of(&nested(10)), 10);
    }

    #[test]
    fn test_deep_nesting() {
        // Would overflow a default 8MB stack without growth
        let tree = nested(200_000);
        assert_eq!(depth_of(&tree), 200_000);
        // Iterative drop keeps the test itself from overflowing.
        let mut cur = tree;
        while let Nest::Paren(inner) = cur {
            cur = *inner;
        }
    }

    #[test]
    fn test_returns_closure_result() {
        let result: Result<f64, &str> = ensure_sufficient_stack(|| Ok(2.5));
        assert_eq!(result, Ok(2.5));
    }
}
