use std::cmp::Ordering;

use monostack::{
    problems::{brackets::is_balanced, car_fleet::car_fleet, min_stack::MinStack, rpn::eval_rpn},
    utils::cmp_ratio,
    EngineError,
};
use proptest::prelude::*;

/// A car leads its own fleet iff it is the slowest among cars sharing its
/// start (lowest index on ties) and arrives strictly after every car ahead.
fn brute_fleets(target: i64, cars: &[(i64, i64)]) -> usize {
    let eta = |i: usize| (target - cars[i].0, cars[i].1);
    (0..cars.len())
        .filter(|&i| {
            let (di, si) = eta(i);
            cars.iter().enumerate().all(|(j, &(pj, _))| {
                if j == i {
                    return true;
                }
                let (dj, sj) = eta(j);
                let ord = cmp_ratio(di, si, dj, sj);
                match pj.cmp(&cars[i].0) {
                    Ordering::Greater => ord == Ordering::Greater,
                    Ordering::Equal => ord == Ordering::Greater || (ord == Ordering::Equal && i < j),
                    Ordering::Less => true,
                }
            })
        })
        .count()
}

fn cars() -> impl Strategy<Value = (i64, Vec<(i64, i64)>)> {
    (1i64..40).prop_flat_map(|target| {
        (
            Just(target),
            prop::collection::vec((0..=target, 1i64..8), 0usize..10),
        )
    })
}

#[derive(Debug, Clone)]
enum Expr {
    Num(i64),
    Bin(Box<Expr>, &'static str, Box<Expr>),
}

impl Expr {
    fn tokens(&self, out: &mut Vec<String>) {
        match self {
            Expr::Num(v) => out.push(v.to_string()),
            Expr::Bin(l, op, r) => {
                l.tokens(out);
                r.tokens(out);
                out.push((*op).to_string());
            }
        }
    }

    /// `None` when evaluation divides by zero or overflows.
    fn eval(&self) -> Option<i64> {
        match self {
            Expr::Num(v) => Some(*v),
            Expr::Bin(l, op, r) => {
                let (a, b) = (l.eval()?, r.eval()?);
                match *op {
                    "+" => a.checked_add(b),
                    "-" => a.checked_sub(b),
                    "*" => a.checked_mul(b),
                    _ => a.checked_div(b),
                }
            }
        }
    }
}

fn expr() -> impl Strategy<Value = Expr> {
    let leaf = (-30i64..30).prop_map(Expr::Num);
    leaf.prop_recursive(5, 48, 2, |inner| {
        (
            inner.clone(),
            prop::sample::select(vec!["+", "-", "*", "/"]),
            inner,
        )
            .prop_map(|(l, op, r)| Expr::Bin(Box::new(l), op, Box::new(r)))
    })
}

proptest! {
    #[test]
    fn car_fleet_matches_pairwise_rule((target, cars) in cars()) {
        let positions: Vec<i64> = cars.iter().map(|c| c.0).collect();
        let speeds: Vec<i64> = cars.iter().map(|c| c.1).collect();
        prop_assert_eq!(car_fleet(target, &positions, &speeds)?, brute_fleets(target, &cars));
    }

    #[test]
    fn min_stack_tracks_shadow(ops in prop::collection::vec(prop::option::of(-20i32..20), 0usize..100)) {
        let mut stack = MinStack::new();
        let mut shadow: Vec<i32> = Vec::new();
        for op in ops {
            match op {
                Some(v) => {
                    stack.push(v);
                    shadow.push(v);
                }
                None => prop_assert_eq!(stack.pop(), shadow.pop()),
            }
            prop_assert_eq!(stack.len(), shadow.len());
            prop_assert_eq!(stack.top(), shadow.last().copied());
            prop_assert_eq!(stack.min(), shadow.iter().copied().min());
        }
    }

    #[test]
    fn rpn_matches_tree_evaluation(e in expr()) {
        let mut tokens = Vec::new();
        e.tokens(&mut tokens);
        match e.eval() {
            Some(v) => prop_assert_eq!(eval_rpn(&tokens), Ok(v)),
            None => {
                let result = eval_rpn(&tokens);
                let rejected = matches!(
                    result,
                    Err(EngineError::DivisionByZero { .. } | EngineError::Overflow { .. })
                );
                prop_assert!(rejected, "expected an arithmetic error, got {:?}", result);
            }
        }
    }

    #[test]
    fn nested_brackets_balance(depth in 0usize..20, kinds in prop::collection::vec(0usize..3, 20)) {
        const PAIRS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('{', '}')];
        let mut text = String::new();
        for &k in &kinds[..depth] {
            text.push(PAIRS[k].0);
        }
        for &k in kinds[..depth].iter().rev() {
            text.push(PAIRS[k].1);
        }
        prop_assert!(is_balanced(&text));
        if depth > 0 {
            text.pop();
            prop_assert!(!is_balanced(&text));
        }
    }
}

#[test]
fn car_fleet_rejects_bad_companion_array() {
    assert!(matches!(
        car_fleet(10, &[1, 2, 3], &[1, 2]),
        Err(EngineError::InvalidArgument { .. })
    ));
}
