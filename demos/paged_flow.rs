//! Paged Flow Example
//!
//! Demonstrates sequencing several update steps over one model with
//! ComponentResult::sequence. Shows practical patterns including:
//! - Folding update steps left to right
//! - Effect accumulation across steps
//! - Short-circuiting on the first failure
//! - Caller-owned recovery for out-of-range requests

use confluence::{ComponentResult, NoNotification};

#[derive(Debug, Clone, PartialEq)]
struct Pager {
    page: usize,
    page_count: usize,
    visits: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
enum PagerFx {
    Prefetch(usize),
}

type PagerResult = ComponentResult<Pager, PagerFx, NoNotification, String>;

// A component never guesses a "reasonable" recovery for an out-of-range
// page; it reports the error and leaves the decision to the caller.
fn goto(page: usize) -> impl FnOnce(Pager) -> PagerResult {
    move |mut pager| {
        if page >= pager.page_count {
            return ComponentResult::just_error(format!(
                "page {page} out of range (0..{})",
                pager.page_count
            ));
        }
        pager.page = page;
        pager.visits.push(page);
        ComponentResult::with_model(pager).with_effect(PagerFx::Prefetch(page))
    }
}

fn fresh_pager() -> Pager {
    Pager {
        page: 0,
        page_count: 5,
        visits: Vec::new(),
    }
}

/// Example 1: A successful walk through several pages
fn example_successful_walk() {
    println!("\n=== Example 1: Successful Walk ===");

    let steps: Vec<Box<dyn FnOnce(Pager) -> PagerResult>> = vec![
        Box::new(goto(1)),
        Box::new(goto(3)),
        Box::new(goto(2)),
    ];

    let result: PagerResult = ComponentResult::sequence(steps, fresh_pager());
    let (pager, effects) = result
        .resolve_error(|err| {
            println!("  unexpected: {err}");
            ComponentResult::with_model(fresh_pager())
        })
        .resolve();

    println!("  final page: {}", pager.page);
    println!("  visits: {:?}", pager.visits);
    println!("  prefetches: {:?}", effects.into_vec());
}

/// Example 2: The first out-of-range step stops the walk
fn example_short_circuit() {
    println!("\n=== Example 2: Short Circuit ===");

    let steps: Vec<Box<dyn FnOnce(Pager) -> PagerResult>> = vec![
        Box::new(goto(1)),
        Box::new(goto(9)), // out of range; later steps never run
        Box::new(goto(2)),
    ];

    let result: PagerResult = ComponentResult::sequence(steps, fresh_pager());
    let (pager, effects) = result
        .resolve_error(|err| {
            println!("  recovering from: {err}");
            ComponentResult::with_model(fresh_pager())
        })
        .resolve();

    println!("  recovered to page: {}", pager.page);
    println!("  effects after failure: {:?}", effects.into_vec());
}

fn main() {
    println!("Paged Flow Examples");
    println!("===================");

    example_successful_walk();
    example_short_circuit();

    println!("\n=== All examples completed successfully! ===");
}
