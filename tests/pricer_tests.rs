//! End-to-end scenarios driving the public `Pricer` API directly.

use lob_pricer::{LineOutcome, Pricer};

fn expect_output(pricer: &mut Pricer, line: &str) -> String {
    match pricer.process_line(line).unwrap() {
        LineOutcome::Output(s) => s,
        other => panic!("line {line:?}: expected Output, got {other:?}"),
    }
}

fn expect_noop(pricer: &mut Pricer, line: &str) {
    match pricer.process_line(line).unwrap() {
        LineOutcome::NoOp => {}
        other => panic!("line {line:?}: expected NoOp, got {other:?}"),
    }
}

#[test]
fn test_ask_marginal_emitted_once_target_reached() {
    let mut pricer = Pricer::new(200);
    expect_noop(&mut pricer, "28800538 A b S 10.75 18");
    expect_noop(&mut pricer, "28800562 A c S 10.94 31");
    let out = expect_output(&mut pricer, "28800744 A d S 10.81 151");
    assert_eq!(out, "28800744 B 2164.95");
}

#[test]
fn test_reduce_below_target_emits_na() {
    let mut pricer = Pricer::new(200);
    pricer.process_line("28800538 A b S 10.75 18").unwrap();
    pricer.process_line("28800562 A c S 10.94 31").unwrap();
    pricer.process_line("28800744 A d S 10.81 151").unwrap();
    let out = expect_output(&mut pricer, "28800758 R b 18");
    assert_eq!(out, "28800758 B NA");
}

#[test]
fn test_bid_liquidity_prices_a_sell_quote() {
    let mut pricer = Pricer::new(1);
    let out = expect_output(&mut pricer, "00000001 A x B 10.00 5");
    assert_eq!(out, "00000001 S 10.00");
    expect_noop(&mut pricer, "00000002 A y B 10.00 3");
}

#[test]
fn test_over_reduction_clamps_to_full_cancel() {
    let mut pricer = Pricer::new(1);
    pricer.process_line("00000001 A x B 10.00 5").unwrap();
    pricer.process_line("00000002 A y B 10.00 3").unwrap();
    // x's over-reduction clamps to a full cancel, but y's 3 shares keep
    // the 10.00 level above target, so the marginal price is unchanged.
    expect_noop(&mut pricer, "00000003 R x 100");
}

#[test]
fn test_duplicate_order_id_add_is_ignored() {
    let mut pricer = Pricer::new(10);
    pricer.process_line("t A z B 1.00 10").unwrap();
    expect_noop(&mut pricer, "t A z B 2.00 5");

    // The second add's price must not have taken effect: reducing the
    // original order's full size should drive the bid side back to zero.
    pricer.process_line("t2 R z 10").unwrap();
}

#[test]
fn test_unknown_id_reduce_on_empty_book_is_a_noop() {
    let mut pricer = Pricer::new(10);
    expect_noop(&mut pricer, "t R q 10");
}

#[test]
fn test_malformed_line_is_rejected_without_aborting() {
    let mut pricer = Pricer::new(10);
    match pricer.process_line("not enough fields").unwrap() {
        LineOutcome::Rejected(_) => {}
        other => panic!("expected Rejected, got {other:?}"),
    }
    // The pricer keeps working after a rejected line.
    let out = expect_output(&mut pricer, "00000001 A x B 10.00 5");
    assert_eq!(out, "00000001 S 10.00");
}

#[test]
fn test_add_reduce_symmetry_empties_the_book() {
    let mut pricer = Pricer::new(1);
    pricer.process_line("t1 A a B 10.00 5").unwrap();
    pricer.process_line("t2 A b B 10.00 3").unwrap();
    pricer.process_line("t3 R a 5").unwrap();
    let out = expect_output(&mut pricer, "t4 R b 3");
    assert_eq!(out, "t4 S NA");
}

#[test]
fn test_cross_side_non_interference() {
    let mut pricer = Pricer::new(1);
    let out = expect_output(&mut pricer, "t1 A a B 10.00 5");
    assert!(out.starts_with("t1 S"), "a BID touch must emit an S line, got {out:?}");

    let out = expect_output(&mut pricer, "t2 A b S 11.00 5");
    assert!(out.starts_with("t2 B"), "an ASK touch must emit a B line, got {out:?}");
}

#[test]
fn test_marginal_monotonicity_in_target() {
    use lob_pricer::book::{Book, Order, OrderId, Side};
    use lob_pricer::quote::marginal;

    let mut book = Book::new();
    book.insert_order(Order {
        id: OrderId::new("a"),
        side: Side::Ask,
        price: 1000,
        size: 10,
        timestamp: "t".into(),
    });
    book.insert_order(Order {
        id: OrderId::new("b"),
        side: Side::Ask,
        price: 1100,
        size: 10,
        timestamp: "t".into(),
    });

    let small = marginal(&book, Side::Ask, 5).unwrap();
    let medium = marginal(&book, Side::Ask, 10).unwrap();
    let large = marginal(&book, Side::Ask, 15).unwrap();
    assert!(small <= medium);
    assert!(medium <= large);
}

#[test]
fn test_output_suppression_across_repeated_same_price_touches() {
    let mut pricer = Pricer::new(5);
    let out = expect_output(&mut pricer, "t1 A a S 10.00 5");
    assert_eq!(out, "t1 B 50.00");
    // Adding more liquidity at a strictly worse price does not change the
    // marginal cost of sweeping only 5 shares.
    expect_noop(&mut pricer, "t2 A b S 11.00 5");
}
