//! Property tests: arbitrary sequences of plan operations never break the
//! aggregate's rules, and rejected operations leave the plan untouched.

use chrono::{Duration, NaiveDate, NaiveTime};
use proptest::prelude::*;

use travel_planner::domain::foundation::TravelPlanId;
use travel_planner::domain::planning::{
    Activity, DateRange, Expense, Location, Money, TravelPlan,
};

#[derive(Debug, Clone)]
enum Op {
    AddDay(i64),
    AddActivity { day: i64, start: u32, len: u32 },
    AddExpense { amount: i64, day: i64 },
    SetBudget(i64),
    SetRange { start: i64, len: i64 },
    RemoveDay(i64),
    RemoveExpense(usize),
}

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
}

fn day(offset: i64) -> NaiveDate {
    base() + Duration::days(offset)
}

/// Everyday amounts mixed with amounts at the top of the i64 range.
fn amount_strategy(everyday: i64) -> impl Strategy<Value = i64> {
    prop_oneof![
        3 => 0i64..everyday,
        1 => (i64::MAX - 10)..=i64::MAX,
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-3i64..15).prop_map(Op::AddDay),
        (-3i64..15, 0u32..21, 0u32..4)
            .prop_map(|(day, start, len)| Op::AddActivity { day, start, len }),
        (amount_strategy(2_000_000), -3i64..15).prop_map(|(amount, day)| Op::AddExpense { amount, day }),
        amount_strategy(6_000_000).prop_map(Op::SetBudget),
        (-3i64..8, 0i64..12).prop_map(|(start, len)| Op::SetRange { start, len }),
        (-3i64..15).prop_map(Op::RemoveDay),
        (0usize..6).prop_map(Op::RemoveExpense),
    ]
}

fn new_plan() -> TravelPlan {
    TravelPlan::new(
        TravelPlanId::new(),
        "Sumatra",
        DateRange::new(day(0), day(6)).unwrap(),
        Money::in_default_currency(5_000_000).unwrap(),
    )
    .unwrap()
}

/// Applies `op`, returning whether the plan accepted it.
fn apply(plan: &mut TravelPlan, op: &Op) -> bool {
    match op {
        Op::AddDay(offset) => plan.add_travel_day(day(*offset)).is_ok(),
        Op::AddActivity { day: offset, start, len } => {
            let start_time = NaiveTime::from_hms_opt(*start, 0, 0).unwrap();
            let end_time = NaiveTime::from_hms_opt(start + len, 0, 0).unwrap();
            let location = Location::new("Danau Toba", "Samosir", 2.686, 98.875);
            let activity = Activity::new(start_time, end_time, location, "Outing").unwrap();
            plan.add_activity(day(*offset), activity).is_ok()
        }
        Op::AddExpense { amount, day: offset } => {
            let cost = Money::in_default_currency(*amount).unwrap();
            plan.add_expense(Expense::new("Spend", cost, day(*offset)))
                .is_ok()
        }
        Op::SetBudget(amount) => plan
            .set_budget(Money::in_default_currency(*amount).unwrap())
            .is_ok(),
        Op::SetRange { start, len } => {
            let range = DateRange::new(day(*start), day(start + len)).unwrap();
            plan.set_date_range(range).is_ok()
        }
        Op::RemoveDay(offset) => plan.remove_travel_day(day(*offset)),
        Op::RemoveExpense(index) => match plan.expenses().get(*index).map(|e| *e.id()) {
            Some(id) => plan.remove_expense(&id),
            None => false,
        },
    }
}

fn assert_invariants(plan: &TravelPlan) {
    let range = plan.date_range();

    let exact_total = plan
        .expenses()
        .iter()
        .try_fold(0i64, |total, e| total.checked_add(e.cost().amount()));
    assert!(matches!(exact_total, Some(total) if total <= plan.budget().amount()));
    assert_eq!(exact_total, Some(plan.total_expenses()));
    assert!(plan.remaining_budget() >= 0);
    assert!(plan.days().iter().all(|d| range.contains(d.date())));
    assert!(plan.expenses().iter().all(|e| range.contains(e.date())));

    let mut dates: Vec<_> = plan.days().iter().map(|d| d.date()).collect();
    dates.sort();
    dates.dedup();
    assert_eq!(dates.len(), plan.day_count());

    for travel_day in plan.days() {
        let activities = travel_day.activities();
        for (i, a) in activities.iter().enumerate() {
            for b in &activities[i + 1..] {
                assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }
}

proptest! {
    #[test]
    fn random_operations_preserve_invariants(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut plan = new_plan();
        for op in &ops {
            let before = plan.clone();
            let accepted = apply(&mut plan, op);
            if !accepted {
                prop_assert_eq!(&plan, &before);
            }
            assert_invariants(&plan);
        }
    }

    #[test]
    fn day_set_is_independent_of_insertion_order(
        offsets in prop::collection::vec(0i64..7, 0..10),
        seed in any::<u64>(),
    ) {
        let mut forward = new_plan();
        for offset in &offsets {
            let _ = forward.add_travel_day(day(*offset));
        }

        let mut shuffled = offsets.clone();
        let len = shuffled.len();
        if len > 1 {
            shuffled.rotate_left((seed as usize) % len);
            shuffled.reverse();
        }
        let mut reordered = new_plan();
        for offset in &shuffled {
            let _ = reordered.add_travel_day(day(*offset));
        }

        let mut a: Vec<_> = forward.days().iter().map(|d| d.date()).collect();
        let mut b: Vec<_> = reordered.days().iter().map(|d| d.date()).collect();
        a.sort();
        b.sort();
        prop_assert_eq!(a, b);
    }
}
