use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};
use tabi_core::{
    is_canonical, move_entry, reassign_times, sort_by_date_time, EntryId, ScheduleEntry,
};

const DATES: &[&str] = &[
    "2024-03-18",
    "2024-03-19",
    "2024-03-20",
    "2024-04-01",
    "2025-01-01",
];

fn arb_slot() -> BoxedStrategy<(String, String)> {
    (0..DATES.len(), 0..24_u32, 0..60_u32)
        .prop_map(|(day, hour, minute)| {
            (DATES[day].to_string(), format!("{hour:02}:{minute:02}"))
        })
        .boxed()
}

prop_compose! {
    fn arb_itinerary()(slots in prop::collection::vec(arb_slot(), 0..12)) -> Vec<ScheduleEntry> {
        slots
            .into_iter()
            .enumerate()
            .map(|(index, (date, time))| {
                let id = index as EntryId + 1;
                ScheduleEntry::new(id, date, time, format!("stop-{id}"), "Osaka")
            })
            .collect()
    }
}

fn arb_itinerary_with_move() -> BoxedStrategy<(Vec<ScheduleEntry>, usize, usize)> {
    arb_itinerary()
        .prop_filter("move needs at least one entry", |entries| !entries.is_empty())
        .prop_flat_map(|entries| {
            let len = entries.len();
            (Just(entries), 0..len, 0..len)
        })
        .boxed()
}

fn sorted_ids(entries: &[ScheduleEntry]) -> Vec<EntryId> {
    let mut ids: Vec<EntryId> = entries.iter().map(|entry| entry.id).collect();
    ids.sort_unstable();
    ids
}

fn dates_by_id(entries: &[ScheduleEntry]) -> HashMap<EntryId, String> {
    entries
        .iter()
        .map(|entry| (entry.id, entry.date.clone()))
        .collect()
}

fn time_pools(entries: &[ScheduleEntry]) -> BTreeMap<String, Vec<String>> {
    let mut pools: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for entry in entries {
        pools
            .entry(entry.date.clone())
            .or_default()
            .push(entry.time.clone());
    }
    for times in pools.values_mut() {
        times.sort();
    }
    pools
}

proptest! {
    #[test]
    fn canonical_sort_is_idempotent(entries in arb_itinerary()) {
        let once = sort_by_date_time(&entries).unwrap();
        let twice = sort_by_date_time(&once).unwrap();
        prop_assert_eq!(&once, &twice);
        prop_assert!(is_canonical(&once).unwrap());
    }

    #[test]
    fn operations_are_permutations(entries in arb_itinerary()) {
        let expected = sorted_ids(&entries);
        prop_assert_eq!(sorted_ids(&sort_by_date_time(&entries).unwrap()), expected.clone());
        prop_assert_eq!(sorted_ids(&reassign_times(&entries).unwrap()), expected);
    }

    #[test]
    fn move_is_permutation_preserving_dates_and_pools(
        (entries, source, target) in arb_itinerary_with_move()
    ) {
        let moved = move_entry(&entries, source, target).unwrap();

        prop_assert_eq!(sorted_ids(&moved), sorted_ids(&entries));
        prop_assert_eq!(dates_by_id(&moved), dates_by_id(&entries));
        prop_assert_eq!(time_pools(&moved), time_pools(&entries));
    }

    #[test]
    fn same_index_move_returns_input(
        (entries, index, _) in arb_itinerary_with_move()
    ) {
        prop_assert_eq!(move_entry(&entries, index, index).unwrap(), entries);
    }

    #[test]
    fn reassign_keeps_dates_and_orders_each_day(entries in arb_itinerary()) {
        let rebucketed = reassign_times(&entries).unwrap();

        prop_assert_eq!(dates_by_id(&rebucketed), dates_by_id(&entries));
        prop_assert!(is_canonical(&rebucketed).unwrap());

        let mut last_time_by_date: HashMap<&str, &str> = HashMap::new();
        for entry in &rebucketed {
            let previous = last_time_by_date.insert(entry.date.as_str(), entry.time.as_str());
            if let Some(previous) = previous {
                prop_assert!(previous <= entry.time.as_str());
            }
        }
    }

    #[test]
    fn moved_entry_takes_its_visual_rank_within_its_day(
        (entries, source, target) in arb_itinerary_with_move()
    ) {
        // Rebucketing first makes visual order canonical, so the drag lands
        // exactly where the UI shows it.
        let canonical = reassign_times(&entries).unwrap();
        let dragged = canonical[source].clone();
        let moved = move_entry(&canonical, source, target).unwrap();

        let mut visual = canonical.clone();
        let entry = visual.remove(source);
        visual.insert(target, entry);
        let expected_rank = visual
            .iter()
            .filter(|entry| entry.date == dragged.date)
            .position(|entry| entry.id == dragged.id)
            .unwrap();
        let actual_rank = moved
            .iter()
            .filter(|entry| entry.date == dragged.date)
            .position(|entry| entry.id == dragged.id)
            .unwrap();
        prop_assert_eq!(actual_rank, expected_rank);
    }
}
