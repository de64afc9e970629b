//! Property-based tests for jobs list ordering, pagination, facets and query state.

use std::collections::BTreeSet;

use nomad_client::JobListStub;
use nomad_client::testing::JobFixture;
use nomad_tui::jobs::{FacetKind, JobListView, JobsQuery};
use proptest::prelude::*;

const DATACENTERS: [&str; 5] = ["dfw", "jfk", "lax", "ord", "pdx"];

fn jobs_with_indexes(indexes: &[u64]) -> Vec<JobListStub> {
    indexes
        .iter()
        .enumerate()
        .map(|(i, &index)| JobFixture::new(format!("job-{i}")).modify_index(index).build())
        .collect()
}

fn loaded_view(page_size: usize, jobs: Vec<JobListStub>, query: JobsQuery) -> JobListView {
    let mut view = JobListView::new(page_size, None);
    view.set_query(query);
    view.set_jobs(jobs);
    view
}

fn select(query: &mut JobsQuery, kind: FacetKind, keys: &[String]) {
    for key in keys {
        query.toggle(kind, key);
    }
}

fn all_rows(view: &mut JobListView) -> Vec<String> {
    let mut ids: Vec<String> = view.rows().into_iter().map(|row| row.id).collect();
    while view.next_page() {
        ids.extend(view.rows().into_iter().map(|row| row.id));
    }
    ids
}

proptest! {
    #[test]
    fn rows_are_sorted_by_modify_index_desc(
        indexes in proptest::collection::vec(0u64..10_000, 0..40),
    ) {
        let jobs = jobs_with_indexes(&indexes);
        let mut view = loaded_view(100, jobs.clone(), JobsQuery::default());
        let shown: Vec<u64> = all_rows(&mut view)
            .iter()
            .filter_map(|id| jobs.iter().find(|job| &job.id == id))
            .map(|job| job.modify_index)
            .collect();
        prop_assert!(shown.windows(2).all(|w| w[0] >= w[1]));
        prop_assert_eq!(shown.len(), jobs.len());
    }

    #[test]
    fn pages_partition_the_jobs(
        count in 0usize..60,
        page_size in 1usize..15,
    ) {
        let indexes: Vec<u64> = (0..count as u64).collect();
        let mut view = loaded_view(page_size, jobs_with_indexes(&indexes), JobsQuery::default());

        prop_assert_eq!(view.rows().len(), count.min(page_size));
        prop_assert_eq!(view.page_count(), count.div_ceil(page_size).max(1));

        let ids = all_rows(&mut view);
        let unique: BTreeSet<&String> = ids.iter().collect();
        prop_assert_eq!(ids.len(), count);
        prop_assert_eq!(unique.len(), count);
    }

    #[test]
    fn datacenter_selection_is_union_of_single_selections(
        assignments in proptest::collection::vec(
            proptest::sample::subsequence(DATACENTERS.to_vec(), 1..3),
            1..20,
        ),
        selected in proptest::sample::subsequence(DATACENTERS.to_vec(), 1..4),
    ) {
        let jobs: Vec<JobListStub> = assignments
            .iter()
            .enumerate()
            .map(|(i, dcs)| {
                JobFixture::new(format!("job-{i}"))
                    .modify_index(i as u64)
                    .datacenters(dcs.clone())
                    .build()
            })
            .collect();
        // Only keys that are offered survive a load.
        let offered: BTreeSet<&str> = assignments.iter().flatten().copied().collect();
        let selected: Vec<String> = selected
            .into_iter()
            .filter(|dc| offered.contains(dc))
            .map(String::from)
            .collect();

        let filtered = |keys: Vec<String>| {
            let mut query = JobsQuery::default();
            select(&mut query, FacetKind::Datacenter, &keys);
            let mut view = loaded_view(1000, jobs.clone(), query);
            all_rows(&mut view).into_iter().collect::<BTreeSet<String>>()
        };

        let combined = filtered(selected.clone());
        let union: BTreeSet<String> = if selected.is_empty() {
            jobs.iter().map(|job| job.id.clone()).collect()
        } else {
            selected
                .iter()
                .flat_map(|dc| filtered(vec![dc.clone()]))
                .collect()
        };
        prop_assert_eq!(combined, union);
    }

    #[test]
    fn query_survives_location_round_trip(
        namespace in proptest::option::of("[a-z0-9-]{1,10}"),
        search in "\\PC{0,20}",
        types in proptest::collection::vec("[a-z]{1,8}", 0..3),
        dcs in proptest::collection::vec("[a-z0-9 ]{1,6}", 0..3),
        prefixes in proptest::collection::vec("[a-z.&=\"-]{1,6}", 0..3),
        page in 1usize..50,
    ) {
        let mut query = JobsQuery::default();
        query.set_namespace(namespace);
        query.set_search(search);
        select(&mut query, FacetKind::Type, &types);
        select(&mut query, FacetKind::Datacenter, &dcs);
        select(&mut query, FacetKind::Prefix, &prefixes);
        query.set_page(page);

        let parsed = JobsQuery::parse(&query.to_query_string());
        prop_assert_eq!(parsed, query);
    }
}
